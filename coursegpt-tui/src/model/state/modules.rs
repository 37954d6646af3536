//! 模块页面状态

use coursegpt_core::state::ModuleBoard;
use coursegpt_core::types::Module;

/// 模块页面状态
#[derive(Debug, Default)]
pub struct ModulesState {
    /// 模块列表、课程解析与展开状态
    pub board: ModuleBoard,
    pub selected: usize,
    pub loading: bool,
}

impl ModulesState {
    pub fn new() -> Self {
        Self::default()
    }

    fn len(&self) -> usize {
        self.board.modules().len()
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.len().saturating_sub(1);
    }

    pub fn selected_module(&self) -> Option<&Module> {
        self.board.modules().get(self.selected)
    }

    /// 展开/折叠当前选中的模块
    pub fn toggle_selected(&mut self) -> Option<bool> {
        let id = self.selected_module()?.id.clone();
        Some(self.board.toggle(&id))
    }

    pub fn set_modules(&mut self, modules: Vec<Module>) {
        self.board.replace_modules(modules);
        self.selected = self.selected.min(self.len().saturating_sub(1));
        self.loading = false;
    }
}
