//! 应用主状态结构

use coursegpt_core::{NotificationSlot, ViewScope};

use super::{FocusPanel, LessonsState, ModalState, ModulesState, NavigationState, Page};
use crate::backend::BackendCommand;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// API 地址（标题栏与关于页显示）
    pub api_base_url: String,

    // === 各页面状态 ===
    /// 课程页面状态
    pub lessons: LessonsState,
    /// 模块页面状态
    pub modules: ModulesState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 临时通知（3 秒后自动消失）
    pub notification: NotificationSlot,

    /// 当前页面的取消令牌
    pub scope: ViewScope,

    /// 待发送给 Backend 的命令
    commands: Vec<BackendCommand>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Home,
            status_message: None,
            api_base_url: api_base_url.into(),
            lessons: LessonsState::new(),
            modules: ModulesState::new(),
            modal: ModalState::new(),
            notification: NotificationSlot::new(),
            scope: ViewScope::new(),
            commands: Vec::new(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 排队一个后台命令（主循环负责发送）
    pub fn queue(&mut self, command: BackendCommand) {
        self.commands.push(command);
    }

    /// 取出全部待发送命令
    pub fn take_commands(&mut self) -> Vec<BackendCommand> {
        std::mem::take(&mut self.commands)
    }

    #[cfg(test)]
    pub fn pending_commands(&self) -> &[BackendCommand] {
        &self.commands
    }
}
