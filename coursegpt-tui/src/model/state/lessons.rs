//! 课程页面状态

use coursegpt_core::state::LessonBoard;
use coursegpt_core::types::Lesson;

/// 课程页面状态
#[derive(Debug, Default)]
pub struct LessonsState {
    /// 课程集合与编辑会话
    pub board: LessonBoard,
    /// 当前选中的索引
    pub selected: usize,
    /// 是否正在加载列表
    pub loading: bool,
}

impl LessonsState {
    pub fn new() -> Self {
        Self::default()
    }

    fn len(&self) -> usize {
        self.board.lessons().len()
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

    /// 当前选中的课程（已提交版本）
    pub fn selected_lesson(&self) -> Option<&Lesson> {
        self.board.lessons().get(self.selected)
    }

    pub fn selected_id(&self) -> Option<String> {
        self.selected_lesson().map(|l| l.id.clone())
    }

    /// 设置课程列表，选中项保持在范围内
    pub fn set_lessons(&mut self, lessons: Vec<Lesson>) {
        self.board.replace_all(lessons);
        self.selected = self.selected.min(self.len().saturating_sub(1));
        self.loading = false;
    }
}
