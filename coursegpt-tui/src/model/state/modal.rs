//! 弹窗/对话框状态

/// 生成课程表单中的输入框
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerateField {
    #[default]
    Topic,
    Concept,
}

impl GenerateField {
    pub fn toggle(self) -> Self {
        match self {
            Self::Topic => Self::Concept,
            Self::Concept => Self::Topic,
        }
    }
}

/// 弹窗类型
///
/// 表单数据不在弹窗里：生成草稿和编辑副本都由课程面板持有，
/// 弹窗只记录焦点。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 生成课程（主题 + 概念）
    GenerateLesson { focus: GenerateField },
    /// 编辑课程，`focus` 是字段序号
    EditLesson { focus: usize },
    /// 阻塞式提示，必须手动关闭
    Error { title: String, message: String },
    /// 帮助
    Help,
}

/// 弹窗状态容器
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_generate_lesson(&mut self) {
        self.show(Modal::GenerateLesson {
            focus: GenerateField::Topic,
        });
    }

    pub fn show_edit_lesson(&mut self) {
        self.show(Modal::EditLesson { focus: 0 });
    }

    pub fn show_error(&mut self, title: &str, message: &str) {
        self.show(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    pub fn show_help(&mut self) {
        self.show(Modal::Help);
    }

    pub fn is_generate_lesson(&self) -> bool {
        matches!(self.active, Some(Modal::GenerateLesson { .. }))
    }

    pub fn is_edit_lesson(&self) -> bool {
        matches!(self.active, Some(Modal::EditLesson { .. }))
    }
}
