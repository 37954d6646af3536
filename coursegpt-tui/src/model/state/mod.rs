//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod lessons;
mod modal;
mod modules;

pub use lessons::LessonsState;
pub use modal::{GenerateField, Modal, ModalState};
pub use modules::ModulesState;
