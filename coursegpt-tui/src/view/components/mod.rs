//! 可复用界面组件

pub mod lesson_detail;
pub mod modal;
pub mod navigation;
pub mod notification;
pub mod statusbar;
