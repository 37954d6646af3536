//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 用户操作和后台完成事件都被翻译成 Message，
//! Update 层根据 Message 来更新 Model。
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod content;        // 内容面板子消息
//!         mod modal;          // 弹窗子消息
//!         mod navigation;     // 导航面板子消息
//!
//!     两个来源：
//!         - src/event/handler.rs 把按键翻译成 AppMessage
//!         - src/app.rs 把 Backend 送回的事件包成 AppMessage::Backend
//!
//!     之后统一交给 update::update(app, msg)。
//!

mod app;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
