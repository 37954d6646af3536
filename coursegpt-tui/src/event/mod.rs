//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入转换为 Message。
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!     · poll_event      事件轮询，受 src/app.rs 调用，最长阻塞 timeout
//!     · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Resize(width, height)        // 终端大小变化，下一帧自动重绘
//!             其他                                 // 忽略
//!
//!         键盘事件的判断顺序：
//!             - 有弹窗打开时，全部交给 handle_modal_keys（弹窗独占输入）
//!             - 全局快捷键，就地处理
//!             - 焦点位于导航面板，handle_navigation_keys
//!             - 焦点位于内容面板，handle_content_keys
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 弹窗键盘处理
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     生成课程 / 编辑课程：
//!             Esc         → ModalMessage::Close
//!             Tab / ↓     → ModalMessage::NextField
//!             Shift+Tab/↑ → ModalMessage::PrevField
//!             Enter       → ModalMessage::Confirm
//!             字符输入     → ModalMessage::Input(c)
//!             Backspace   → ModalMessage::Backspace
//!             Alt+m       → ModalMessage::AddToModule（仅编辑）
//!
//!     错误提示 / 帮助：
//!             Enter / Esc → ModalMessage::Close
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
