//!
//! src/view/mod.rs
//! View 层：界面渲染
//!
//! 只读 Model，不修改任何状态。每一帧都从头绘制。
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局：标题栏 + 导航 | 页面 + 状态栏
//!         pub mod components;     // 导航、状态栏、弹窗、通知、课程详情
//!         pub mod pages;          // 各页面内容
//!         pub mod theme;          // 颜色方案
//!
//!     绘制顺序（后画的在上层）：
//!         标题栏 → 导航 → 页面 → 状态栏 → 通知 → 弹窗
//!

pub mod components;
mod layout;
pub mod pages;
pub mod theme;

pub use layout::render;
