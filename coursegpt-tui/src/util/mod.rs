//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的基础设施代码。
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 文件日志（stdout 归终端界面所有）
//!         mod terminal;       // 终端初始化和恢复
//!         pub mod text;       // 按显示宽度截断文本
//!
//!     启动顺序（见 src/main.rs）：
//!         1. init_logging    —— 先于一切，失败直接退出
//!         2. init_terminal   —— 原始模式 + 备用屏幕
//!         3. app::run        —— 主循环
//!         4. restore_terminal —— 无论 run 成功与否都执行
//!
//!     · Raw Mode（原始模式）
//!         关闭行缓冲和回显，每个按键立即送达，包括 Ctrl+C
//!
//!     · Alternate Screen（备用屏幕）
//!         TUI 在备用屏幕运行，退出后主屏幕内容原样恢复
//!

mod logging;
mod terminal;
pub mod text;

pub use logging::{LogSettings, init_logging};
pub use terminal::{Term, init_terminal, restore_terminal};
