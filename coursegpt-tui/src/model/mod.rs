//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”，只包含数据结构。
//! 所有状态变更都通过 Update 层来触发。
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 导航栏状态
//!         mod page;           // 页面路由
//!
//!         pub mod state;      // 页面数据状态
//!
//!     Page 只是门牌号（当前在哪个页面，含 NotFound 路径），
//!     State 才是房间里的东西：
//!         - LessonsState：课程集合、唯一的编辑会话、生成草稿、选中项
//!         - ModulesState：模块列表、用于解析的课程集合、唯一展开项
//!         - ModalState：当前弹窗（生成、编辑、错误提示、帮助）
//!
//!     App 另外持有：
//!         - notification: 单槽临时通知，3 秒后由 Tick 清除
//!         - scope: 当前页面的取消令牌，离开页面即作废
//!         - commands: 本轮 update 产生的后台命令，主循环取走后交给 Backend
//!

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItemId, NavigationState};
pub use page::Page;
pub use state::{GenerateField, LessonsState, Modal, ModalState, ModulesState};
