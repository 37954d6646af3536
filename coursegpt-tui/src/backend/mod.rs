//!
//! src/backend/mod.rs
//! Backend 层：把 Update 层的命令变成异步任务
//!
//! Update 层是同步的，不能等待网络。它只往 App 里排队 `BackendCommand`，
//! 主循环取出命令交给 `Backend::dispatch`，后者在 tokio 运行时上 spawn 任务，
//! 任务完成后把 `BackendEvent` 发回主循环，主循环再把它当作
//! `AppMessage::Backend` 交给 Update 层。
//!
//!     Update ──queue──▶ App.commands ──take──▶ Backend::dispatch ──spawn──▶ 任务
//!        ▲                                                                  │
//!        └──────── AppMessage::Backend ◀── try_recv ◀── mpsc ◀──────────────┘
//!
//! 每个命令都带着发起页面的 `CancelToken`，事件原样带回；
//! 令牌已取消的事件由 Update 层丢弃。
//!

mod bridge;
mod config_service;
mod core_service;

pub use bridge::{Backend, BackendCommand, BackendEvent};
pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use core_service::CoreService;
