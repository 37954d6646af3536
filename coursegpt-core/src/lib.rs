//! CourseGPT Core Library
//!
//! Client-side logic shared by every CourseGPT front end:
//! - Lesson and module services over a [`RecordStore`](coursegpt_store::RecordStore)
//! - The editable lesson collection with its single edit session (`state::LessonBoard`)
//! - Module expansion state (`state::ModuleBoard`)
//! - Call feedback, transient notifications and view-scoped cancellation
//!
//! Nothing here touches a terminal or a runtime; front ends own both.

pub mod error;
pub mod feedback;
pub mod notification;
pub mod scope;
pub mod services;
pub mod state;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use feedback::{DisplayPolicy, Feedback, StoreCall};
pub use notification::{Notification, NotificationKind, NotificationSlot};
pub use scope::{CancelToken, ViewScope};
pub use services::{LessonService, ModuleService, ServiceContext};
