//! # coursegpt-store
//!
//! Client for the CourseGPT lesson and module API.
//!
//! The API exposes five JSON endpoints under a configurable base URL
//! (default `http://localhost:5000/api`):
//!
//! | Method | Path | Body | Response |
//! |--------|------|------|----------|
//! | `GET` | `/lessons` | | `Lesson[]` |
//! | `POST` | `/lessons` | `{topic, concept}` | `Lesson` |
//! | `PUT` | `/lessons/{id}` | full `Lesson` | `Lesson` |
//! | `GET` | `/modules` | | `Module[]` |
//! | `POST` | `/modules` | `{title, lessons, prerequisites, difficulty, estimated_time}` | `Module` |
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: use rustls for HTTPS base URLs.
//! - **`native-tls`**: use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use coursegpt_store::{CreateLessonRequest, HttpRecordStore, RecordStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = HttpRecordStore::new("http://localhost:5000/api");
//!
//!     let lesson = store
//!         .create_lesson(&CreateLessonRequest {
//!             topic: "Python Programming".to_string(),
//!             concept: "Variables".to_string(),
//!         })
//!         .await?;
//!     println!("{} ({})", lesson.title, lesson.id);
//!
//!     for module in store.list_modules().await? {
//!         println!("{}: {} lessons", module.title, module.lessons.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, StoreError>`](StoreError):
//!
//! - [`StoreError::InvalidRequest`]: HTTP 400, e.g. a missing topic
//! - [`StoreError::NotFound`]: HTTP 404, e.g. updating a deleted lesson
//! - [`StoreError::Server`]: any other non-success status
//! - [`StoreError::Network`]: the request never got a response
//!
//! Nothing is retried.

mod error;
mod http_client;
mod store;
mod traits;
mod types;
mod utils;

pub use error::{Result, StoreError};

pub use store::{DEFAULT_BASE_URL, HttpRecordStore};

pub use traits::RecordStore;

pub use types::{
    Activity, CreateLessonRequest, CreateModuleRequest, DEFAULT_DIFFICULTY,
    DEFAULT_ESTIMATED_TIME, KeyConcept, Lesson, Module, NO_RESOURCES,
};

pub use utils::log_sanitizer::truncate_for_log;
