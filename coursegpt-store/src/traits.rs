use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CreateLessonRequest, CreateModuleRequest, Lesson, Module};

/// Lesson/module record store.
///
/// Every method is one request/response round trip: no batching,
/// no caching, no retry.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Store identifier (for logs).
    fn id(&self) -> &'static str;

    /// List all lessons.
    async fn list_lessons(&self) -> Result<Vec<Lesson>>;

    /// Generate a lesson for a topic/concept; the store assigns the id.
    async fn create_lesson(&self, req: &CreateLessonRequest) -> Result<Lesson>;

    /// Replace a lesson with the full payload; returns the store's copy.
    async fn update_lesson(&self, lesson_id: &str, lesson: &Lesson) -> Result<Lesson>;

    /// List all modules.
    async fn list_modules(&self) -> Result<Vec<Module>>;

    /// Create a module; the store assigns the id.
    async fn create_module(&self, req: &CreateModuleRequest) -> Result<Module>;
}
