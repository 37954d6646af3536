//! 课程服务

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{CreateLessonRequest, Lesson};

/// Both inputs must be non-empty before a lesson can be generated.
///
/// Whitespace counts as input; the text is sent exactly as typed.
pub fn validate_lesson_request(request: &CreateLessonRequest) -> CoreResult<()> {
    if request.topic.is_empty() || request.concept.is_empty() {
        return Err(CoreError::ValidationError(
            "Please enter both a topic and a concept.".to_string(),
        ));
    }
    Ok(())
}

/// 课程服务
pub struct LessonService {
    ctx: Arc<ServiceContext>,
}

impl LessonService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 列出所有课程
    pub async fn list_lessons(&self) -> CoreResult<Vec<Lesson>> {
        Ok(self.ctx.store.list_lessons().await?)
    }

    /// 生成课程（输入为空时不发请求）
    pub async fn create_lesson(&self, request: &CreateLessonRequest) -> CoreResult<Lesson> {
        validate_lesson_request(request)?;
        let lesson = self.ctx.store.create_lesson(request).await?;
        log::info!(
            "generated lesson {} for {}/{}",
            lesson.id,
            request.topic,
            request.concept
        );
        Ok(lesson)
    }

    /// 保存课程，返回服务器回显
    pub async fn update_lesson(&self, lesson_id: &str, lesson: &Lesson) -> CoreResult<Lesson> {
        let saved = self.ctx.store.update_lesson(lesson_id, lesson).await?;
        log::info!("updated lesson {lesson_id}");
        Ok(saved)
    }
}
