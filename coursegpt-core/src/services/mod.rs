//! 业务逻辑服务层

mod lesson_service;
mod module_service;

pub use lesson_service::{LessonService, validate_lesson_request};
pub use module_service::ModuleService;

use std::sync::Arc;

use coursegpt_store::RecordStore;

/// 服务上下文 - 持有所有依赖
///
/// 前端创建此上下文并注入具体的记录存储实现。
pub struct ServiceContext {
    /// 记录存储
    pub store: Arc<dyn RecordStore>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}
