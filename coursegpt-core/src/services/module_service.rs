//! 模块服务

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::{CreateModuleRequest, Lesson, Module};

/// 模块服务
pub struct ModuleService {
    ctx: Arc<ServiceContext>,
}

impl ModuleService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 列出所有模块
    pub async fn list_modules(&self) -> CoreResult<Vec<Module>> {
        Ok(self.ctx.store.list_modules().await?)
    }

    /// 模块页所需数据：模块列表与用于解析引用的课程列表
    ///
    /// 两个请求并发发出，各自成败互不影响。
    pub async fn load_board(&self) -> (CoreResult<Vec<Module>>, CoreResult<Vec<Lesson>>) {
        let (modules, lessons) =
            futures::join!(self.ctx.store.list_modules(), self.ctx.store.list_lessons());
        (modules.map_err(Into::into), lessons.map_err(Into::into))
    }

    /// 创建模块
    pub async fn create_module(&self, request: &CreateModuleRequest) -> CoreResult<Module> {
        let module = self.ctx.store.create_module(request).await?;
        log::info!(
            "created module {} with {} lesson(s)",
            module.id,
            module.lessons.len()
        );
        Ok(module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::test_utils::{MockRecordStore, create_test_context, sample_lesson};

    #[tokio::test]
    async fn create_module_for_lesson_uses_fixed_policy() {
        let store = Arc::new(MockRecordStore::new());
        let service = ModuleService::new(create_test_context(store.clone()));

        let module = service
            .create_module(&CreateModuleRequest::for_lesson("l-1", "Variables"))
            .await
            .unwrap();

        assert_eq!(module.title, "Module: Variables");
        assert_eq!(module.lessons, vec!["l-1".to_string()]);
        assert_eq!(module.difficulty, "beginner");
        assert_eq!(module.estimated_time, "1 hour");
        assert_eq!(store.modules().await.len(), 1);
    }

    #[tokio::test]
    async fn load_board_reports_each_listing_separately() {
        let store = Arc::new(MockRecordStore::with_lessons(vec![sample_lesson(
            "l-1", "Loops",
        )]));
        store.fail_next("list_modules").await;
        let service = ModuleService::new(create_test_context(store.clone()));

        let (modules, lessons) = service.load_board().await;

        assert!(matches!(modules, Err(CoreError::Store(_))));
        assert_eq!(lessons.unwrap().len(), 1);
        assert_eq!(store.calls("list_modules").await, 1);
        assert_eq!(store.calls("list_lessons").await, 1);
    }
}
