//! 核心服务
//!
//! 封装 coursegpt-core 的各种服务，
//! 提供给 Backend 使用的统一接口

use std::sync::Arc;

use coursegpt_core::services::{LessonService, ModuleService, ServiceContext};
use coursegpt_store::{HttpRecordStore, RecordStore};

/// TUI 核心服务
pub struct CoreService {
    /// 服务上下文（供各服务使用）
    ctx: Arc<ServiceContext>,
}

impl CoreService {
    /// 使用 HTTP 记录存储创建核心服务
    pub fn new(api_base_url: &str) -> Self {
        log::info!("using CourseGPT API at {api_base_url}");
        Self::with_store(Arc::new(HttpRecordStore::new(api_base_url)))
    }

    /// 注入任意记录存储
    pub fn with_store(store: Arc<dyn RecordStore>) -> Self {
        Self {
            ctx: Arc::new(ServiceContext::new(store)),
        }
    }

    /// 获取课程服务
    pub fn lesson(&self) -> LessonService {
        LessonService::new(self.ctx.clone())
    }

    /// 获取模块服务
    pub fn module(&self) -> ModuleService {
        ModuleService::new(self.ctx.clone())
    }
}
