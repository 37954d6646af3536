//! 测试辅助模块
//!
//! 提供 mock 记录存储和便捷的测试工厂方法。

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use coursegpt_store::{RecordStore, Result, StoreError};
use tokio::sync::RwLock;

use crate::services::ServiceContext;
use crate::types::{
    Activity, CreateLessonRequest, CreateModuleRequest, DEFAULT_DIFFICULTY, KeyConcept, Lesson, Module,
    NO_RESOURCES,
};

// ===== MockRecordStore =====

/// In-memory store with per-method call counters and one-shot failures.
pub struct MockRecordStore {
    lessons: RwLock<Vec<Lesson>>,
    modules: RwLock<Vec<Module>>,
    calls: RwLock<HashMap<&'static str, usize>>,
    /// 下一次调用这些方法时返回服务器错误
    fail_next: RwLock<HashSet<&'static str>>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::with_lessons(Vec::new())
    }

    pub fn with_lessons(lessons: Vec<Lesson>) -> Self {
        Self {
            lessons: RwLock::new(lessons),
            modules: RwLock::new(Vec::new()),
            calls: RwLock::new(HashMap::new()),
            fail_next: RwLock::new(HashSet::new()),
        }
    }

    pub async fn fail_next(&self, method: &'static str) {
        self.fail_next.write().await.insert(method);
    }

    pub async fn calls(&self, method: &str) -> usize {
        self.calls.read().await.get(method).copied().unwrap_or(0)
    }

    pub async fn lessons(&self) -> Vec<Lesson> {
        self.lessons.read().await.clone()
    }

    pub async fn modules(&self) -> Vec<Module> {
        self.modules.read().await.clone()
    }

    /// Count the call and return the injected failure, if any.
    async fn enter(&self, method: &'static str, call: String) -> Result<()> {
        *self.calls.write().await.entry(method).or_default() += 1;
        if self.fail_next.write().await.remove(method) {
            return Err(StoreError::Server {
                call,
                status: 500,
                raw_message: Some("injected failure".to_string()),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_lessons(&self) -> Result<Vec<Lesson>> {
        self.enter("list_lessons", "GET /lessons".into()).await?;
        Ok(self.lessons.read().await.clone())
    }

    async fn create_lesson(&self, req: &CreateLessonRequest) -> Result<Lesson> {
        self.enter("create_lesson", "POST /lessons".into()).await?;
        let id = uuid::Uuid::new_v4().to_string();
        let lesson = sample_lesson(&id, &format!("{} in {}", req.concept, req.topic));
        self.lessons.write().await.push(lesson.clone());
        Ok(lesson)
    }

    async fn update_lesson(&self, lesson_id: &str, lesson: &Lesson) -> Result<Lesson> {
        let call = format!("PUT /lessons/{lesson_id}");
        self.enter("update_lesson", call.clone()).await?;
        let mut lessons = self.lessons.write().await;
        let Some(slot) = lessons.iter_mut().find(|l| l.id == lesson_id) else {
            return Err(StoreError::NotFound {
                call,
                raw_message: Some("Lesson not found".to_string()),
            });
        };
        *slot = Lesson {
            id: lesson_id.to_string(),
            ..lesson.clone()
        };
        Ok(slot.clone())
    }

    async fn list_modules(&self) -> Result<Vec<Module>> {
        self.enter("list_modules", "GET /modules".into()).await?;
        Ok(self.modules.read().await.clone())
    }

    async fn create_module(&self, req: &CreateModuleRequest) -> Result<Module> {
        self.enter("create_module", "POST /modules".into()).await?;
        let module = Module {
            id: uuid::Uuid::new_v4().to_string(),
            title: req.title.clone(),
            lessons: req.lessons.clone(),
            prerequisites: req.prerequisites.clone(),
            difficulty: req.difficulty.clone(),
            estimated_time: req.estimated_time.clone(),
        };
        self.modules.write().await.push(module.clone());
        Ok(module)
    }
}

// ===== 工厂方法 =====

pub fn create_test_context(store: Arc<MockRecordStore>) -> Arc<ServiceContext> {
    Arc::new(ServiceContext::new(store))
}

/// A lesson with two outcomes, one concept and one activity.
pub fn sample_lesson(id: &str, title: &str) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("An introduction to {title}"),
        learning_outcomes: vec![format!("Explain {title}"), format!("Apply {title}")],
        key_concepts: vec![KeyConcept {
            term: title.to_string(),
            definition: "Core idea".to_string(),
            example: "for i in range(3)".to_string(),
        }],
        activities: vec![Activity {
            kind: "Quiz".to_string(),
            description: "Short quiz".to_string(),
            resources: NO_RESOURCES.to_string(),
        }],
    }
}

pub fn sample_module(id: &str, lesson_ids: &[&str]) -> Module {
    Module {
        id: id.to_string(),
        title: format!("Module {id}"),
        lessons: lesson_ids.iter().map(ToString::to_string).collect(),
        prerequisites: Vec::new(),
        difficulty: DEFAULT_DIFFICULTY.to_string(),
        estimated_time: "1 hour".to_string(),
    }
}
