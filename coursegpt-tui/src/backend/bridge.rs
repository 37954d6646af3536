//! 命令/事件桥

use std::sync::Arc;

use coursegpt_core::CancelToken;
use coursegpt_core::CoreResult;
use coursegpt_core::types::{CreateLessonRequest, CreateModuleRequest, Lesson, Module};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use super::CoreService;

/// UI → Backend
#[derive(Debug)]
pub enum BackendCommand {
    FetchLessons {
        token: CancelToken,
    },
    GenerateLesson {
        request: CreateLessonRequest,
        token: CancelToken,
    },
    SaveLesson {
        lesson_id: String,
        lesson: Lesson,
        token: CancelToken,
    },
    /// 模块列表 + 解析用的课程列表
    FetchModuleBoard {
        token: CancelToken,
    },
    CreateModule {
        request: CreateModuleRequest,
        token: CancelToken,
    },
}

/// Backend → UI
#[derive(Debug)]
pub enum BackendEvent {
    LessonsLoaded {
        token: CancelToken,
        result: CoreResult<Vec<Lesson>>,
    },
    LessonGenerated {
        token: CancelToken,
        result: CoreResult<Lesson>,
    },
    LessonSaved {
        token: CancelToken,
        lesson_id: String,
        result: CoreResult<Lesson>,
    },
    ModuleBoardLoaded {
        token: CancelToken,
        modules: CoreResult<Vec<Module>>,
        lessons: CoreResult<Vec<Lesson>>,
    },
    ModuleCreated {
        token: CancelToken,
        result: CoreResult<Module>,
    },
}

impl BackendEvent {
    pub fn token(&self) -> &CancelToken {
        match self {
            Self::LessonsLoaded { token, .. }
            | Self::LessonGenerated { token, .. }
            | Self::LessonSaved { token, .. }
            | Self::ModuleBoardLoaded { token, .. }
            | Self::ModuleCreated { token, .. } => token,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::LessonsLoaded { .. } => "LessonsLoaded",
            Self::LessonGenerated { .. } => "LessonGenerated",
            Self::LessonSaved { .. } => "LessonSaved",
            Self::ModuleBoardLoaded { .. } => "ModuleBoardLoaded",
            Self::ModuleCreated { .. } => "ModuleCreated",
        }
    }
}

/// 在运行时上执行命令，并把结果送回主循环
pub struct Backend {
    core: Arc<CoreService>,
    runtime: Handle,
    events: UnboundedSender<BackendEvent>,
}

impl Backend {
    /// 创建 Backend 以及主循环用来接收事件的一端
    pub fn new(core: CoreService, runtime: Handle) -> (Self, UnboundedReceiver<BackendEvent>) {
        let (events, rx) = unbounded_channel();
        let backend = Self {
            core: Arc::new(core),
            runtime,
            events,
        };
        (backend, rx)
    }

    pub fn dispatch(&self, command: BackendCommand) {
        let core = self.core.clone();
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let event = execute(&core, command).await;
            if events.send(event).is_err() {
                log::debug!("event receiver closed, dropping completion");
            }
        });
    }
}

async fn execute(core: &CoreService, command: BackendCommand) -> BackendEvent {
    match command {
        BackendCommand::FetchLessons { token } => BackendEvent::LessonsLoaded {
            result: core.lesson().list_lessons().await,
            token,
        },
        BackendCommand::GenerateLesson { request, token } => BackendEvent::LessonGenerated {
            result: core.lesson().create_lesson(&request).await,
            token,
        },
        BackendCommand::SaveLesson {
            lesson_id,
            lesson,
            token,
        } => BackendEvent::LessonSaved {
            result: core.lesson().update_lesson(&lesson_id, &lesson).await,
            lesson_id,
            token,
        },
        BackendCommand::FetchModuleBoard { token } => {
            let (modules, lessons) = core.module().load_board().await;
            BackendEvent::ModuleBoardLoaded {
                token,
                modules,
                lessons,
            }
        }
        BackendCommand::CreateModule { request, token } => BackendEvent::ModuleCreated {
            result: core.module().create_module(&request).await,
            token,
        },
    }
}
