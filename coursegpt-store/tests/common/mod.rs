//! 共享测试工具：内存版 CourseGPT API

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use coursegpt_store::{
    Activity, CreateModuleRequest, HttpRecordStore, KeyConcept, Lesson, Module, NO_RESOURCES,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// Server-side state of the fake API.
#[derive(Default)]
pub struct FakeApi {
    pub lessons: Vec<Lesson>,
    pub modules: Vec<Module>,
    /// When set, every request answers with this status and body.
    pub forced_failure: Option<(u16, String)>,
    /// Bodies received by `PUT /lessons/{id}`, in order.
    pub received_updates: Vec<Value>,
    next_id: u32,
}

impl FakeApi {
    /// API preloaded with `lessons`.
    pub fn with_lessons(lessons: Vec<Lesson>) -> Self {
        Self {
            lessons,
            ..Self::default()
        }
    }

    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }
}

pub type SharedApi = Arc<Mutex<FakeApi>>;

/// Start the fake API on an ephemeral port; returns a store pointed at it.
pub async fn spawn_fake_api(initial: FakeApi) -> (HttpRecordStore, SharedApi) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake api");
    let addr = listener.local_addr().expect("fake api addr");
    let state: SharedApi = Arc::new(Mutex::new(initial));

    let app = Router::new()
        .route("/api/lessons", get(list_lessons).post(create_lesson))
        .route("/api/lessons/:id", put(update_lesson))
        .route("/api/modules", get(list_modules).post(create_module))
        .with_state(state.clone());

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (HttpRecordStore::new(format!("http://{addr}/api")), state)
}

/// A lesson shaped like the ones the generator produces.
pub fn sample_lesson(id: &str, title: &str) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("All about {title}"),
        learning_outcomes: vec![
            format!("Explain {title}"),
            format!("Use {title} in practice"),
        ],
        key_concepts: vec![KeyConcept {
            term: title.to_string(),
            definition: "A named value".to_string(),
            example: "x = 1".to_string(),
        }],
        activities: vec![Activity {
            kind: "Quiz".to_string(),
            description: "Five short questions".to_string(),
            resources: NO_RESOURCES.to_string(),
        }],
    }
}

fn forced(api: &FakeApi) -> Option<Response> {
    api.forced_failure.as_ref().map(|(status, body)| {
        let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, body.clone()).into_response()
    })
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

async fn list_lessons(State(api): State<SharedApi>) -> Response {
    let api = api.lock().expect("fake api lock");
    if let Some(resp) = forced(&api) {
        return resp;
    }
    Json(api.lessons.clone()).into_response()
}

async fn create_lesson(State(api): State<SharedApi>, Json(body): Json<Value>) -> Response {
    let mut api = api.lock().expect("fake api lock");
    if let Some(resp) = forced(&api) {
        return resp;
    }
    let topic = body["topic"].as_str().unwrap_or_default();
    let concept = body["concept"].as_str().unwrap_or_default();
    if topic.is_empty() || concept.is_empty() {
        return error_body(StatusCode::BAD_REQUEST, "Missing topic or concept");
    }
    let id = api.next_id("lesson");
    let lesson = sample_lesson(&id, &format!("{concept} in {topic}"));
    api.lessons.push(lesson.clone());
    (StatusCode::CREATED, Json(lesson)).into_response()
}

async fn update_lesson(
    State(api): State<SharedApi>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut api = api.lock().expect("fake api lock");
    if let Some(resp) = forced(&api) {
        return resp;
    }
    api.received_updates.push(body.clone());
    let Ok(mut lesson) = serde_json::from_value::<Lesson>(body) else {
        return error_body(StatusCode::BAD_REQUEST, "Malformed lesson");
    };
    let Some(slot) = api.lessons.iter_mut().find(|l| l.id == id) else {
        return error_body(StatusCode::NOT_FOUND, "Lesson not found");
    };
    lesson.id = id;
    *slot = lesson.clone();
    Json(lesson).into_response()
}

async fn list_modules(State(api): State<SharedApi>) -> Response {
    let api = api.lock().expect("fake api lock");
    if let Some(resp) = forced(&api) {
        return resp;
    }
    Json(api.modules.clone()).into_response()
}

async fn create_module(
    State(api): State<SharedApi>,
    Json(req): Json<CreateModuleRequest>,
) -> Response {
    let mut api = api.lock().expect("fake api lock");
    if let Some(resp) = forced(&api) {
        return resp;
    }
    let module = Module {
        id: api.next_id("module"),
        title: req.title,
        lessons: req.lessons,
        prerequisites: req.prerequisites,
        difficulty: req.difficulty,
        estimated_time: req.estimated_time,
    };
    api.modules.push(module.clone());
    (StatusCode::CREATED, Json(module)).into_response()
}
