//! CourseGPT HTTP record store

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Result, StoreError};
use crate::http_client::HttpUtils;
use crate::traits::RecordStore;
use crate::types::{CreateLessonRequest, CreateModuleRequest, Lesson, Module};

/// 默认 API 地址
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Record store backed by the CourseGPT REST API.
///
/// Requests carry no timeout: a lesson generation call blocks until the
/// server has finished generating.
#[derive(Debug, Clone)]
pub struct HttpRecordStore {
    client: Client,
    base_url: String,
}

impl HttpRecordStore {
    /// Create a store for `base_url` (trailing slashes are ignored).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a store reusing an existing `reqwest` client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// 执行 GET 请求
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let call = format!("GET {path}");
        let request = self.client.get(self.url(path));
        let text = HttpUtils::execute_request(request, &call).await?;
        HttpUtils::parse_json(&text, &call)
    }

    /// 执行带 JSON body 的请求 (POST / PUT)
    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let call = format!("{method} {path}");
        let payload = serde_json::to_vec(body).map_err(|e| StoreError::Serialization {
            call: call.clone(),
            detail: e.to_string(),
        })?;

        let request = self
            .client
            .request(method, self.url(path))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload);
        let text = HttpUtils::execute_request(request, &call).await?;
        HttpUtils::parse_json(&text, &call)
    }
}

/// `/lessons/{id}` with the id percent-encoded as a single segment.
fn lesson_path(lesson_id: &str) -> String {
    format!("/lessons/{}", urlencoding::encode(lesson_id))
}

impl Default for HttpRecordStore {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    fn id(&self) -> &'static str {
        "http"
    }

    async fn list_lessons(&self) -> Result<Vec<Lesson>> {
        self.get("/lessons").await
    }

    async fn create_lesson(&self, req: &CreateLessonRequest) -> Result<Lesson> {
        self.send_json(Method::POST, "/lessons", req).await
    }

    async fn update_lesson(&self, lesson_id: &str, lesson: &Lesson) -> Result<Lesson> {
        self.send_json(Method::PUT, &lesson_path(lesson_id), lesson)
            .await
    }

    async fn list_modules(&self) -> Result<Vec<Module>> {
        self.get("/modules").await
    }

    async fn create_module(&self, req: &CreateModuleRequest) -> Result<Module> {
        self.send_json(Method::POST, "/modules", req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let store = HttpRecordStore::new("http://example.test/api/");
        assert_eq!(store.base_url(), "http://example.test/api");
        assert_eq!(store.url("/lessons"), "http://example.test/api/lessons");
    }

    #[test]
    fn lesson_id_is_percent_encoded() {
        assert_eq!(lesson_path("unit 1/loops"), "/lessons/unit%201%2Floops");
        assert_eq!(lesson_path("l-1"), "/lessons/l-1");
    }

    #[test]
    fn default_points_at_local_api() {
        let store = HttpRecordStore::default();
        assert_eq!(store.base_url(), DEFAULT_BASE_URL);
        assert_eq!(store.id(), "http");
    }
}
