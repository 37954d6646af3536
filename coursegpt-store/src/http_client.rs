//! Generic HTTP client tools
//!
//! One request/response cycle: send, log, classify the status, read the body.
//! There is deliberately no retry loop and no timeout; callers decide what a
//! failure means for their state.

use reqwest::RequestBuilder;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::utils::log_sanitizer::truncate_for_log;

/// Error body returned by the API (`{"error": "..."}`).
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the body of a successful response.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `call` - request label such as `"GET /lessons"` (logs and errors)
    ///
    /// # Returns
    /// * `Ok(response_text)` for any 2xx status
    /// * `Err(StoreError)` for transport failures and non-2xx statuses
    pub async fn execute_request(
        request_builder: RequestBuilder,
        call: &str,
    ) -> Result<String, StoreError> {
        log::debug!("[store] {call}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| StoreError::Network {
                call: call.to_string(),
                detail: e.to_string(),
            })?;

        let status_code = response.status().as_u16();
        log::debug!("[store] {call} -> HTTP {status_code}");

        let response_text = response.text().await.map_err(|e| StoreError::Network {
            call: call.to_string(),
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!("[store] Response Body: {}", truncate_for_log(&response_text));

        match classify_status(status_code, &response_text, call) {
            Some(err) => {
                log::warn!("[store] {err}");
                Err(err)
            }
            None => Ok(response_text),
        }
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(StoreError::Parse)` - parsing failed
    pub fn parse_json<T>(response_text: &str, call: &str) -> Result<T, StoreError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[store] {call}: JSON parse failed: {e}");
            log::error!("[store] Raw response: {}", truncate_for_log(response_text));
            StoreError::Parse {
                call: call.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

/// Map a non-success status to an error; `None` for 2xx.
fn classify_status(status_code: u16, body: &str, call: &str) -> Option<StoreError> {
    if (200..300).contains(&status_code) {
        return None;
    }

    let raw_message = extract_error_message(body);
    let call = call.to_string();
    Some(match status_code {
        400 => StoreError::InvalidRequest { call, raw_message },
        404 => StoreError::NotFound { call, raw_message },
        status => StoreError::Server {
            call,
            status,
            raw_message,
        },
    })
}

/// The API `error` field if the body has one, otherwise the trimmed body.
fn extract_error_message(body: &str) -> Option<String> {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        return Some(parsed.error);
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(truncate_for_log(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- classify_status ----

    #[test]
    fn success_statuses_pass() {
        assert!(classify_status(200, "[]", "GET /lessons").is_none());
        assert!(classify_status(201, "{}", "POST /lessons").is_none());
    }

    #[test]
    fn bad_request_maps_to_invalid_request() {
        let err = classify_status(400, r#"{"error":"Missing topic or concept"}"#, "POST /lessons");
        assert_eq!(
            err,
            Some(StoreError::InvalidRequest {
                call: "POST /lessons".into(),
                raw_message: Some("Missing topic or concept".into()),
            })
        );
    }

    #[test]
    fn not_found_maps_to_not_found() {
        let err = classify_status(404, r#"{"error":"Lesson not found"}"#, "PUT /lessons/x");
        assert!(
            matches!(&err, Some(StoreError::NotFound { raw_message: Some(m), .. }) if m == "Lesson not found"),
            "unexpected: {err:?}"
        );
    }

    #[test]
    fn other_status_keeps_plain_body() {
        let err = classify_status(502, "Bad Gateway", "GET /modules");
        assert_eq!(
            err,
            Some(StoreError::Server {
                call: "GET /modules".into(),
                status: 502,
                raw_message: Some("Bad Gateway".into()),
            })
        );
    }

    #[test]
    fn empty_error_body_has_no_message() {
        let err = classify_status(500, "  ", "GET /modules");
        assert!(
            matches!(&err, Some(StoreError::Server { raw_message: None, status: 500, .. })),
            "unexpected: {err:?}"
        );
    }

    // ---- parse_json ----

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, StoreError> = HttpUtils::parse_json(r#"{"x":42}"#, "test");
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, StoreError> = HttpUtils::parse_json("not json", "test");
        assert!(
            matches!(&result, Err(StoreError::Parse { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
