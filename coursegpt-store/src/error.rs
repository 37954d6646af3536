use serde::{Deserialize, Serialize};

/// Unified error type for all record store operations.
///
/// Each variant carries a `call` field naming the request that failed
/// (for example `"PUT /lessons/42"`), plus variant-specific context.
/// All variants are serializable for structured error reporting.
///
/// The store never retries. Transient failures surface as
/// [`Network`](Self::Network) and are left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum StoreError {
    /// A transport-level error occurred (connection refused, DNS failure, reset, etc.).
    Network {
        /// Request that produced the error.
        call: String,
        /// Error details.
        detail: String,
    },

    /// The API rejected the request body (HTTP 400).
    InvalidRequest {
        /// Request that produced the error.
        call: String,
        /// Message from the API `error` field, if available.
        raw_message: Option<String>,
    },

    /// The addressed record does not exist on the server (HTTP 404).
    NotFound {
        /// Request that produced the error.
        call: String,
        /// Message from the API `error` field, if available.
        raw_message: Option<String>,
    },

    /// Any other non-success status.
    Server {
        /// Request that produced the error.
        call: String,
        /// HTTP status code.
        status: u16,
        /// Message from the API `error` field, or the raw body.
        raw_message: Option<String>,
    },

    /// Failed to parse the API response.
    Parse {
        /// Request that produced the error.
        call: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    Serialization {
        /// Request that produced the error.
        call: String,
        /// Details about the serialization failure.
        detail: String,
    },
}

impl StoreError {
    /// Whether the error is expected behaviour (bad input, missing record), used for log levels.
    ///
    /// Use `warn` when this returns `true` and `error` otherwise.
    /// **Keep this in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::InvalidRequest { .. } | Self::NotFound { .. })
    }

    /// The request label this error belongs to.
    pub fn call(&self) -> &str {
        match self {
            Self::Network { call, .. }
            | Self::InvalidRequest { call, .. }
            | Self::NotFound { call, .. }
            | Self::Server { call, .. }
            | Self::Parse { call, .. }
            | Self::Serialization { call, .. } => call,
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network { call, detail } => {
                write!(f, "[{call}] Network error: {detail}")
            }
            Self::InvalidRequest { call, raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{call}] Invalid request: {msg}")
                } else {
                    write!(f, "[{call}] Invalid request")
                }
            }
            Self::NotFound { call, raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{call}] Not found: {msg}")
                } else {
                    write!(f, "[{call}] Not found")
                }
            }
            Self::Server {
                call,
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{call}] Server error (HTTP {status}): {msg}")
                } else {
                    write!(f, "[{call}] Server error (HTTP {status})")
                }
            }
            Self::Parse { call, detail } => {
                write!(f, "[{call}] Parse error: {detail}")
            }
            Self::Serialization { call, detail } => {
                write!(f, "[{call}] Serialization error: {detail}")
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Convenience type alias for `Result<T, StoreError>`.
pub type Result<T> = std::result::Result<T, StoreError>;
