//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use coursegpt_store::StoreError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Lesson not in the local collection
    #[error("Lesson not found: {0}")]
    LessonNotFound(String),

    /// Local input validation failed; the message is user-facing
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Another lesson has unsaved edits
    #[error("Finish or cancel editing \"{0}\" first")]
    EditInProgress(String),

    /// Save/cancel/field change without an edit session
    #[error("No lesson is being edited")]
    NoActiveEdit,

    /// A create-lesson call is still outstanding
    #[error("A lesson is already being generated")]
    GenerationInProgress,

    /// Store error (converted from the store crate)
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl CoreError {
    /// Whether this is expected behaviour (user input, missing record), used for log levels.
    ///
    /// Use `warn` when this returns `true` and `error` otherwise.
    /// **Keep this in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::LessonNotFound(_)
            | Self::ValidationError(_)
            | Self::EditInProgress(_)
            | Self::NoActiveEdit
            | Self::GenerationInProgress => true,
            Self::Store(e) => e.is_expected(),
        }
    }

    /// Raised locally, before any store call was made.
    #[must_use]
    pub fn is_local(&self) -> bool {
        !matches!(self, Self::Store(_))
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
