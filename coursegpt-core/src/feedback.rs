//! Call outcome reporting.
//!
//! Every store call ends here: the outcome becomes a [`Feedback`] that tells
//! the front end what to show and how (nothing, a blocking alert, or the
//! transient notification slot). Failures are logged on the way through.

use crate::error::CoreError;
use crate::notification::NotificationKind;

/// The remote operation an outcome belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreCall {
    ListLessons,
    CreateLesson,
    UpdateLesson,
    ListModules,
    CreateModule,
}

impl StoreCall {
    pub fn label(self) -> &'static str {
        match self {
            Self::ListLessons => "list lessons",
            Self::CreateLesson => "create lesson",
            Self::UpdateLesson => "update lesson",
            Self::ListModules => "list modules",
            Self::CreateModule => "create module",
        }
    }

    /// How a remote failure of this call is surfaced.
    pub fn failure_policy(self) -> DisplayPolicy {
        match self {
            Self::ListLessons | Self::ListModules => DisplayPolicy::Silent,
            Self::CreateLesson => DisplayPolicy::Blocking,
            Self::UpdateLesson | Self::CreateModule => DisplayPolicy::Transient,
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            Self::ListLessons => "Failed to load lessons.",
            Self::CreateLesson => "Failed to generate lesson. Please try again.",
            Self::UpdateLesson => "Failed to update lesson.",
            Self::ListModules => "Failed to load modules.",
            Self::CreateModule => "Failed to create module.",
        }
    }

    fn success_message(self) -> Option<&'static str> {
        match self {
            Self::UpdateLesson => Some("Lesson updated successfully!"),
            Self::CreateModule => Some("Module created successfully!"),
            Self::ListLessons | Self::CreateLesson | Self::ListModules => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPolicy {
    /// Log only.
    Silent,
    /// Alert the user must dismiss.
    Blocking,
    /// Notification slot, clears on its own.
    Transient,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub call: StoreCall,
    pub message: String,
    pub policy: DisplayPolicy,
    pub failed: bool,
}

impl Feedback {
    /// Feedback for a completed call.
    pub fn success(call: StoreCall) -> Self {
        match call.success_message() {
            Some(message) => Self {
                call,
                message: message.to_string(),
                policy: DisplayPolicy::Transient,
                failed: false,
            },
            None => Self {
                call,
                message: String::new(),
                policy: DisplayPolicy::Silent,
                failed: false,
            },
        }
    }

    /// Feedback for a failed call; logs the error.
    ///
    /// Local refusals carry their own message. Validation problems block,
    /// the rest are transient.
    pub fn failure(call: StoreCall, err: &CoreError) -> Self {
        if err.is_expected() {
            log::warn!("{} failed: {err}", call.label());
        } else {
            log::error!("{} failed: {err}", call.label());
        }

        let (message, policy) = match err {
            CoreError::ValidationError(msg) => (msg.clone(), DisplayPolicy::Blocking),
            CoreError::Store(_) => (call.failure_message().to_string(), call.failure_policy()),
            other => (other.to_string(), DisplayPolicy::Transient),
        };

        Self {
            call,
            message,
            policy,
            failed: true,
        }
    }

    /// Convenience over a `Result`.
    pub fn from_outcome<T>(call: StoreCall, outcome: &Result<T, CoreError>) -> Self {
        match outcome {
            Ok(_) => Self::success(call),
            Err(e) => Self::failure(call, e),
        }
    }

    pub fn notification_kind(&self) -> NotificationKind {
        if self.failed {
            NotificationKind::Error
        } else {
            NotificationKind::Success
        }
    }
}
