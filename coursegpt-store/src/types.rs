use serde::{Deserialize, Serialize};

use crate::utils::serde_helpers::{nullable_string, nullable_vec};

/// Sentinel the API uses for an activity without resources.
pub const NO_RESOURCES: &str = "N/A";

/// Difficulty assigned to every module created from a lesson.
///
/// Difficulty is free text on the wire; the API usually sends `beginner`,
/// `intermediate` or `advanced` but stores whatever it is given.
pub const DEFAULT_DIFFICULTY: &str = "beginner";

/// Estimated time assigned to every module created from a lesson.
pub const DEFAULT_ESTIMATED_TIME: &str = "1 hour";

// ============ Lessons ============

/// A generated lesson.
///
/// Nested lists are never `null` on this side of the wire: missing or
/// `null` lists deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Store-assigned identifier (opaque).
    pub id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
    /// Ordered learning outcomes.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub learning_outcomes: Vec<String>,
    /// Ordered key concepts, identified by position.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub key_concepts: Vec<KeyConcept>,
    /// Ordered activities, identified by position.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub activities: Vec<Activity>,
}

/// A key concept inside a lesson.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyConcept {
    #[serde(default, deserialize_with = "nullable_string")]
    pub term: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub definition: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub example: String,
}

/// A learning activity inside a lesson.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Activity type ("Quiz", "Project", ...). Serialized as `type`.
    #[serde(rename = "type", default, deserialize_with = "nullable_string")]
    pub kind: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
    /// Free-form resources; [`NO_RESOURCES`] means none.
    #[serde(default, deserialize_with = "nullable_string")]
    pub resources: String,
}

impl Activity {
    /// Resources to show, or `None` when the activity has none.
    pub fn resource_link(&self) -> Option<&str> {
        let trimmed = self.resources.trim();
        if trimmed.is_empty() || trimmed == NO_RESOURCES {
            None
        } else {
            Some(&self.resources)
        }
    }
}

/// Request body for `POST /lessons`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLessonRequest {
    /// Lesson topic, e.g. "Python Programming".
    pub topic: String,
    /// Key concept to focus on, e.g. "Variables".
    pub concept: String,
}

// ============ Modules ============

/// A module grouping lessons by reference.
///
/// `lessons` holds lesson ids only; they may point at lessons that no
/// longer exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub title: String,
    /// Referenced lesson ids, in display order.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub lessons: Vec<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub prerequisites: Vec<String>,
    /// Shown as sent; `null` becomes empty.
    #[serde(default, deserialize_with = "nullable_string")]
    pub difficulty: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub estimated_time: String,
}

/// Request body for `POST /modules`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateModuleRequest {
    pub title: String,
    pub lessons: Vec<String>,
    pub prerequisites: Vec<String>,
    pub difficulty: String,
    pub estimated_time: String,
}

impl CreateModuleRequest {
    /// Module for a single lesson, using the fixed creation policy:
    /// no prerequisites, beginner difficulty, one hour.
    pub fn for_lesson(lesson_id: &str, lesson_title: &str) -> Self {
        Self {
            title: format!("Module: {lesson_title}"),
            lessons: vec![lesson_id.to_string()],
            prerequisites: Vec::new(),
            difficulty: DEFAULT_DIFFICULTY.to_string(),
            estimated_time: DEFAULT_ESTIMATED_TIME.to_string(),
        }
    }
}
