//! Record types, re-exported from the store crate.

pub use coursegpt_store::{
    Activity, CreateLessonRequest, CreateModuleRequest, DEFAULT_DIFFICULTY, KeyConcept, Lesson,
    Module, NO_RESOURCES,
};
