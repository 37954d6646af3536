//! In-memory client state, mutated only from the UI thread.

mod lesson_board;
mod module_board;

pub use lesson_board::{EditSession, GenerateDraft, LessonBoard, LessonField, LessonState};
pub use module_board::{ModuleBoard, ModuleSummary};
