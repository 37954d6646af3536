//! Editable lesson collection.
//!
//! Holds the committed lessons plus at most one edit session. While a lesson
//! is being edited all field changes go to a scratch copy; the committed copy
//! only changes when the store confirms a save.

use crate::error::{CoreError, CoreResult};
use crate::services::validate_lesson_request;
use crate::types::{CreateLessonRequest, CreateModuleRequest, Lesson};

/// Per-lesson display state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonState {
    Viewing,
    Editing,
}

/// Address of one editable text field inside a lesson.
///
/// List elements are addressed by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LessonField {
    Title,
    Description,
    LearningOutcome(usize),
    ConceptTerm(usize),
    ConceptDefinition(usize),
    ConceptExample(usize),
    ActivityType(usize),
    ActivityDescription(usize),
    ActivityResources(usize),
}

impl LessonField {
    /// Every field of `lesson`, in form order.
    pub fn all_for(lesson: &Lesson) -> Vec<Self> {
        let mut fields = vec![Self::Title, Self::Description];
        fields.extend((0..lesson.learning_outcomes.len()).map(Self::LearningOutcome));
        for i in 0..lesson.key_concepts.len() {
            fields.extend([
                Self::ConceptTerm(i),
                Self::ConceptDefinition(i),
                Self::ConceptExample(i),
            ]);
        }
        for i in 0..lesson.activities.len() {
            fields.extend([
                Self::ActivityType(i),
                Self::ActivityDescription(i),
                Self::ActivityResources(i),
            ]);
        }
        fields
    }

    pub fn label(self) -> String {
        match self {
            Self::Title => "Title".to_string(),
            Self::Description => "Description".to_string(),
            Self::LearningOutcome(i) => format!("Outcome {}", i + 1),
            Self::ConceptTerm(i) => format!("Concept {} term", i + 1),
            Self::ConceptDefinition(i) => format!("Concept {} definition", i + 1),
            Self::ConceptExample(i) => format!("Concept {} example", i + 1),
            Self::ActivityType(i) => format!("Activity {} type", i + 1),
            Self::ActivityDescription(i) => format!("Activity {} description", i + 1),
            Self::ActivityResources(i) => format!("Activity {} resources", i + 1),
        }
    }

    /// Current value of this field in `lesson`; `None` if the position does not exist.
    pub fn read(self, lesson: &Lesson) -> Option<&str> {
        let value = match self {
            Self::Title => &lesson.title,
            Self::Description => &lesson.description,
            Self::LearningOutcome(i) => lesson.learning_outcomes.get(i)?,
            Self::ConceptTerm(i) => &lesson.key_concepts.get(i)?.term,
            Self::ConceptDefinition(i) => &lesson.key_concepts.get(i)?.definition,
            Self::ConceptExample(i) => &lesson.key_concepts.get(i)?.example,
            Self::ActivityType(i) => &lesson.activities.get(i)?.kind,
            Self::ActivityDescription(i) => &lesson.activities.get(i)?.description,
            Self::ActivityResources(i) => &lesson.activities.get(i)?.resources,
        };
        Some(value.as_str())
    }

    fn slot_mut(self, lesson: &mut Lesson) -> Option<&mut String> {
        let slot = match self {
            Self::Title => &mut lesson.title,
            Self::Description => &mut lesson.description,
            Self::LearningOutcome(i) => lesson.learning_outcomes.get_mut(i)?,
            Self::ConceptTerm(i) => &mut lesson.key_concepts.get_mut(i)?.term,
            Self::ConceptDefinition(i) => &mut lesson.key_concepts.get_mut(i)?.definition,
            Self::ConceptExample(i) => &mut lesson.key_concepts.get_mut(i)?.example,
            Self::ActivityType(i) => &mut lesson.activities.get_mut(i)?.kind,
            Self::ActivityDescription(i) => &mut lesson.activities.get_mut(i)?.description,
            Self::ActivityResources(i) => &mut lesson.activities.get_mut(i)?.resources,
        };
        Some(slot)
    }
}

/// The one lesson currently being edited.
#[derive(Debug, Clone)]
pub struct EditSession {
    lesson_id: String,
    original: Lesson,
    scratch: Lesson,
    saving: bool,
    error: Option<String>,
}

impl EditSession {
    fn new(lesson: &Lesson) -> Self {
        Self {
            lesson_id: lesson.id.clone(),
            original: lesson.clone(),
            scratch: lesson.clone(),
            saving: false,
            error: None,
        }
    }

    pub fn lesson_id(&self) -> &str {
        &self.lesson_id
    }

    pub fn scratch(&self) -> &Lesson {
        &self.scratch
    }

    /// Scratch differs from the snapshot taken at start.
    pub fn is_dirty(&self) -> bool {
        self.scratch != self.original
    }

    /// A save for this session is in flight.
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Message from the last failed save.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Inputs of the generate-lesson form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateDraft {
    pub topic: String,
    pub concept: String,
}

#[derive(Debug, Default)]
pub struct LessonBoard {
    lessons: Vec<Lesson>,
    session: Option<EditSession>,
    draft: GenerateDraft,
    generating: bool,
}

impl LessonBoard {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Collection =====

    /// Committed lessons, in store order.
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn get(&self, lesson_id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == lesson_id)
    }

    /// Replace the whole collection with a fresh listing.
    ///
    /// An open session survives only if its lesson is still listed.
    pub fn replace_all(&mut self, lessons: Vec<Lesson>) {
        self.lessons = lessons;
        if let Some(session) = &self.session
            && self.get(&session.lesson_id).is_none()
        {
            log::debug!("edited lesson {} vanished from listing", session.lesson_id);
            self.session = None;
        }
    }

    /// What to render for `lesson_id`: the scratch copy while editing, else the committed copy.
    pub fn displayed(&self, lesson_id: &str) -> Option<&Lesson> {
        match &self.session {
            Some(s) if s.lesson_id == lesson_id => Some(&s.scratch),
            _ => self.get(lesson_id),
        }
    }

    pub fn state_of(&self, lesson_id: &str) -> LessonState {
        match &self.session {
            Some(s) if s.lesson_id == lesson_id => LessonState::Editing,
            _ => LessonState::Viewing,
        }
    }

    // ===== Generate =====

    pub fn draft(&self) -> &GenerateDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut GenerateDraft {
        &mut self.draft
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// Validate the draft and mark generation as outstanding.
    ///
    /// On error nothing changes and no call may be made.
    pub fn begin_generate(&mut self) -> CoreResult<CreateLessonRequest> {
        if self.generating {
            return Err(CoreError::GenerationInProgress);
        }
        let request = CreateLessonRequest {
            topic: self.draft.topic.clone(),
            concept: self.draft.concept.clone(),
        };
        validate_lesson_request(&request)?;
        self.generating = true;
        Ok(request)
    }

    /// Settle an outstanding generation. A created lesson is appended once
    /// and the draft is cleared; a failure leaves collection and draft alone.
    pub fn finish_generate(&mut self, created: Option<Lesson>) {
        self.generating = false;
        let Some(lesson) = created else {
            return;
        };
        if self.get(&lesson.id).is_some() {
            log::debug!("lesson {} already listed, not appending", lesson.id);
        } else {
            self.lessons.push(lesson);
        }
        self.draft = GenerateDraft::default();
    }

    // ===== Edit session =====

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Snapshot `lesson_id` into a scratch copy.
    ///
    /// Refused while another lesson has unsaved changes; a clean session on
    /// another lesson is replaced. Restarting on the same lesson keeps its edits.
    pub fn start_edit(&mut self, lesson_id: &str) -> CoreResult<()> {
        let Some(lesson) = self.get(lesson_id) else {
            return Err(CoreError::LessonNotFound(lesson_id.to_string()));
        };

        if let Some(session) = &self.session {
            if session.lesson_id == lesson_id {
                return Ok(());
            }
            if session.is_dirty() || session.saving {
                return Err(CoreError::EditInProgress(session.original.title.clone()));
            }
        }

        self.session = Some(EditSession::new(lesson));
        Ok(())
    }

    /// Overwrite one field of the scratch copy.
    pub fn set_field(&mut self, field: LessonField, value: impl Into<String>) -> CoreResult<()> {
        let session = self.session.as_mut().ok_or(CoreError::NoActiveEdit)?;
        let slot = field.slot_mut(&mut session.scratch).ok_or_else(|| {
            CoreError::ValidationError(format!("{} does not exist", field.label()))
        })?;
        *slot = value.into();
        Ok(())
    }

    /// Discard the scratch copy. Returns `false` if nothing was being edited.
    pub fn cancel_edit(&mut self) -> bool {
        self.session.take().is_some()
    }

    /// Mark the session as saving and hand out the payload for the update call.
    pub fn begin_save(&mut self) -> CoreResult<(String, Lesson)> {
        let session = self.session.as_mut().ok_or(CoreError::NoActiveEdit)?;
        session.saving = true;
        session.error = None;
        Ok((session.lesson_id.clone(), session.scratch.clone()))
    }

    /// Commit the store's copy of a saved lesson and close its session.
    pub fn apply_saved(&mut self, lesson_id: &str, saved: Lesson) {
        match self.lessons.iter_mut().find(|l| l.id == lesson_id) {
            Some(slot) => *slot = saved,
            None => log::debug!("saved lesson {lesson_id} is no longer listed"),
        }
        if self
            .session
            .as_ref()
            .is_some_and(|s| s.lesson_id == lesson_id)
        {
            self.session = None;
        }
    }

    /// Keep the session and its edits, record the failure inline.
    pub fn save_failed(&mut self, lesson_id: &str, message: impl Into<String>) {
        if let Some(session) = self.session.as_mut().filter(|s| s.lesson_id == lesson_id) {
            session.saving = false;
            session.error = Some(message.into());
        }
    }

    // ===== Module =====

    /// Module request for a lesson, built from its committed id and title.
    pub fn module_request(&self, lesson_id: &str) -> CoreResult<CreateModuleRequest> {
        let lesson = self
            .get(lesson_id)
            .ok_or_else(|| CoreError::LessonNotFound(lesson_id.to_string()))?;
        Ok(CreateModuleRequest::for_lesson(&lesson.id, &lesson.title))
    }
}
