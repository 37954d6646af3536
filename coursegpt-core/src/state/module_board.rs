//! Module list with exclusive expansion.

use crate::types::{Lesson, Module};

/// Collapsed one-line view of a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSummary<'a> {
    pub title: &'a str,
    pub difficulty: &'a str,
    pub estimated_time: &'a str,
    /// Number of lesson references, dangling ones included.
    pub lesson_count: usize,
}

/// Modules plus the flat lesson collection used to resolve their references.
///
/// At most one module is expanded at a time.
#[derive(Debug, Default)]
pub struct ModuleBoard {
    modules: Vec<Module>,
    lessons: Vec<Lesson>,
    expanded: Option<String>,
}

impl ModuleBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn get(&self, module_id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == module_id)
    }

    /// Replace the module listing; an expanded module that disappeared collapses.
    pub fn replace_modules(&mut self, modules: Vec<Module>) {
        self.modules = modules;
        if let Some(id) = &self.expanded
            && self.get(id).is_none()
        {
            self.expanded = None;
        }
    }

    /// Replace the lesson collection used for resolution.
    pub fn replace_lessons(&mut self, lessons: Vec<Lesson>) {
        self.lessons = lessons;
    }

    pub fn expanded_id(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn is_expanded(&self, module_id: &str) -> bool {
        self.expanded.as_deref() == Some(module_id)
    }

    /// Expand `module_id`, collapsing any other; collapse it if already expanded.
    ///
    /// Returns whether `module_id` is expanded afterwards.
    pub fn toggle(&mut self, module_id: &str) -> bool {
        if self.is_expanded(module_id) {
            self.expanded = None;
            false
        } else {
            self.expanded = Some(module_id.to_string());
            true
        }
    }

    /// Lessons referenced by `module`, in collection order.
    ///
    /// Each lesson appears at most once; dangling ids match nothing.
    pub fn resolve_lessons(&self, module: &Module) -> Vec<&Lesson> {
        self.lessons
            .iter()
            .filter(|l| module.lessons.contains(&l.id))
            .collect()
    }

    pub fn summary(module: &Module) -> ModuleSummary<'_> {
        ModuleSummary {
            title: &module.title,
            difficulty: &module.difficulty,
            estimated_time: &module.estimated_time,
            lesson_count: module.lessons.len(),
        }
    }
}
