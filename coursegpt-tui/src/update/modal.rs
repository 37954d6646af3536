//! 弹窗更新逻辑
//!
//! 表单内容不在弹窗里：生成草稿与编辑副本都由 `LessonBoard` 持有，
//! 这里只负责焦点移动和把按键写进对应字段。

use coursegpt_core::state::LessonField;
use coursegpt_core::{Feedback, StoreCall};

use super::content::add_to_module;
use super::present;
use crate::backend::BackendCommand;
use crate::message::ModalMessage;
use crate::model::{App, GenerateField, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => close(app),
        ModalMessage::NextField => move_focus(app, true),
        ModalMessage::PrevField => move_focus(app, false),
        ModalMessage::Confirm => confirm(app),
        ModalMessage::Input(ch) => edit_focused(app, |value| value.push(ch)),
        ModalMessage::Backspace => edit_focused(app, |value| {
            value.pop();
        }),
        ModalMessage::AddToModule => {
            let lesson_id = app
                .lessons
                .board
                .session()
                .map(|s| s.lesson_id().to_string());
            if let Some(id) = lesson_id {
                add_to_module(app, &id);
            }
        }
    }
}

/// 关闭弹窗；编辑表单关闭即放弃修改
fn close(app: &mut App) {
    if app.modal.is_edit_lesson() && app.lessons.board.cancel_edit() {
        log::debug!("edit cancelled");
    }
    app.modal.close();
}

/// 编辑表单当前的字段列表
fn edit_fields(app: &App) -> Vec<LessonField> {
    app.lessons
        .board
        .session()
        .map(|s| LessonField::all_for(s.scratch()))
        .unwrap_or_default()
}

fn move_focus(app: &mut App, forward: bool) {
    let field_count = edit_fields(app).len();
    match &mut app.modal.active {
        Some(Modal::GenerateLesson { focus }) => *focus = focus.toggle(),
        Some(Modal::EditLesson { focus }) if field_count > 0 => {
            *focus = if forward {
                (*focus + 1) % field_count
            } else {
                (*focus + field_count - 1) % field_count
            };
        }
        _ => {}
    }
}

/// 修改当前焦点所在的输入框
fn edit_focused(app: &mut App, apply: impl FnOnce(&mut String)) {
    match app.modal.active.clone() {
        Some(Modal::GenerateLesson { focus }) => {
            // 生成进行中，表单锁定
            if app.lessons.board.is_generating() {
                return;
            }
            let draft = app.lessons.board.draft_mut();
            match focus {
                GenerateField::Topic => apply(&mut draft.topic),
                GenerateField::Concept => apply(&mut draft.concept),
            }
        }
        Some(Modal::EditLesson { focus }) => {
            let board = &mut app.lessons.board;
            let Some(session) = board.session().filter(|s| !s.is_saving()) else {
                return;
            };
            let Some(field) = LessonField::all_for(session.scratch()).get(focus).copied() else {
                return;
            };
            let mut value = field.read(session.scratch()).unwrap_or_default().to_string();
            apply(&mut value);
            if let Err(e) = board.set_field(field, value) {
                log::warn!("cannot edit {}: {e}", field.label());
            }
        }
        _ => {}
    }
}

fn confirm(app: &mut App) {
    match app.modal.active {
        Some(Modal::GenerateLesson { .. }) => match app.lessons.board.begin_generate() {
            Ok(request) => {
                let token = app.scope.token();
                app.queue(BackendCommand::GenerateLesson { request, token });
            }
            Err(e) => present(app, &Feedback::failure(StoreCall::CreateLesson, &e)),
        },
        Some(Modal::EditLesson { .. }) => {
            if app.lessons.board.session().is_some_and(|s| s.is_saving()) {
                return;
            }
            match app.lessons.board.begin_save() {
                Ok((lesson_id, lesson)) => {
                    let token = app.scope.token();
                    app.queue(BackendCommand::SaveLesson {
                        lesson_id,
                        lesson,
                        token,
                    });
                }
                Err(e) => present(app, &Feedback::failure(StoreCall::UpdateLesson, &e)),
            }
        }
        Some(Modal::Error { .. } | Modal::Help) => app.modal.close(),
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use coursegpt_core::types::{KeyConcept, Lesson};

    use super::*;
    use crate::model::Page;
    use crate::update::tests::app_on;

    fn lesson() -> Lesson {
        Lesson {
            id: "1".into(),
            title: "Loops".into(),
            description: "Repeat things".into(),
            learning_outcomes: vec!["Write a loop".into()],
            key_concepts: vec![KeyConcept {
                term: "for".into(),
                definition: "Iterate".into(),
                example: "for x in xs".into(),
            }],
            activities: Vec::new(),
        }
    }

    fn typing(app: &mut App, text: &str) {
        for ch in text.chars() {
            update(app, ModalMessage::Input(ch));
        }
    }

    fn lessons_page() -> App {
        let mut app = app_on(Page::Lessons);
        app.take_commands();
        app.lessons.set_lessons(vec![lesson()]);
        app
    }

    fn editing() -> App {
        let mut app = lessons_page();
        app.lessons.board.start_edit("1").unwrap();
        app.modal.show_edit_lesson();
        app
    }

    #[test]
    fn generate_with_empty_concept_makes_no_call() {
        let mut app = lessons_page();
        app.modal.show_generate_lesson();
        typing(&mut app, "Python");
        update(&mut app, ModalMessage::Confirm);

        assert!(app.pending_commands().is_empty());
        assert!(!app.lessons.board.is_generating());
        assert!(matches!(
            &app.modal.active,
            Some(Modal::Error { message, .. }) if message == "Please enter both a topic and a concept."
        ));
        // 草稿保留
        assert_eq!(app.lessons.board.draft().topic, "Python");
    }

    #[test]
    fn generate_queues_request_as_typed() {
        let mut app = lessons_page();
        app.modal.show_generate_lesson();
        typing(&mut app, " Python ");
        update(&mut app, ModalMessage::NextField);
        typing(&mut app, "Variables");
        update(&mut app, ModalMessage::Confirm);

        let [BackendCommand::GenerateLesson { request, .. }] = app.pending_commands() else {
            panic!("expected one GenerateLesson command");
        };
        assert_eq!(request.topic, " Python ");
        assert_eq!(request.concept, "Variables");
        assert!(app.lessons.board.is_generating());
    }

    #[test]
    fn form_is_locked_while_generating() {
        let mut app = lessons_page();
        app.modal.show_generate_lesson();
        typing(&mut app, "Rust");
        update(&mut app, ModalMessage::NextField);
        typing(&mut app, "Traits");
        update(&mut app, ModalMessage::Confirm);

        typing(&mut app, "!!");
        update(&mut app, ModalMessage::Confirm);
        assert_eq!(app.lessons.board.draft().concept, "Traits");
        assert_eq!(app.pending_commands().len(), 1);
    }

    #[test]
    fn typing_edits_focused_field_of_scratch_only() {
        let mut app = editing();
        for _ in 0..3 {
            update(&mut app, ModalMessage::Backspace);
        }
        typing(&mut app, "gic");

        assert_eq!(app.lessons.board.displayed("1").unwrap().title, "Logic");
        assert_eq!(app.lessons.board.get("1").unwrap().title, "Loops");
    }

    #[test]
    fn focus_wraps_over_all_fields() {
        let mut app = editing();
        // Title, Description, Outcome 1, 3 concept fields
        update(&mut app, ModalMessage::PrevField);
        assert_eq!(app.modal.active, Some(Modal::EditLesson { focus: 5 }));
        typing(&mut app, "!");
        let scratch = app.lessons.board.session().unwrap().scratch();
        assert_eq!(scratch.key_concepts[0].example, "for x in xs!");

        update(&mut app, ModalMessage::NextField);
        assert_eq!(app.modal.active, Some(Modal::EditLesson { focus: 0 }));
    }

    #[test]
    fn close_discards_scratch() {
        let mut app = editing();
        typing(&mut app, " and more");
        update(&mut app, ModalMessage::Close);

        assert!(!app.modal.is_open());
        assert!(app.lessons.board.session().is_none());
        assert_eq!(app.lessons.board.displayed("1").unwrap().title, "Loops");
    }

    #[test]
    fn confirm_sends_full_scratch_once() {
        let mut app = editing();
        typing(&mut app, "!");
        update(&mut app, ModalMessage::Confirm);
        update(&mut app, ModalMessage::Confirm);

        let [BackendCommand::SaveLesson { lesson_id, lesson, .. }] = app.pending_commands() else {
            panic!("expected one SaveLesson command");
        };
        assert_eq!(lesson_id, "1");
        assert_eq!(lesson.title, "Loops!");
        assert_eq!(lesson.key_concepts.len(), 1);
        assert!(app.modal.is_edit_lesson());
    }

    #[test]
    fn add_to_module_from_form_uses_committed_title() {
        let mut app = editing();
        typing(&mut app, " (draft)");
        update(&mut app, ModalMessage::AddToModule);

        let [BackendCommand::CreateModule { request, .. }] = app.pending_commands() else {
            panic!("expected one CreateModule command");
        };
        assert_eq!(request.title, "Module: Loops");
    }
}
