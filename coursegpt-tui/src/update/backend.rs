//! 后台完成事件
//!
//! 令牌已作废（发起页面已离开）的事件直接丢弃；
//! 其余事件按到达顺序应用，后到者为准。

use coursegpt_core::{Feedback, StoreCall};

use super::present;
use crate::backend::BackendEvent;
use crate::model::App;

pub fn update(app: &mut App, event: BackendEvent) {
    if event.token().is_cancelled() {
        log::debug!("dropping {} from a closed view", event.name());
        return;
    }

    match event {
        BackendEvent::LessonsLoaded { result, .. } => {
            let feedback = Feedback::from_outcome(StoreCall::ListLessons, &result);
            match result {
                Ok(lessons) => {
                    log::debug!("loaded {} lessons", lessons.len());
                    app.lessons.set_lessons(lessons);
                }
                Err(_) => app.lessons.loading = false,
            }
            present(app, &feedback);
            app.clear_status();
        }

        BackendEvent::LessonGenerated { result, .. } => {
            let feedback = Feedback::from_outcome(StoreCall::CreateLesson, &result);
            match result {
                Ok(lesson) => {
                    let id = lesson.id.clone();
                    app.lessons.board.finish_generate(Some(lesson));
                    if let Some(index) = app.lessons.board.lessons().iter().position(|l| l.id == id) {
                        app.lessons.selected = index;
                    }
                    if app.modal.is_generate_lesson() {
                        app.modal.close();
                    }
                }
                Err(_) => app.lessons.board.finish_generate(None),
            }
            present(app, &feedback);
        }

        BackendEvent::LessonSaved {
            lesson_id, result, ..
        } => {
            let feedback = Feedback::from_outcome(StoreCall::UpdateLesson, &result);
            match result {
                Ok(saved) => {
                    app.lessons.board.apply_saved(&lesson_id, saved);
                    // 用户可能已经转去编辑别的课程
                    if app.modal.is_edit_lesson() && app.lessons.board.session().is_none() {
                        app.modal.close();
                    }
                }
                Err(_) => app.lessons.board.save_failed(&lesson_id, feedback.message.clone()),
            }
            present(app, &feedback);
        }

        BackendEvent::ModuleBoardLoaded {
            modules, lessons, ..
        } => {
            match modules {
                Ok(modules) => app.modules.set_modules(modules),
                Err(e) => {
                    app.modules.loading = false;
                    present(app, &Feedback::failure(StoreCall::ListModules, &e));
                }
            }
            // 课程列表失败时模块照常显示，只是展开后解析不到课程
            match lessons {
                Ok(lessons) => app.modules.board.replace_lessons(lessons),
                Err(e) => present(app, &Feedback::failure(StoreCall::ListLessons, &e)),
            }
            app.clear_status();
        }

        BackendEvent::ModuleCreated { result, .. } => {
            if let Ok(module) = &result {
                log::info!("created module {} ({})", module.title, module.id);
            }
            present(app, &Feedback::from_outcome(StoreCall::CreateModule, &result));
        }
    }
}

#[cfg(test)]
mod tests {
    use coursegpt_core::types::{Lesson, Module};
    use coursegpt_core::{CancelToken, CoreError, NotificationKind};
    use coursegpt_store::StoreError;

    use super::*;
    use crate::backend::BackendCommand;
    use crate::message::ModalMessage;
    use crate::model::{Modal, Page};
    use crate::update::tests::app_on;
    use crate::update::{enter_page, modal};

    fn lesson(id: &str, title: &str) -> Lesson {
        Lesson {
            id: id.into(),
            title: title.into(),
            ..Lesson::default()
        }
    }

    fn server_error(call: &str) -> CoreError {
        StoreError::Server {
            call: call.into(),
            status: 500,
            raw_message: None,
        }
        .into()
    }

    fn loaded(app: &mut App, lessons: Vec<Lesson>) {
        let token = app.scope.token();
        update(
            app,
            BackendEvent::LessonsLoaded {
                token,
                result: Ok(lessons),
            },
        );
    }

    #[test]
    fn listing_fills_the_page() {
        let mut app = app_on(Page::Lessons);
        loaded(&mut app, vec![lesson("1", "Loops")]);
        assert!(!app.lessons.loading);
        assert_eq!(app.lessons.board.lessons().len(), 1);
    }

    #[test]
    fn failed_listing_is_silent_and_keeps_state() {
        let mut app = app_on(Page::Lessons);
        loaded(&mut app, vec![lesson("1", "Loops")]);
        let token = app.scope.token();
        update(
            &mut app,
            BackendEvent::LessonsLoaded {
                token,
                result: Err(server_error("GET /lessons")),
            },
        );
        assert_eq!(app.lessons.board.lessons().len(), 1);
        assert!(app.notification.current().is_none());
        assert!(!app.modal.is_open());
    }

    #[test]
    fn late_completion_after_leaving_is_dropped() {
        let mut app = app_on(Page::Lessons);
        let stale = app.scope.token();
        enter_page(&mut app, Page::Modules);

        update(
            &mut app,
            BackendEvent::LessonsLoaded {
                token: stale,
                result: Ok(vec![lesson("1", "Loops")]),
            },
        );
        assert!(app.lessons.board.lessons().is_empty());
    }

    #[test]
    fn generated_lesson_is_appended_once_and_selected() {
        let mut app = app_on(Page::Lessons);
        loaded(&mut app, vec![lesson("1", "Loops")]);
        app.modal.show_generate_lesson();
        for ch in "Python".chars() {
            modal::update(&mut app, ModalMessage::Input(ch));
        }
        modal::update(&mut app, ModalMessage::NextField);
        for ch in "Variables".chars() {
            modal::update(&mut app, ModalMessage::Input(ch));
        }
        modal::update(&mut app, ModalMessage::Confirm);
        let token = app.scope.token();

        update(
            &mut app,
            BackendEvent::LessonGenerated {
                token,
                result: Ok(lesson("srv-7", "Variables in Python")),
            },
        );

        let ids: Vec<_> = app.lessons.board.lessons().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["1", "srv-7"]);
        assert_eq!(app.lessons.selected, 1);
        assert!(!app.modal.is_open());
        assert_eq!(app.lessons.board.draft().topic, "");
        assert!(!app.lessons.board.is_generating());
    }

    #[test]
    fn generation_failure_blocks_and_keeps_draft() {
        let mut app = app_on(Page::Lessons);
        app.lessons.board.draft_mut().topic = "Python".into();
        app.lessons.board.draft_mut().concept = "Variables".into();
        app.lessons.board.begin_generate().unwrap();
        let token = app.scope.token();

        update(
            &mut app,
            BackendEvent::LessonGenerated {
                token,
                result: Err(server_error("POST /lessons")),
            },
        );

        assert!(matches!(
            &app.modal.active,
            Some(Modal::Error { message, .. }) if message == "Failed to generate lesson. Please try again."
        ));
        assert_eq!(app.lessons.board.draft().concept, "Variables");
        assert!(!app.lessons.board.is_generating());
        assert!(app.lessons.board.lessons().is_empty());
    }

    #[test]
    fn successful_save_commits_and_closes_form() {
        let mut app = app_on(Page::Lessons);
        loaded(&mut app, vec![lesson("1", "Loops")]);
        app.lessons.board.start_edit("1").unwrap();
        app.modal.show_edit_lesson();
        modal::update(&mut app, ModalMessage::Input('!'));
        modal::update(&mut app, ModalMessage::Confirm);
        let [BackendCommand::SaveLesson { lesson, .. }] = app.pending_commands() else {
            panic!("expected SaveLesson");
        };
        let echoed = lesson.clone();
        let token = app.scope.token();

        update(
            &mut app,
            BackendEvent::LessonSaved {
                token,
                lesson_id: "1".into(),
                result: Ok(echoed),
            },
        );

        assert_eq!(app.lessons.board.get("1").unwrap().title, "Loops!");
        assert!(app.lessons.board.session().is_none());
        assert!(!app.modal.is_open());
        let note = app.notification.current().unwrap();
        assert_eq!(note.text, "Lesson updated successfully!");
        assert_eq!(note.kind, NotificationKind::Success);
    }

    #[test]
    fn failed_save_keeps_session_and_edits() {
        let mut app = app_on(Page::Lessons);
        loaded(&mut app, vec![lesson("1", "Loops")]);
        app.lessons.board.start_edit("1").unwrap();
        app.modal.show_edit_lesson();
        modal::update(&mut app, ModalMessage::Input('?'));
        modal::update(&mut app, ModalMessage::Confirm);
        let token = app.scope.token();

        update(
            &mut app,
            BackendEvent::LessonSaved {
                token,
                lesson_id: "1".into(),
                result: Err(server_error("PUT /lessons/1")),
            },
        );

        let session = app.lessons.board.session().unwrap();
        assert_eq!(session.scratch().title, "Loops?");
        assert_eq!(session.error(), Some("Failed to update lesson."));
        assert!(!session.is_saving());
        assert!(app.modal.is_edit_lesson());
        assert_eq!(app.lessons.board.get("1").unwrap().title, "Loops");
        assert_eq!(
            app.notification.current().map(|n| n.kind),
            Some(NotificationKind::Error)
        );
    }

    #[test]
    fn module_board_tolerates_failed_lesson_listing() {
        let mut app = app_on(Page::Modules);
        let token = app.scope.token();
        update(
            &mut app,
            BackendEvent::ModuleBoardLoaded {
                token,
                modules: Ok(vec![Module {
                    id: "m".into(),
                    lessons: vec!["999".into()],
                    ..Module::default()
                }]),
                lessons: Err(server_error("GET /lessons")),
            },
        );

        let module = app.modules.selected_module().unwrap().clone();
        assert!(app.modules.board.resolve_lessons(&module).is_empty());
        assert!(app.notification.current().is_none());
    }

    #[test]
    fn module_creation_reports_in_slot() {
        let mut app = app_on(Page::Lessons);
        let token = app.scope.token();
        update(
            &mut app,
            BackendEvent::ModuleCreated {
                token,
                result: Err(server_error("POST /modules")),
            },
        );
        assert_eq!(
            app.notification.current().map(|n| n.text.as_str()),
            Some("Failed to create module.")
        );

        update(
            &mut app,
            BackendEvent::ModuleCreated {
                token: CancelToken::new(),
                result: Ok(Module::default()),
            },
        );
        assert_eq!(
            app.notification.current().map(|n| n.text.as_str()),
            Some("Module created successfully!")
        );
    }
}
