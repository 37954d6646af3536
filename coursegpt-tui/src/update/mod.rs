//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! 唯一允许修改 Model 的地方。
//! update() 是同步的：需要网络时，只往 App 里排队 BackendCommand，
//! 结果以 AppMessage::Backend 的形式在之后的某一轮回到这里。
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod backend;        // 后台完成事件
//!         mod content;        // 内容面板消息
//!         mod modal;          // 弹窗消息
//!         mod navigation;     // 导航面板消息
//!
//!     页面切换统一走 enter_page()：
//!         1. 作废旧页面的取消令牌（迟到的结果会被 backend::update 丢弃）
//!         2. 重置目标页面的状态
//!         3. 排队目标页面的拉取命令
//!
//!     调用结果统一走 present()：
//!         Feedback 的 DisplayPolicy 决定显示方式
//!             Silent    → 只记日志（Feedback 内部已记）
//!             Blocking  → 错误弹窗，必须手动关闭
//!             Transient → 通知槽，3 秒后由 Tick 清除
//!

mod backend;
mod content;
mod modal;
mod navigation;

use std::time::Instant;

use coursegpt_core::{DisplayPolicy, Feedback};

use crate::backend::BackendCommand;
use crate::message::AppMessage;
use crate::model::{App, LessonsState, ModulesState, Page};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Backend(event) => {
            backend::update(app, event);
        }

        AppMessage::GoBack => {
            if app.modal.is_open() {
                app.modal.close();
            } else if matches!(app.current_page, Page::NotFound { .. }) {
                enter_page(app, Page::Home);
            } else if app.focus.is_content() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Refresh => {
            if queue_fetch(app) {
                app.set_status("Refreshing...");
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Tick => {
            app.notification.tick(Instant::now());
        }

        AppMessage::Noop => {}
    }
}

/// 进入页面：作废旧令牌，重置页面状态，触发该页面的拉取
pub fn enter_page(app: &mut App, page: Page) {
    log::debug!("entering {}", page.path());
    app.scope.renew();
    app.navigation.sync_with(&page);
    app.current_page = page;
    app.clear_status();

    match app.current_page {
        Page::Lessons => app.lessons = LessonsState::new(),
        Page::Modules => app.modules = ModulesState::new(),
        _ => {}
    }
    queue_fetch(app);
}

/// 为当前页面排队拉取命令；页面没有数据时返回 `false`
fn queue_fetch(app: &mut App) -> bool {
    let token = app.scope.token();
    match app.current_page {
        Page::Lessons => {
            app.lessons.loading = true;
            app.queue(BackendCommand::FetchLessons { token });
            true
        }
        Page::Modules => {
            app.modules.loading = true;
            app.queue(BackendCommand::FetchModuleBoard { token });
            true
        }
        _ => false,
    }
}

/// 按显示策略呈现一次调用的结果
fn present(app: &mut App, feedback: &Feedback) {
    match feedback.policy {
        DisplayPolicy::Silent => {}
        DisplayPolicy::Blocking => {
            let title = if feedback.failed { "Error" } else { "Notice" };
            app.modal.show_error(title, &feedback.message);
        }
        DisplayPolicy::Transient => {
            app.notification
                .show(feedback.message.clone(), feedback.notification_kind(), Instant::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FocusPanel, Modal, NavItemId};

    pub(super) fn app_on(page: Page) -> App {
        let mut app = App::new("http://localhost:5000/api");
        enter_page(&mut app, page);
        app
    }

    #[test]
    fn entering_lessons_queues_one_fetch() {
        let app = app_on(Page::Lessons);
        assert!(app.lessons.loading);
        assert!(matches!(
            app.pending_commands(),
            [BackendCommand::FetchLessons { .. }]
        ));
        assert_eq!(app.navigation.current_id(), Some(NavItemId::Lessons));
    }

    #[test]
    fn entering_modules_fetches_the_board() {
        let app = app_on(Page::Modules);
        assert!(matches!(
            app.pending_commands(),
            [BackendCommand::FetchModuleBoard { .. }]
        ));
    }

    #[test]
    fn static_pages_fetch_nothing() {
        let app = app_on(Page::About);
        assert!(app.pending_commands().is_empty());
    }

    #[test]
    fn leaving_a_page_cancels_its_token() {
        let mut app = app_on(Page::Lessons);
        let old = app.scope.token();
        enter_page(&mut app, Page::Modules);
        assert!(old.is_cancelled());
        assert!(!app.scope.token().is_cancelled());
    }

    #[test]
    fn refresh_requeues_current_fetch() {
        let mut app = app_on(Page::Modules);
        app.take_commands();
        update(&mut app, AppMessage::Refresh);
        assert!(matches!(
            app.pending_commands(),
            [BackendCommand::FetchModuleBoard { .. }]
        ));
        assert_eq!(app.status_message.as_deref(), Some("Refreshing..."));
    }

    #[test]
    fn go_back_from_not_found_goes_home() {
        let mut app = app_on(Page::from_path("/nowhere"));
        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.current_page, Page::Home);
    }

    #[test]
    fn go_back_returns_focus_to_navigation() {
        let mut app = app_on(Page::Lessons);
        app.focus = FocusPanel::Content;
        update(&mut app, AppMessage::GoBack);
        assert!(app.focus.is_navigation());
    }

    #[test]
    fn blocking_feedback_opens_error_modal() {
        let mut app = app_on(Page::Lessons);
        let err = coursegpt_core::CoreError::ValidationError("Please enter both a topic and a concept.".into());
        present(
            &mut app,
            &Feedback::failure(coursegpt_core::StoreCall::CreateLesson, &err),
        );
        assert!(matches!(
            &app.modal.active,
            Some(Modal::Error { message, .. }) if message == "Please enter both a topic and a concept."
        ));
        assert!(app.notification.current().is_none());
    }
}
