//! 内容面板更新逻辑

use coursegpt_core::{Feedback, StoreCall};

use super::present;
use crate::backend::BackendCommand;
use crate::message::ContentMessage;
use crate::model::{App, Page};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => match app.current_page {
            Page::Lessons => app.lessons.select_previous(),
            Page::Modules => app.modules.select_previous(),
            _ => {}
        },
        ContentMessage::SelectNext => match app.current_page {
            Page::Lessons => app.lessons.select_next(),
            Page::Modules => app.modules.select_next(),
            _ => {}
        },
        ContentMessage::SelectFirst => match app.current_page {
            Page::Lessons => app.lessons.select_first(),
            Page::Modules => app.modules.select_first(),
            _ => {}
        },
        ContentMessage::SelectLast => match app.current_page {
            Page::Lessons => app.lessons.select_last(),
            Page::Modules => app.modules.select_last(),
            _ => {}
        },
        ContentMessage::Confirm => match app.current_page {
            Page::Lessons => handle_edit(app),
            Page::Modules => {
                app.modules.toggle_selected();
            }
            _ => {}
        },

        // ========== 课程操作 ==========
        ContentMessage::Generate => {
            if app.current_page == Page::Lessons {
                app.modal.show_generate_lesson();
            }
        }
        ContentMessage::Edit => handle_edit(app),
        ContentMessage::AddToModule => {
            if let Some(id) = app.lessons.selected_id() {
                add_to_module(app, &id);
            }
        }
    }
}

/// 对选中课程开始编辑，成功则打开编辑表单
fn handle_edit(app: &mut App) {
    let Some(id) = app.lessons.selected_id() else {
        return;
    };
    match app.lessons.board.start_edit(&id) {
        Ok(()) => app.modal.show_edit_lesson(),
        Err(e) => present(app, &Feedback::failure(StoreCall::UpdateLesson, &e)),
    }
}

/// 用课程的已提交版本创建模块
pub(super) fn add_to_module(app: &mut App, lesson_id: &str) {
    match app.lessons.board.module_request(lesson_id) {
        Ok(request) => {
            let token = app.scope.token();
            app.queue(BackendCommand::CreateModule { request, token });
        }
        Err(e) => present(app, &Feedback::failure(StoreCall::CreateModule, &e)),
    }
}
