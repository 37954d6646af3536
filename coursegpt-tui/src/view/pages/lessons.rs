//! 课程页面视图
//!
//! 左侧课程列表，右侧选中课程的详情（编辑中显示草稿）。

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use coursegpt_core::state::{LessonBoard, LessonState};
use coursegpt_core::types::Lesson;

use crate::model::App;
use crate::util::text::truncate;
use crate::view::components::lesson_detail;
use crate::view::theme::{Styles, colors};

/// 渲染课程页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let state = &app.lessons;

    if state.board.lessons().is_empty() {
        render_empty(app, frame, area);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    render_list(app, frame, columns[0]);
    render_detail(app, frame, columns[1]);
}

fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let message = if app.lessons.loading {
        "Loading lessons..."
    } else {
        "No lessons generated yet."
    };
    let mut content = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Styles::muted()),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Alt+g", Styles::hint_key()),
            Span::styled(" generate a new lesson", Styles::hint_desc()),
        ]),
    ];
    if app.lessons.board.is_generating() {
        content.push(Line::from(""));
        content.push(Line::styled(
            "  Generating lesson...",
            Style::default().fg(colors().warning),
        ));
    }
    frame.render_widget(Paragraph::new(content), area);
}

fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let state = &app.lessons;
    let title = if state.board.is_generating() {
        " Lessons · generating… "
    } else {
        " Lessons "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::RIGHT)
        .border_style(Styles::border(false));
    let width = usize::from(block.inner(area).width).saturating_sub(4);

    let items: Vec<ListItem> = state
        .board
        .lessons()
        .iter()
        .enumerate()
        .map(|(i, lesson)| {
            let is_selected = i == state.selected;
            let editing = state.board.state_of(&lesson.id) == LessonState::Editing;
            let marker = if editing { "✎ " } else { "  " };

            let style = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(colors().fg)
            };

            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(colors().warning)),
                Span::styled(truncate(row_title(&state.board, lesson), width), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(Style::default());

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// 列表行标题：编辑中的课程显示草稿标题
fn row_title<'a>(board: &'a LessonBoard, lesson: &'a Lesson) -> &'a str {
    board
        .displayed(&lesson.id)
        .map_or(lesson.title.as_str(), |shown| shown.title.as_str())
}

fn render_detail(app: &App, frame: &mut Frame, area: Rect) {
    let inner = Rect::new(
        area.x + 1,
        area.y,
        area.width.saturating_sub(1),
        area.height,
    );
    let Some(lesson) = app
        .lessons
        .selected_id()
        .and_then(|id| app.lessons.board.displayed(&id))
    else {
        return;
    };

    let paragraph = Paragraph::new(lesson_detail::lines(lesson)).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

#[cfg(test)]
mod tests {
    use coursegpt_core::state::LessonField;

    use super::*;

    fn lesson(id: &str, title: &str) -> Lesson {
        Lesson {
            id: id.into(),
            title: title.into(),
            ..Lesson::default()
        }
    }

    #[test]
    fn row_shows_scratch_title_while_editing() {
        let mut board = LessonBoard::new();
        board.replace_all(vec![lesson("1", "Loops"), lesson("2", "Traits")]);
        board.start_edit("1").unwrap();
        board.set_field(LessonField::Title, "While loops").unwrap();

        let rows: Vec<_> = board.lessons().iter().map(|l| row_title(&board, l)).collect();
        assert_eq!(rows, ["While loops", "Traits"]);
        assert_eq!(board.get("1").unwrap().title, "Loops");
    }

    #[test]
    fn row_reverts_after_cancel() {
        let mut board = LessonBoard::new();
        board.replace_all(vec![lesson("1", "Loops")]);
        board.start_edit("1").unwrap();
        board.set_field(LessonField::Title, "While loops").unwrap();
        board.cancel_edit();

        assert_eq!(row_title(&board, &board.lessons()[0]), "Loops");
    }
}
