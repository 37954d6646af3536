//! 弹窗组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use coursegpt_core::state::{EditSession, LessonField};

use crate::model::{App, GenerateField, Modal};
use crate::util::text::{tail, truncate};
use crate::view::theme::{Styles, colors};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::GenerateLesson { focus } => render_generate(app, frame, *focus),
        Modal::EditLesson { focus } => {
            if let Some(session) = app.lessons.board.session() {
                render_edit(session, frame, *focus);
            }
        }
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗外框，返回内容区域
fn frame_block(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(colors().bg));
    frame.render_widget(block, area);
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// 单行输入框，聚焦时显示光标
fn input_line(value: &str, placeholder: &str, focused: bool, width: usize) -> Line<'static> {
    if value.is_empty() && !focused {
        return Line::styled(format!("  {placeholder}"), Styles::muted());
    }
    if focused {
        let visible = tail(value, width.saturating_sub(4));
        Line::styled(format!("  {visible}▎"), Style::default().fg(colors().highlight))
    } else {
        Line::styled(
            format!("  {}", truncate(value, width.saturating_sub(2))),
            Style::default().fg(colors().fg),
        )
    }
}

fn hint_line(pairs: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (i, (key, desc)) in pairs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Styles::muted()));
        }
        spans.push(Span::styled(*key, Style::default().fg(colors().warning)));
        spans.push(Span::styled(format!(" {desc}"), Styles::muted()));
    }
    Line::from(spans)
}

/// 生成课程表单
fn render_generate(app: &App, frame: &mut Frame, focus: GenerateField) {
    let area = centered_rect(56, 13, frame.area());
    let inner = frame_block(frame, area, "Generate New Lesson", colors().highlight);
    let width = usize::from(inner.width);

    let draft = app.lessons.board.draft();
    let generating = app.lessons.board.is_generating();
    let label = Styles::muted();

    let mut lines = vec![
        Line::styled("Topic", label),
        input_line(
            &draft.topic,
            "e.g., Python Programming",
            focus == GenerateField::Topic && !generating,
            width,
        ),
        Line::from(""),
        Line::styled("Concept", label),
        input_line(
            &draft.concept,
            "e.g., Variables",
            focus == GenerateField::Concept && !generating,
            width,
        ),
        Line::from(""),
    ];

    if generating {
        lines.push(Line::styled(
            "  Generating...",
            Style::default()
                .fg(colors().warning)
                .add_modifier(Modifier::BOLD),
        ));
    } else {
        lines.push(Line::styled(
            "  [ Generate Lesson ]",
            Style::default().fg(colors().highlight).add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::from(""));
    lines.push(hint_line(&[
        ("Tab", "Switch"),
        ("Enter", "Generate"),
        ("Esc", "Close"),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 编辑课程表单：每个字段一行，超出高度时跟随焦点滚动
fn render_edit(session: &EditSession, frame: &mut Frame, focus: usize) {
    let screen = frame.area();
    let height = screen.height.saturating_sub(4).clamp(10, 30);
    let area = centered_rect(76, height, screen);
    let title = format!("Edit Lesson · {}", session.scratch().title);
    let inner = frame_block(frame, area, &truncate(&title, 60), colors().highlight);
    let width = usize::from(inner.width);

    let scratch = session.scratch();
    let fields = LessonField::all_for(scratch);

    // 底部保留：空行 + 状态/错误 + 提示
    let rows = usize::from(inner.height).saturating_sub(3).max(1);
    let start = focus.saturating_sub(rows - 1);

    let mut lines: Vec<Line> = fields
        .iter()
        .enumerate()
        .skip(start)
        .take(rows)
        .map(|(i, field)| {
            let focused = i == focus;
            let label = truncate(&field.label(), 24);
            let value = field.read(scratch).unwrap_or_default();
            let value_width = width.saturating_sub(28);
            let shown = if focused {
                format!("{}▎", tail(value, value_width.saturating_sub(1)))
            } else {
                truncate(value, value_width)
            };
            let (label_style, value_style) = if focused {
                (
                    Style::default().fg(colors().highlight).add_modifier(Modifier::BOLD),
                    Style::default().fg(colors().highlight),
                )
            } else {
                (Styles::muted(), Style::default().fg(colors().fg))
            };
            Line::from(vec![
                Span::styled(format!("{label:<26}"), label_style),
                Span::styled(shown, value_style),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    if session.is_saving() {
        lines.push(Line::styled("  Saving...", Style::default().fg(colors().warning)));
    } else if let Some(err) = session.error() {
        lines.push(Line::styled(format!("  ⚠ {err}"), Style::default().fg(colors().error)));
    } else if session.is_dirty() {
        lines.push(Line::styled("  Unsaved changes", Styles::muted()));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(hint_line(&[
        ("Tab/↑↓", "Field"),
        ("Enter", "Save"),
        ("Alt+m", "Add to Module"),
        ("Esc", "Cancel"),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(54, 8, frame.area());
    let inner = frame_block(frame, area, title, colors().error);

    let lines = vec![
        Line::from(""),
        Line::styled(message, Style::default().fg(colors().fg)),
        Line::from(""),
        Line::styled(
            "Press Esc or Enter to close",
            Styles::muted(),
        ),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let area = centered_rect(56, 22, frame.area());
    let inner = frame_block(frame, area, "Help", colors().highlight);

    let section = Style::default().fg(colors().highlight).add_modifier(Modifier::BOLD);
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), Style::default().fg(colors().warning)),
            Span::styled(desc, Style::default().fg(colors().fg)),
        ])
    };

    let lines = vec![
        Line::styled("Global", section),
        entry("Tab", "Switch panel"),
        entry("↑↓/jk", "Move up/down"),
        entry("Enter", "Open page / confirm"),
        entry("Esc", "Back / close"),
        entry("Alt+r", "Refresh current page"),
        entry("Alt+q", "Quit"),
        Line::from(""),
        Line::styled("Lessons", section),
        entry("Alt+g", "Generate a lesson"),
        entry("Enter/Alt+e", "Edit selected lesson"),
        entry("Alt+m", "Create a module from lesson"),
        Line::from(""),
        Line::styled("Edit form", section),
        entry("Tab/↑↓", "Next / previous field"),
        entry("Enter", "Save"),
        entry("Esc", "Discard changes"),
        Line::from(""),
        Line::styled("Press Esc to close the help", Styles::muted()),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
