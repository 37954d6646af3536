//! 关于页面

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::model::App;
use crate::view::theme::{Styles, colors};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let text = Styles::muted();
    let lines = vec![
        Line::from(""),
        Line::styled(
            "  About CourseGPT",
            Style::default().fg(colors().highlight).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(
            "  CourseGPT helps educators and learners create and organize educational content using AI.",
            text,
        ),
        Line::from(""),
        Line::styled("  With CourseGPT, you can:", text),
        Line::styled("    • Generate lessons on any topic with AI assistance.", text),
        Line::styled("    • Organize lessons into modules for structured learning.", text),
        Line::from(""),
        Line::from(vec![
            Span::styled("  API  ", Styles::muted()),
            Span::styled(app.api_base_url.as_str(), Style::default().fg(colors().fg)),
        ]),
        Line::from(vec![
            Span::styled("  Ver  ", Styles::muted()),
            Span::styled(env!("CARGO_PKG_VERSION"), Style::default().fg(colors().fg)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
