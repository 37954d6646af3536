//! 未知路径

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use crate::view::theme::{Styles, colors};

pub fn render(path: &str, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::styled("Page not found.", Style::default().fg(colors().error)),
        Line::styled(format!("No page at {path}"), Styles::muted()),
        Line::from(""),
        Line::styled("Press Esc to go to Home", Style::default().fg(colors().highlight)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
