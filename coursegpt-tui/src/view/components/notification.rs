//! 临时通知浮层

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

use coursegpt_core::NotificationKind;

use crate::model::App;
use crate::util::text::{display_width, truncate};
use crate::view::theme::colors;

/// 在 `area` 右上角渲染当前通知（如果有）
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(note) = app.notification.current() else {
        return;
    };

    let c = colors();
    let (color, icon) = match note.kind {
        NotificationKind::Success => (c.success, "✓"),
        NotificationKind::Error => (c.error, "✗"),
        NotificationKind::Info => (c.accent, "i"),
    };

    let max_text = usize::from(area.width.saturating_sub(8));
    let text = format!("{icon} {}", truncate(&note.text, max_text));
    let width = u16::try_from(display_width(&text) + 4)
        .unwrap_or(area.width)
        .min(area.width);
    let toast = Rect::new(area.right().saturating_sub(width + 1), area.y + 1, width, 3);

    frame.render_widget(Clear, toast);
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(paragraph, toast.intersection(area));
}
