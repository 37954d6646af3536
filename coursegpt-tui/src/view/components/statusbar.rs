//! 底部状态栏组件

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{App, FocusPanel, Page};
use crate::view::theme::{Styles, colors};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Styles::muted()));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Styles::muted()));
        spans.push(Span::styled(msg.clone(), Style::default().fg(colors().warning)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("Tab", "Switch Panels")];

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", "Navigate"));
            hints.push(("Enter", "Open"));
        }
        FocusPanel::Content => match &app.current_page {
            Page::Lessons => {
                hints.push(("↑↓", "Select"));
                hints.push(("Alt+g", "Generate"));
                hints.push(("Enter/Alt+e", "Edit"));
                hints.push(("Alt+m", "Add to Module"));
            }
            Page::Modules => {
                hints.push(("↑↓", "Select"));
                hints.push(("Enter", "Expand"));
            }
            Page::NotFound { .. } => {
                hints.push(("Esc", "Home"));
            }
            Page::Home | Page::About => {}
        },
    }

    hints.push(("Alt+r", "Refresh"));
    hints.push(("Alt+h", "Help"));
    hints.push(("Alt+q", "Quit"));

    hints
}
