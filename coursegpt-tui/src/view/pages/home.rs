//! 首页视图

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::model::App;
use crate::view::theme::{Styles, colors};

/// 渲染首页
pub fn render(_app: &App, frame: &mut Frame, area: Rect) {
    // 首页布局：欢迎信息 + 两张功能卡片
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // 欢迎区域
            Constraint::Min(1),    // 卡片区域
        ])
        .split(area);

    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Welcome to CourseGPT",
            Style::default().fg(colors().highlight).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  An AI-powered platform that helps you generate lessons and organize modules.",
            Styles::muted(),
        )),
    ];
    frame.render_widget(Paragraph::new(welcome).wrap(Wrap { trim: false }), layout[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[1]);

    render_card(
        frame,
        cards[0],
        " Generate Lessons ",
        colors().accent,
        "Create engaging lessons on any topic using AI.",
        "Lessons",
    );
    render_card(
        frame,
        cards[1],
        " Organize Modules ",
        colors().success,
        "Group lessons into modules for structured learning.",
        "Modules",
    );
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    color: Color,
    body: &str,
    page: &str,
) {
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Styles::muted());

    let content = Paragraph::new(vec![
        Line::from(""),
        Line::styled(format!("  {body}"), Styles::muted()),
        Line::from(""),
        Line::from(vec![
            Span::styled("  → ", Style::default().fg(color)),
            Span::styled(
                format!("Select \"{page}\" in the navigation panel"),
                Styles::muted(),
            ),
        ]),
    ])
    .wrap(Wrap { trim: false })
    .block(block);

    frame.render_widget(content, area);
}
