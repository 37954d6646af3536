//! 模块页面视图

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use coursegpt_core::state::ModuleBoard;
use coursegpt_core::types::Module;

use crate::model::App;
use crate::view::components::lesson_detail;
use crate::view::theme::{Styles, colors};

/// 渲染模块页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let state = &app.modules;

    if state.board.modules().is_empty() {
        let message = if state.loading {
            "Loading modules..."
        } else {
            "No modules created yet. Generate lessons and add them to modules from the Lessons page."
        };
        let content = vec![
            Line::from(""),
            Line::styled(format!("  {message}"), Styles::muted()),
        ];
        frame.render_widget(Paragraph::new(content).wrap(Wrap { trim: false }), area);
        return;
    }

    let mut lines = Vec::new();
    let mut selected_row = 0;
    for (i, module) in state.board.modules().iter().enumerate() {
        if i == state.selected {
            selected_row = lines.len();
        }
        lines.extend(module_lines(&state.board, module, i == state.selected));
        lines.push(Line::from(""));
    }

    // 选中模块的首行保持可见
    let height = usize::from(area.height);
    let scroll = if selected_row >= height {
        u16::try_from(selected_row).unwrap_or(u16::MAX)
    } else {
        0
    };

    let paragraph = Paragraph::new(lines).scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

/// 一个模块的摘要，展开时附带其课程详情
fn module_lines<'a>(board: &'a ModuleBoard, module: &'a Module, selected: bool) -> Vec<Line<'a>> {
    let summary = ModuleBoard::summary(module);
    let expanded = board.is_expanded(&module.id);

    let title_style = if selected {
        Styles::selected()
    } else {
        Style::default().fg(colors().success).add_modifier(Modifier::BOLD)
    };
    let label = Styles::muted();
    let value = Style::default().fg(colors().warning);

    let mut out = vec![
        Line::from(vec![
            Span::raw(if expanded { " ▾ " } else { " ▸ " }),
            Span::styled(summary.title, title_style),
        ]),
        Line::from(vec![
            Span::styled("   Difficulty: ", label),
            Span::styled(summary.difficulty, value),
            Span::styled("   Estimated Time: ", label),
            Span::styled(summary.estimated_time, value),
            Span::styled("   Lessons: ", label),
            Span::styled(summary.lesson_count.to_string(), value),
        ]),
    ];

    if !expanded {
        return out;
    }

    out.push(Line::from(""));
    out.push(Line::styled(
        "   Lessons in this Module:",
        Style::default().add_modifier(Modifier::BOLD),
    ));

    let lessons = board.resolve_lessons(module);
    if lessons.is_empty() {
        out.push(Line::styled(
            "     No lessons found in this module.",
            Styles::muted(),
        ));
        return out;
    }

    for lesson in lessons {
        out.push(Line::from(""));
        out.extend(lesson_detail::lines(lesson).into_iter().map(indent));
    }
    out
}

fn indent(mut line: Line<'_>) -> Line<'_> {
    line.spans.insert(0, Span::raw("     "));
    line
}
