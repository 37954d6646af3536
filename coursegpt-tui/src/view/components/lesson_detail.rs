//! 课程详情
//!
//! 把一节课程排成若干行文本，课程页与模块页（展开时）共用。

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use coursegpt_core::types::Lesson;

use crate::view::theme::{Styles, colors};

/// 完整详情：描述、学习目标、关键概念、活动
pub fn lines(lesson: &Lesson) -> Vec<Line<'_>> {
    let c = colors();
    let mut out = vec![
        Line::styled(lesson.title.as_str(), Styles::title()),
        Line::styled(lesson.description.as_str(), Style::default().fg(c.fg)),
        Line::from(""),
    ];

    out.push(Line::styled("Learning Outcomes", Styles::heading()));
    for outcome in &lesson.learning_outcomes {
        out.push(Line::from(format!("  • {outcome}")));
    }
    out.push(Line::from(""));

    out.push(Line::styled("Key Concepts", Styles::heading()));
    for concept in &lesson.key_concepts {
        out.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                concept.term.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(": "),
            Span::raw(concept.definition.as_str()),
        ]));
        out.push(Line::from(vec![
            Span::styled("    Example: ", Styles::muted()),
            Span::styled(concept.example.as_str(), Style::default().fg(c.warning)),
        ]));
    }
    out.push(Line::from(""));

    out.push(Line::styled("Activities", Styles::heading()));
    for activity in &lesson.activities {
        out.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                activity.kind.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(": "),
            Span::raw(activity.description.as_str()),
        ]));
        if let Some(link) = activity.resource_link() {
            out.push(Line::from(vec![
                Span::styled("    Resources: ", Styles::muted()),
                Span::styled(
                    link,
                    Style::default()
                        .fg(c.accent)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ]));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use coursegpt_core::types::{Activity, KeyConcept};

    use super::*;

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect()
    }

    fn lesson(resources: &str) -> Lesson {
        Lesson {
            id: "1".into(),
            title: "Loops".into(),
            description: "Repeat things".into(),
            learning_outcomes: vec!["Write a for loop".into()],
            key_concepts: vec![KeyConcept {
                term: "for".into(),
                definition: "Iterate a sequence".into(),
                example: "for x in xs".into(),
            }],
            activities: vec![Activity {
                kind: "Exercise".into(),
                description: "Sum a list".into(),
                resources: resources.into(),
            }],
        }
    }

    #[test]
    fn renders_every_section() {
        let rendered = text(&lines(&lesson("https://docs.python.org")));
        assert!(rendered.contains(&"  • Write a for loop".to_string()));
        assert!(rendered.contains(&"  for: Iterate a sequence".to_string()));
        assert!(rendered.contains(&"    Example: for x in xs".to_string()));
        assert!(rendered.contains(&"  Exercise: Sum a list".to_string()));
        assert!(rendered.contains(&"    Resources: https://docs.python.org".to_string()));
    }

    #[test]
    fn placeholder_resources_are_hidden() {
        let rendered = text(&lines(&lesson("N/A")));
        assert!(!rendered.iter().any(|l| l.contains("Resources")));
    }
}
