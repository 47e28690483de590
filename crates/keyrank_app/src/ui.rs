use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Wrap};

use keyrank_core::{AppViewModel, KeywordRow, PanelView, Phase};

use crate::app::Focus;

pub(crate) fn draw(frame: &mut ratatui::Frame, view: &AppViewModel, focus: Focus, cursor: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(8),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title_input = Paragraph::new(view.title.as_str())
        .block(pane("Title", focus == Focus::Title));
    frame.render_widget(title_input, chunks[0]);

    let description_input = Paragraph::new(view.description.as_str())
        .block(pane("Job Description", focus == Focus::Description))
        .wrap(Wrap { trim: false });
    frame.render_widget(description_input, chunks[1]);

    let status = Paragraph::new(status_line(view)).block(Block::bordered());
    frame.render_widget(status, chunks[2]);

    let results = Paragraph::new(results_text(view, focus, cursor))
        .block(pane("Results", focus == Focus::Results))
        .wrap(Wrap { trim: false });
    frame.render_widget(results, chunks[3]);

    let footer = Paragraph::new(Line::styled(
        "Tab=focus  Ctrl+S=submit  \u{2191}/\u{2193}=select  Enter/Space=toggle  Esc=quit",
        Style::default().fg(Color::DarkGray),
    ))
    .block(Block::bordered().title("Controls"));
    frame.render_widget(footer, chunks[4]);
}

fn pane(title: &str, focused: bool) -> Block<'_> {
    let block = Block::bordered().title(title);
    if focused {
        block.border_style(Style::default().fg(Color::Yellow))
    } else {
        block
    }
}

fn status_line(view: &AppViewModel) -> Line<'static> {
    if view.phase == Phase::Loading {
        Line::from(Span::styled(
            view.submit_label,
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(vec![
            Span::styled(
                view.submit_label,
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" with Ctrl+S"),
        ])
    }
}

fn results_text(view: &AppViewModel, focus: Focus, cursor: usize) -> Text<'static> {
    if let Some(error) = view.error {
        return Text::from(Line::styled(error, Style::default().fg(Color::Red)));
    }
    if view.panels.is_empty() {
        return Text::from(Line::styled(
            "no results yet",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let mut lines = Vec::new();
    for (index, panel) in view.panels.iter().enumerate() {
        let marker = if focus == Focus::Results && index == cursor {
            ">> "
        } else {
            "   "
        };
        let glyph = if panel.expanded { "-" } else { "+" };
        lines.push(Line::from(vec![
            Span::raw(format!("{marker}{glyph} ")),
            Span::styled(
                panel_title(panel),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        if panel.expanded {
            for keyword in &panel.keywords {
                lines.push(Line::from(Span::raw(format!(
                    "       {}",
                    keyword_label(keyword)
                ))));
            }
        }
    }
    Text::from(lines)
}

fn panel_title(panel: &PanelView) -> String {
    format!("{} ({})", panel.phrase, panel.priority.label())
}

fn keyword_label(keyword: &KeywordRow) -> String {
    format!("{} ({})", keyword.word, keyword.score)
}

#[cfg(test)]
mod tests {
    use keyrank_core::PriorityLabel;

    use super::*;

    #[test]
    fn panel_title_carries_phrase_and_priority() {
        let panel = PanelView {
            phrase: "distributed systems".to_string(),
            priority: PriorityLabel::High,
            expanded: false,
            keywords: Vec::new(),
        };
        assert_eq!(panel_title(&panel), "distributed systems (HIGH)");
    }

    #[test]
    fn keyword_label_carries_word_and_score() {
        let keyword = KeywordRow {
            word: "Go".to_string(),
            score: "9".to_string(),
        };
        assert_eq!(keyword_label(&keyword), "Go (9)");
    }

    #[test]
    fn collapsed_panel_hides_its_keywords() {
        let view = AppViewModel {
            phase: Phase::ShowingResults,
            title: String::new(),
            description: String::new(),
            can_submit: true,
            submit_label: "Submit",
            panels: vec![PanelView {
                phrase: "distributed systems".to_string(),
                priority: PriorityLabel::High,
                expanded: false,
                keywords: vec![KeywordRow {
                    word: "Go".to_string(),
                    score: "9".to_string(),
                }],
            }],
            error: None,
            dirty: false,
        };

        let collapsed = results_text(&view, Focus::Results, 0);
        assert_eq!(collapsed.lines.len(), 1);

        let mut expanded_view = view.clone();
        expanded_view.panels[0].expanded = true;
        let expanded = results_text(&expanded_view, Focus::Results, 0);
        assert_eq!(expanded.lines.len(), 2);
        let keyword_line: String = expanded.lines[1]
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert!(keyword_line.contains("Go (9)"));
    }

    #[test]
    fn error_view_renders_a_single_line() {
        let view = AppViewModel {
            phase: Phase::ShowingError,
            title: String::new(),
            description: String::new(),
            can_submit: true,
            submit_label: "Submit",
            panels: Vec::new(),
            error: Some(keyrank_core::GENERIC_ERROR_TEXT),
            dirty: false,
        };

        let text = results_text(&view, Focus::Title, 0);
        assert_eq!(text.lines.len(), 1);
    }
}
