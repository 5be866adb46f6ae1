use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use domain::seed;

use crate::{app::AppState, ui::theme::Theme};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Message log
            Constraint::Length(1), // Suggestion chips
            Constraint::Length(1), // Input line
        ])
        .split(area);

    render_log(frame, layout[0], state, &theme);
    render_suggestions(frame, layout[1], state, &theme);
    render_input(frame, layout[2], state, &theme);
}

fn render_log(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut lines = Vec::new();

    for message in state.assistant.log.messages() {
        let (prefix, style, alignment) = if message.from_user {
            ("You: ", Style::default().fg(theme.accent), Alignment::Right)
        } else {
            ("", Style::default().fg(theme.text), Alignment::Left)
        };

        lines.push((
            Line::from(vec![
                Span::styled(prefix, style.add_modifier(Modifier::BOLD)),
                Span::styled(message.text.clone(), style),
            ]),
            alignment,
        ));
    }

    if state.assistant.log.is_typing() {
        lines.push((
            Line::from(Span::styled(
                "typing…",
                Style::default()
                    .fg(theme.text_muted)
                    .add_modifier(Modifier::ITALIC),
            )),
            Alignment::Left,
        ));
    }

    // Keep the tail of the conversation visible. One rendered line per
    // message is an approximation; long messages wrap and consume more.
    let visible = area.height as usize;
    let start = lines.len().saturating_sub(visible);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); visible])
        .split(area);

    for (row, (line, alignment)) in rows.iter().zip(lines.into_iter().skip(start)) {
        frame.render_widget(
            Paragraph::new(line)
                .alignment(alignment)
                .wrap(Wrap { trim: false }),
            *row,
        );
    }
}

fn render_suggestions(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    // Chips only apply while the draft is empty, so fade them otherwise.
    let active = state.assistant.input.is_empty();
    let style = if active {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text_muted)
    };

    let mut spans = Vec::new();
    for (i, suggestion) in seed::ASSISTANT_SUGGESTIONS.iter().enumerate() {
        spans.push(Span::styled(format!(" [{}] ", i + 1), style));
        spans.push(Span::styled(
            (*suggestion).to_string(),
            Style::default().fg(theme.text_muted),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_input(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(" > ", Style::default().fg(theme.accent)),
        Span::styled(
            format!("{}│", state.assistant.input),
            Style::default().fg(theme.text),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
