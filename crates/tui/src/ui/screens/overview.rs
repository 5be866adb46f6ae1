use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use domain::TimeFrame;

use crate::{
    app::AppState,
    ui::{
        components::{card::{Card, StatCard}, progress},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Balance + income/spending cards
            Constraint::Min(6),    // Spending analysis
        ])
        .split(area);

    render_stat_cards(frame, layout[0], state, &theme);
    render_spending_analysis(frame, layout[1], state, &theme);
}

fn render_stat_cards(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let account = &state.overview.account;

    StatCard::new("Total Balance", account.balance.to_string(), theme).render(frame, cols[0]);
    StatCard::new("Income", format!("+{}", account.monthly_income), theme)
        .subtitle(state.overview.time_frame.label())
        .render(frame, cols[1]);
    StatCard::new("Spending", format!("-{}", account.monthly_spending), theme)
        .subtitle(state.overview.time_frame.label())
        .render(frame, cols[2]);
}

fn render_spending_analysis(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Spending Analysis", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let mut lines = Vec::new();

    // Time-frame selector row.
    let mut selector = vec![Span::raw(" ")];
    for (i, frame_option) in TimeFrame::ALL.iter().enumerate() {
        if i > 0 {
            selector.push(Span::raw("  "));
        }
        let style = if *frame_option == state.overview.time_frame {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.text_muted)
        };
        selector.push(Span::styled(frame_option.label(), style));
    }
    lines.push(Line::from(selector));
    lines.push(Line::default());

    let bar_width = inner.width.saturating_sub(34).clamp(10, 30);
    for slice in &state.overview.slices {
        let mut spans = vec![
            Span::styled(
                format!(" {:<16}", slice.category),
                Style::default().fg(theme.text),
            ),
            Span::styled(
                format!("{:>10}  ", slice.amount.to_string()),
                Style::default().fg(theme.text),
            ),
        ];
        spans.extend(progress::inline_bar(slice.share, bar_width, theme.accent));
        spans.push(Span::styled(
            format!(" {}", progress::percent_label(slice.share)),
            Style::default().fg(theme.text_muted),
        ));
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
