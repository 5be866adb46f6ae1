use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{
    app::{AppState, BudgetField, BudgetMode},
    ui::{
        components::{card::Card, progress},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Month selector
            Constraint::Length(4), // Overall card
            Constraint::Min(0),    // Category rows
        ])
        .split(area);

    render_month_bar(frame, layout[0], state, &theme);
    render_summary(frame, layout[1], state, &theme);
    render_categories(frame, layout[2], state, &theme);

    if state.budget.mode == BudgetMode::Add {
        render_add_form(frame, area, state, &theme);
    }
}

fn render_month_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled("[", Style::default().fg(theme.accent)),
        Span::styled(
            format!("  {}  ", state.budget.month.label()),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled("]", Style::default().fg(theme.accent)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_summary(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let summary = domain::summarize(&state.budget.categories);
    let ratio = summary.ratio();

    let card = Card::new("Overall Budget", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let bar_width = inner.width.saturating_sub(30).clamp(10, 40);
    let bar_color = summary_color(ratio, theme);

    let mut spans = vec![Span::styled(
        format!(
            " {} of {}  ",
            summary.total_spent, summary.total_limit
        ),
        Style::default().fg(theme.text),
    )];
    spans.extend(progress::inline_bar(ratio, bar_width, bar_color));
    spans.push(Span::styled(
        format!(" {}", progress::percent_label(ratio)),
        Style::default().fg(theme.text_muted),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn render_categories(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut lines = Vec::new();
    let bar_width = area.width.saturating_sub(48).clamp(10, 24);

    for (i, category) in state.budget.categories.iter().enumerate() {
        let ratio = category.ratio();
        let bar_color = if category.over_threshold() {
            if ratio >= 1.0 { theme.error } else { theme.warning }
        } else {
            theme.accent
        };
        let row_style = if i == state.budget.selected {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };

        let warn = if category.over_threshold() { " ⚠" } else { "" };
        let mut spans = vec![
            Span::raw(format!(" {} ", category.icon)),
            Span::styled(
                format!("{:<16}", category.name),
                Style::default().fg(theme.text),
            ),
            Span::styled(
                format!("{:>9} of {:<9}", category.spent.to_string(), category.limit.to_string()),
                Style::default().fg(theme.text_muted),
            ),
            Span::raw("  "),
        ];
        spans.extend(progress::inline_bar(ratio, bar_width, bar_color));
        spans.push(Span::styled(
            format!(" {:>4}{warn}", progress::percent_label(ratio)),
            Style::default().fg(bar_color),
        ));

        lines.push(Line::from(spans).style(row_style));
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn summary_color(ratio: f64, theme: &Theme) -> Color {
    if ratio >= 1.0 {
        theme.error
    } else if ratio >= domain::WARN_THRESHOLD {
        theme.warning
    } else {
        theme.accent
    }
}

fn render_add_form(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let width = 40.min(area.width);
    let height = 6.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    let rect = Rect {
        x,
        y,
        width,
        height,
    };

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(" Add Budget Category ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_focused));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let draft = &state.budget.draft;
    let focus = state.budget.draft_focus;

    let field_style = |focused: bool| {
        if focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.text)
        }
    };

    let valid = draft.is_valid();
    let lines = vec![
        Line::from(vec![
            Span::styled("Name:    ", Style::default().fg(theme.text_muted)),
            Span::styled(draft.name.clone(), field_style(focus == BudgetField::Name)),
        ]),
        Line::from(vec![
            Span::styled("Limit:  $", Style::default().fg(theme.text_muted)),
            Span::styled(
                draft.amount.clone(),
                field_style(focus == BudgetField::Amount),
            ),
        ]),
        Line::default(),
        Line::from(Span::styled(
            if valid {
                "Enter to save"
            } else {
                "Name and a positive limit required"
            },
            if valid {
                Style::default().fg(theme.positive)
            } else {
                Style::default().fg(theme.text_muted)
            },
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
