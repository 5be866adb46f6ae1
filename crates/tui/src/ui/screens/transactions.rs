use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

use domain::ClassFilter;

use crate::{
    app::{AppState, TransactionField, TransactionsMode},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Search + filter pills
            Constraint::Min(0),    // List
        ])
        .split(area);

    render_search_bar(frame, layout[0], state, &theme);
    render_list(frame, layout[1], state, &theme);

    if state.transactions.mode == TransactionsMode::Add {
        render_add_form(frame, area, state, &theme);
    }
}

fn render_search_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let searching = state.transactions.mode == TransactionsMode::Search;
    let search = &state.transactions.query.search;

    let mut spans = vec![Span::styled(" 🔍 ", Style::default().fg(theme.text_muted))];
    let cursor = if searching { "│" } else { "" };
    let style = if searching {
        Style::default().fg(theme.accent)
    } else if search.is_empty() {
        Style::default().fg(theme.text_muted)
    } else {
        Style::default().fg(theme.text)
    };
    let display = if search.is_empty() && !searching {
        "Search transactions".to_string()
    } else {
        format!("{search}{cursor}")
    };
    spans.push(Span::styled(display, style));

    // Filter pills on the same row, right after the search text.
    spans.push(Span::raw("   "));
    for class in [ClassFilter::All, ClassFilter::Income, ClassFilter::Expenses] {
        let active = state.transactions.query.class == class;
        let style = if active {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_muted)
        };
        spans.push(Span::styled(format!("({}) ", class.label()), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_list(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let visible = state.transactions.visible();

    if visible.is_empty() {
        let empty = Paragraph::new(Span::styled(
            " No transactions match.",
            Style::default().fg(theme.text_muted),
        ));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem<'_>> = visible
        .iter()
        .enumerate()
        .map(|(i, transaction)| {
            let amount_style = if transaction.amount.is_negative() {
                Style::default().fg(theme.error)
            } else {
                Style::default().fg(theme.positive)
            };
            let row_style = if i == state.transactions.selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::raw(format!(" {} ", transaction.icon)),
                Span::styled(
                    format!("{:<20}", transaction.title),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    format!("{:<16}", transaction.category),
                    Style::default().fg(theme.text_muted),
                ),
                Span::styled(format!("{:>10}", transaction.amount.to_string()), amount_style),
                Span::styled(
                    format!("  {}", transaction.date_label),
                    Style::default().fg(theme.text_muted),
                ),
            ]))
            .style(row_style)
        })
        .collect();

    frame.render_widget(List::new(items), area);
}

fn render_add_form(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let width = 44.min(area.width);
    let height = 9.min(area.height);
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
        .title(" Add Transaction ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_focused));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let draft = &state.transactions.draft;
    let focus = state.transactions.draft_focus;

    let field_style = |focused: bool| {
        if focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.text)
        }
    };

    let valid = draft.is_valid();
    let save_style = if valid {
        Style::default().fg(theme.positive)
    } else {
        Style::default().fg(theme.text_muted)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Title:    ", Style::default().fg(theme.text_muted)),
            Span::styled(
                draft.title.clone(),
                field_style(focus == TransactionField::Title),
            ),
        ]),
        Line::from(vec![
            Span::styled("Amount:  $", Style::default().fg(theme.text_muted)),
            Span::styled(
                draft.amount.clone(),
                field_style(focus == TransactionField::Amount),
            ),
        ]),
        Line::from(vec![
            Span::styled("Category: ", Style::default().fg(theme.text_muted)),
            Span::styled(draft.category.clone(), Style::default().fg(theme.text)),
        ]),
        Line::from(vec![
            Span::styled("Type:     ", Style::default().fg(theme.text_muted)),
            Span::styled(draft.kind.label(), Style::default().fg(theme.text)),
        ]),
        Line::from(vec![
            Span::styled("Date:     ", Style::default().fg(theme.text_muted)),
            Span::styled(draft.date.to_string(), Style::default().fg(theme.text)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            if valid { "Enter to save" } else { "Fill in title and amount" },
            save_style,
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
