use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{
    app::AppState,
    ui::{components::card::Card, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Account card
            Constraint::Length(4), // Settings card
            Constraint::Length(1), // Sign out hint
            Constraint::Min(0),
        ])
        .split(area);

    render_account(frame, layout[0], state, &theme);
    render_settings(frame, layout[1], state, &theme);

    let hint = Line::from(vec![
        Span::styled(" s", Style::default().fg(theme.accent)),
        Span::styled(" sign out", Style::default().fg(theme.text_muted)),
    ]);
    frame.render_widget(Paragraph::new(hint), layout[2]);

    if state.profile.confirm_sign_out {
        render_confirm(frame, area, &theme);
    }
}

fn render_account(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Account", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let email = state
        .session
        .user
        .as_ref()
        .map_or("-", |user| user.email.as_str());

    let lines = vec![
        Line::from(vec![
            Span::styled("Email:  ", Style::default().fg(theme.text_muted)),
            Span::styled(email, Style::default().fg(theme.text)),
        ]),
        Line::from(vec![
            Span::styled("Status: ", Style::default().fg(theme.text_muted)),
            Span::styled("Signed in", Style::default().fg(theme.positive)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_settings(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Settings", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let toggle = |on: bool| if on { "[x]" } else { "[ ]" };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                toggle(state.profile.notifications),
                Style::default().fg(theme.accent),
            ),
            Span::styled(" Notifications  ", Style::default().fg(theme.text)),
            Span::styled("(n)", Style::default().fg(theme.text_muted)),
        ]),
        Line::from(vec![
            Span::styled(
                toggle(state.profile.dark_mode),
                Style::default().fg(theme.accent),
            ),
            Span::styled(" Dark Mode      ", Style::default().fg(theme.text)),
            Span::styled("(d)", Style::default().fg(theme.text_muted)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_confirm(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let width = 34.min(area.width);
    let height = 5.min(area.height);
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
        .title(" Sign out? ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.warning));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let lines = vec![
        Line::from(Span::styled(
            "You will return to the login screen.",
            Style::default().fg(theme.text),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("y", Style::default().fg(theme.error).add_modifier(Modifier::BOLD)),
            Span::styled(" sign out   ", Style::default().fg(theme.text_muted)),
            Span::styled("n", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
            Span::styled(" cancel", Style::default().fg(theme.text_muted)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
