use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{
    app::{AppState, AuthMode, LoginField},
    ui::theme::Theme,
};

/// Calculates a centered rect for the login box
fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let login = &state.login;

    let box_width = 38;
    let box_height = 7;
    let card_area = centered_box(box_width, box_height, area);

    frame.render_widget(Clear, card_area);

    let title = match login.mode {
        AuthMode::SignIn => " Ca$cade log in ",
        AuthMode::SignUp => " Ca$cade sign up ",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));

    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    // Rows: email, spacer, password, spacer, action line
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .margin(1)
        .split(inner);

    let email_focused = login.focus == LoginField::Email;
    render_input(frame, rows[0], &login.email, false, email_focused, &theme);

    let password_focused = login.focus == LoginField::Password;
    render_input(
        frame,
        rows[2],
        &login.password,
        true,
        password_focused,
        &theme,
    );

    let action = if login.busy {
        Line::from(Span::styled("…", Style::default().fg(theme.text_muted)))
    } else {
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(format!(" {}   ", login.mode.label())),
            Span::styled("^N", Style::default().fg(theme.accent)),
            Span::raw(" switch   "),
            Span::styled("^R", Style::default().fg(theme.accent)),
            Span::raw(" reset"),
        ])
    };
    frame.render_widget(Paragraph::new(action).alignment(Alignment::Center), rows[4]);

    // Message below the box (provider errors verbatim, reset confirmations).
    if let Some(message) = &login.message {
        let message_area = Rect {
            x: area.x,
            y: card_area.y + card_area.height + 1,
            width: area.width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                message.as_str(),
                Style::default().fg(theme.error),
            ))
            .alignment(Alignment::Center),
            message_area,
        );
    }
}

/// Renders a simple input field - just value and cursor, no labels
fn render_input(
    frame: &mut Frame<'_>,
    area: Rect,
    value: &str,
    is_password: bool,
    focused: bool,
    theme: &Theme,
) {
    let cursor = if focused { "│" } else { "" };

    let display = if is_password {
        format!("{}{}", mask_password(value), cursor)
    } else {
        format!("{value}{cursor}")
    };

    let style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text_muted)
    };

    frame.render_widget(Paragraph::new(Span::styled(display, style)), area);
}

/// Masks password with bullets, one per character
fn mask_password(password: &str) -> String {
    if password.is_empty() {
        String::new()
    } else {
        "•".repeat(password.chars().count())
    }
}
