pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, Screen, Section, TransactionsMode};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    match state.screen {
        Screen::Login => screens::login::render(frame, area, state),
        Screen::Home => render_shell(frame, area, state),
    }
}

fn render_shell(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    // Main layout: info bar, tabs, content, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Length(2), // Tab bar (label + underline)
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    components::tabs::render_tabs(frame, layout[1], state.section, &theme);

    let content = layout[2];
    match state.section {
        Section::Overview => screens::overview::render(frame, content, state),
        Section::Transactions => screens::transactions::render(frame, content, state),
        Section::Budget => screens::budget::render(frame, content, state),
        Section::Assistant => screens::assistant::render(frame, content, state),
        Section::Profile => screens::profile::render(frame, content, state),
    }

    render_bottom_bar(frame, layout[3], state, &theme);
    components::toast::render(frame, area, state.toast.as_ref());
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let user = state
        .session
        .user
        .as_ref()
        .map(|u| u.email.as_str())
        .unwrap_or("-");

    let line = Line::from(vec![
        Span::styled("Cascade", Style::default().fg(theme.accent)),
        Span::raw("  "),
        Span::styled("User", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {user}")),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = components::tabs::tab_shortcuts(theme);

    let context_hints = get_context_hints(state, theme);
    if !context_hints.is_empty() {
        parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
        parts.extend(context_hints);
    }

    parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
    parts.push(Span::styled("q", Style::default().fg(theme.accent)));
    parts.push(Span::raw(" quit"));

    let bar = Paragraph::new(Line::from(parts));
    frame.render_widget(bar, area);
}

/// Context-specific keyboard hints for the active section and mode.
fn get_context_hints(state: &AppState, theme: &Theme) -> Vec<Span<'static>> {
    let hint = |key: &'static str, what: &'static str| {
        [
            Span::styled(key, Style::default().fg(theme.accent)),
            Span::raw(format!(" {what}  ")),
        ]
    };

    match state.section {
        Section::Overview => hint("f", "time frame").to_vec(),
        Section::Transactions => match state.transactions.mode {
            TransactionsMode::List => [
                hint("/", "search"),
                hint("f", "filter"),
                hint("c", "clear"),
                hint("n", "new"),
                hint("j/k", "select"),
            ]
            .concat(),
            TransactionsMode::Search => [
                hint("Enter", "apply"),
                hint("Esc", "clear"),
            ]
            .concat(),
            TransactionsMode::Add => [
                hint("Tab", "next"),
                hint("←/→", "category"),
                hint("↑/↓", "type"),
                hint("Enter", "save"),
                hint("Esc", "cancel"),
            ]
            .concat(),
        },
        Section::Budget => match state.budget.mode {
            crate::app::BudgetMode::View => [
                hint("[", "prev month"),
                hint("]", "next month"),
                hint("n", "new"),
                hint("j/k", "select"),
            ]
            .concat(),
            crate::app::BudgetMode::Add => [
                hint("Tab", "next"),
                hint("Enter", "save"),
                hint("Esc", "cancel"),
            ]
            .concat(),
        },
        Section::Assistant => [
            hint("Enter", "send"),
            hint("1-4", "suggestions"),
            hint("←/→", "switch tab"),
        ]
        .concat(),
        Section::Profile => {
            if state.profile.confirm_sign_out {
                [hint("y/Enter", "sign out"), hint("n/Esc", "stay")].concat()
            } else {
                [
                    hint("s", "sign out"),
                    hint("n", "notifications"),
                    hint("d", "dark mode"),
                ]
                .concat()
            }
        }
    }
}
