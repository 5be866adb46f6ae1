use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// Builds an inline progress bar like `████████░░░░` sized to `width`
/// cells. `ratio` is clamped to 0.0..=1.0 for display; values past the
/// limit still render as a full bar.
pub fn inline_bar(ratio: f64, width: u16, color: Color) -> Vec<Span<'static>> {
    let width = width as usize;
    let clamped = ratio.clamp(0.0, 1.0);
    let filled = (clamped * width as f64).round() as usize;
    let filled = filled.min(width);

    vec![
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled(
            "░".repeat(width - filled),
            Style::default().fg(Color::Rgb(60, 56, 76)),
        ),
    ]
}

/// Percentage label for a ratio ("75%", "112%").
pub fn percent_label(ratio: f64) -> String {
    format!("{}%", (ratio * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_and_empty_bars_fill_the_width() {
        let full = inline_bar(1.0, 10, Color::White);
        assert_eq!(full[0].content.chars().count(), 10);
        assert_eq!(full[1].content.chars().count(), 0);

        let empty = inline_bar(0.0, 10, Color::White);
        assert_eq!(empty[0].content.chars().count(), 0);
        assert_eq!(empty[1].content.chars().count(), 10);
    }

    #[test]
    fn over_limit_ratio_is_clamped_for_display() {
        let over = inline_bar(1.4, 8, Color::White);
        assert_eq!(over[0].content.chars().count(), 8);
    }

    #[test]
    fn percent_label_rounds() {
        assert_eq!(percent_label(0.875), "88%");
        assert_eq!(percent_label(1.125), "113%");
    }
}
