use ratatui::style::Color;

/// Palette of the client. Purple-leaning, after the brand colors.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub panel: Color,
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub accent: Color,
    pub positive: Color,
    pub error: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(10, 10, 16),
            panel: Color::Rgb(24, 22, 34),
            text: Color::Rgb(220, 220, 220),
            text_muted: Color::Rgb(140, 140, 150),
            border: Color::Rgb(70, 64, 96),
            border_focused: Color::Rgb(147, 112, 219),
            accent: Color::Rgb(147, 112, 219),
            positive: Color::Rgb(90, 180, 110),
            error: Color::Rgb(200, 80, 80),
            warning: Color::Rgb(210, 150, 60),
        }
    }
}
