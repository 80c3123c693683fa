use ratatui::style::{Color, Modifier, Style};

use crate::palette::ColorToken;

pub(crate) const HEADER_BG: Color = Color::Rgb(30, 30, 46);
pub(crate) const ACCENT: Color = Color::Rgb(137, 180, 250);
pub(crate) const GREEN: Color = Color::Rgb(166, 227, 161);
pub(crate) const RED: Color = Color::Rgb(243, 139, 168);
pub(crate) const YELLOW: Color = Color::Rgb(249, 226, 175);
pub(crate) const SKY: Color = Color::Rgb(137, 220, 235);
pub(crate) const PEACH: Color = Color::Rgb(250, 179, 135);
pub(crate) const SAPPHIRE: Color = Color::Rgb(116, 199, 236);
pub(crate) const MAUVE: Color = Color::Rgb(203, 166, 247);
pub(crate) const TEAL: Color = Color::Rgb(148, 226, 213);
pub(crate) const PINK: Color = Color::Rgb(245, 194, 231);
pub(crate) const MAROON: Color = Color::Rgb(235, 160, 172);
pub(crate) const SURFACE: Color = Color::Rgb(49, 50, 68);
pub(crate) const TEXT: Color = Color::Rgb(205, 214, 244);
pub(crate) const TEXT_DIM: Color = Color::Rgb(127, 132, 156);
pub(crate) const OVERLAY: Color = Color::Rgb(69, 71, 90);
pub(crate) const COMMAND_BG: Color = Color::Rgb(24, 24, 37);

/// Resolve an abstract color token to a terminal color.
pub(crate) fn color(token: ColorToken) -> Color {
    match token {
        ColorToken::CategoryFood => PEACH,
        ColorToken::CategoryTransport => SAPPHIRE,
        ColorToken::CategoryEntertainment => MAUVE,
        ColorToken::CategoryEducation => TEAL,
        ColorToken::CategoryShopping => PINK,
        ColorToken::CategoryHealth => MAROON,
        ColorToken::Success => GREEN,
        ColorToken::Info => SKY,
        ColorToken::Warning => YELLOW,
        ColorToken::Destructive => RED,
        ColorToken::Primary => ACCENT,
        ColorToken::Muted => TEXT_DIM,
    }
}

pub(crate) fn token_style(token: ColorToken) -> Style {
    Style::default().fg(color(token))
}

pub(crate) fn title_style() -> Style {
    Style::default()
        .fg(TEXT_DIM)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn income_style() -> Style {
    Style::default().fg(GREEN)
}

pub(crate) fn expense_style() -> Style {
    Style::default().fg(RED)
}

pub(crate) fn alt_row_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub(crate) fn command_bar_style() -> Style {
    Style::default().fg(TEXT).bg(COMMAND_BG)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(SURFACE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_tokens_match_amount_styles() {
        assert_eq!(token_style(ColorToken::Success), income_style());
        assert_eq!(token_style(ColorToken::Destructive), expense_style());
    }

    #[test]
    fn test_muted_is_dim() {
        assert_eq!(color(ColorToken::Muted), TEXT_DIM);
    }
}
