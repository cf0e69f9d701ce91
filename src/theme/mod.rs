use crate::domain::models::ThemeMode;
use ratatui::style::{Modifier, Style};

pub mod palette;

pub use palette::Palette;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub mode: ThemeMode,

    pub bar: Style,
    pub border: Style,
    pub border_focus: Style,

    pub input: Style,
    pub input_selection: Style,
    pub placeholder: Style,
    pub button: Style,

    pub suggestion: Style,
    pub suggestion_hover: Style,
    pub suggestion_highlight: Style,

    pub host: Style,
    pub host_title: Style,
    pub host_key: Style,
    pub dimmed: Style,
    pub status: Style,
    pub status_error: Style,
}

impl Theme {
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        Self::from_palette(mode, Palette::for_mode(mode))
    }

    #[must_use]
    pub fn from_palette(mode: ThemeMode, p: &Palette) -> Self {
        let base = Style::default().bg(p.background).fg(p.text);

        Self {
            mode,

            bar: base,
            border: Style::default().bg(p.background).fg(p.border),
            border_focus: Style::default().bg(p.background).fg(p.text),

            input: base,
            input_selection: base.add_modifier(Modifier::REVERSED),
            placeholder: base.add_modifier(Modifier::DIM),
            button: Style::default()
                .bg(p.button_background)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),

            suggestion: base,
            suggestion_hover: Style::default().bg(p.suggestion_hover).fg(p.text),
            suggestion_highlight: Style::default()
                .bg(p.suggestion_hover)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),

            host: base,
            host_title: Style::default()
                .bg(p.button_background)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            host_key: Style::default()
                .bg(p.button_background)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            dimmed: base.add_modifier(Modifier::DIM),
            status: Style::default().bg(p.button_background).fg(p.text),
            status_error: Style::default()
                .bg(p.button_background)
                .fg(p.text)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_mode(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_table_rows() {
        let light = Theme::from_mode(ThemeMode::Light);
        assert_eq!(light.bar.bg, Some(Color::Rgb(255, 255, 255)));
        assert_eq!(light.bar.fg, Some(Color::Rgb(26, 26, 27)));
        assert_eq!(light.border.fg, Some(Color::Rgb(204, 204, 204)));
        assert_eq!(light.button.bg, Some(Color::Rgb(246, 247, 248)));
        assert_eq!(light.suggestion_hover.bg, Some(Color::Rgb(246, 247, 248)));

        let dark = Theme::from_mode(ThemeMode::Dark);
        assert_eq!(dark.bar.bg, Some(Color::Rgb(26, 26, 27)));
        assert_eq!(dark.bar.fg, Some(Color::Rgb(215, 218, 220)));
        assert_eq!(dark.border.fg, Some(Color::Rgb(52, 53, 54)));
        assert_eq!(dark.button.bg, Some(Color::Rgb(39, 39, 41)));
        assert_eq!(dark.suggestion_hover.bg, Some(Color::Rgb(42, 42, 43)));
    }

    #[test]
    fn test_from_mode_is_pure() {
        assert_eq!(
            Theme::from_mode(ThemeMode::Dark),
            Theme::from_mode(ThemeMode::Dark)
        );
        assert_ne!(
            Theme::from_mode(ThemeMode::Dark),
            Theme::from_mode(ThemeMode::Light)
        );
        assert_eq!(Theme::default().mode, ThemeMode::Light);
    }
}
