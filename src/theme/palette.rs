use crate::domain::models::ThemeMode;
use ratatui::style::Color;

/// The five colors every overlay surface is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub border: Color,
    pub button_background: Color,
    pub suggestion_hover: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(255, 255, 255), // #ffffff
    text: Color::Rgb(26, 26, 27), // #1a1a1b
    border: Color::Rgb(204, 204, 204), // #cccccc
    button_background: Color::Rgb(246, 247, 248), // #f6f7f8
    suggestion_hover: Color::Rgb(246, 247, 248), // #f6f7f8
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(26, 26, 27), // #1a1a1b
    text: Color::Rgb(215, 218, 220), // #d7dadc
    border: Color::Rgb(52, 53, 54), // #343536
    button_background: Color::Rgb(39, 39, 41), // #272729
    suggestion_hover: Color::Rgb(42, 42, 43), // #2a2a2b
};

impl Palette {
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> &'static Palette {
        match mode {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }
}
