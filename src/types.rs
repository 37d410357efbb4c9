use crate::cli::ThemeChoice;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Intro spinner, page not initialized yet
    Intro,
    Normal,
    /// Keystrokes go to the contact form
    FormEditing,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Theme::Dark } else { Theme::Light }
    }

    /// Pick the startup theme
    ///
    /// An explicit flag wins, then the saved preference, then `probe` (the
    /// terminal background), then Light. `probe` only runs when needed.
    pub fn resolve(
        choice: ThemeChoice,
        saved_dark_mode: Option<bool>,
        probe: impl FnOnce() -> Option<Theme>,
    ) -> Self {
        match choice {
            ThemeChoice::Dark => return Theme::Dark,
            ThemeChoice::Light => return Theme::Light,
            ThemeChoice::Auto => {}
        }

        if let Some(dark_mode) = saved_dark_mode {
            return Theme::from_dark_mode(dark_mode);
        }

        probe().unwrap_or(Theme::Light)
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: Color::Rgb(248, 250, 252),
                text: Color::Rgb(31, 41, 55),
                muted: Color::Rgb(107, 114, 128),
                primary: Color::Rgb(99, 102, 241),
                accent: Color::Rgb(236, 72, 153),
                bar: Color::Rgb(229, 231, 235),
            },
            Theme::Dark => Palette {
                background: Color::Rgb(17, 24, 39),
                text: Color::Rgb(243, 244, 246),
                muted: Color::Rgb(156, 163, 175),
                primary: Color::Rgb(129, 140, 248),
                accent: Color::Rgb(244, 114, 182),
                bar: Color::Rgb(31, 41, 55),
            },
        }
    }
}

/// Colors used when drawing the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub bar: Color,
}

/// Status colors shared by both themes
pub const SUCCESS_COLOR: Color = Color::Rgb(16, 185, 129);
pub const ERROR_COLOR: Color = Color::Rgb(239, 68, 68);
pub const WARNING_COLOR: Color = Color::Rgb(245, 158, 11);
