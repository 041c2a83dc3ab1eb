// Theme system for the TUI
//
// A theme is a flat set of colors for every element on the chat screen.
// Selected by name from config; unknown names fall back to Dark.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Nord,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[ThemeKind::Dark, ThemeKind::Light, ThemeKind::Nord]
    }

    /// Look up a theme by (case-insensitive) name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Nord => "Nord",
        }
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Nord => Theme::nord(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub border_type: BorderType,

    pub title: Color,
    /// Focused input and toast borders
    pub highlight: Color,

    // Transcript
    pub user: Color,
    pub ai: Color,
    pub loading: Color,

    // Notifications
    pub success: Color,
    pub error: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Resolve a configured theme name
    pub fn named(name: &str) -> Self {
        match ThemeKind::from_name(name) {
            Some(kind) => kind.theme(),
            None => {
                tracing::warn!("Unknown theme '{}', using Dark", name);
                Self::dark()
            }
        }
    }

    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            border_type: BorderType::Rounded,

            title: Color::Cyan,
            highlight: Color::Cyan,

            user: Color::LightBlue,
            ai: Color::LightGreen,
            loading: Color::Magenta,

            success: Color::Green,
            error: Color::Red,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            muted: Color::Gray,
            border: Color::DarkGray,
            border_type: BorderType::Rounded,

            title: Color::Blue,
            highlight: Color::Blue,

            user: Color::Blue,
            ai: Color::Rgb(0, 110, 60),
            loading: Color::Magenta,

            success: Color::Green,
            error: Color::Red,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11), // Dark goldenrod
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
        }
    }

    /// Nord theme - arctic, bluish colors
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(216, 222, 233),
            muted: Color::Rgb(76, 86, 106),
            border: Color::Rgb(76, 86, 106),
            border_type: BorderType::Plain,

            title: Color::Rgb(136, 192, 208),
            highlight: Color::Rgb(136, 192, 208),

            user: Color::Rgb(129, 161, 193),
            ai: Color::Rgb(163, 190, 140),
            loading: Color::Rgb(180, 142, 173),

            success: Color::Rgb(163, 190, 140),
            error: Color::Rgb(191, 97, 106),

            log_error: Color::Rgb(191, 97, 106),
            log_warn: Color::Rgb(235, 203, 139),
            log_info: Color::Rgb(129, 161, 193),
            log_debug: Color::Rgb(76, 86, 106),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_case_insensitively() {
        assert_eq!(ThemeKind::from_name("nord"), Some(ThemeKind::Nord));
        assert_eq!(ThemeKind::from_name(" LIGHT "), Some(ThemeKind::Light));
        assert_eq!(ThemeKind::from_name("dracula"), None);
    }

    #[test]
    fn unknown_name_falls_back_to_dark() {
        assert_eq!(Theme::named("nope").background, Theme::dark().background);
        assert_eq!(Theme::named("Nord").background, Theme::nord().background);
    }
}
