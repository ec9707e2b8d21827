//! Theme model for Daylight.
//!
//! Two themes exist, Light and Dark. The active one is written to the
//! `data-theme` attribute so the shared stylesheet can pick its tokens.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a theme name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseThemeError {
    #[error("unknown theme '{0}' (expected 'light' or 'dark')")]
    Unknown(String),
}

/// Available themes for the application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns the display name for the theme.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// Returns all available themes.
    pub fn all() -> &'static [Theme] {
        &[Theme::Light, Theme::Dark]
    }

    /// The other theme.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Accessible name of the toggle button. Always names the theme the
    /// button switches *to*.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }

    /// Glyph shown on the toggle button: a moon while dark mode is on offer,
    /// a sun while light mode is.
    pub fn toggle_glyph(&self) -> &'static str {
        match self {
            Theme::Light => "\u{1F319}",
            Theme::Dark => "\u{2600}\u{FE0F}",
        }
    }

    /// Visible button text, glyph followed by the target theme.
    pub fn toggle_text(&self) -> String {
        format!("{} {} mode", self.toggle_glyph(), self.toggled().display_name())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_value())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Theme::all()
            .iter()
            .copied()
            .find(|theme| theme.css_value().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseThemeError::Unknown(s.to_string()))
    }
}
