//! Shared UI components for the Daylight app.
//!
//! Provides the light/dark [`Theme`] model, the [`ThemeToggleWidget`] that
//! owns and flips it, and the static branding header.

pub mod branding;
pub mod theme;
pub mod toggle;

pub use branding::{Branding, LearnLink, Logo, LEARN_URL};
pub use theme::{ParseThemeError, Theme};
pub use toggle::ThemeToggleWidget;

/// Shared CSS containing design tokens for both themes and base styles.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
