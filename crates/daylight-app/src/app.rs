//! Root component and desktop launch.

use std::sync::OnceLock;

use daylight_ui::{Branding, SHARED_CSS, Theme, ThemeToggleWidget};
use dioxus::prelude::*;

use crate::config::AppConfig;

/// Theme the widget starts in, set once before launch.
static INITIAL_THEME: OnceLock<Theme> = OnceLock::new();

/// Theme chosen at launch, light when none was set.
pub fn initial_theme() -> Theme {
    INITIAL_THEME.get().copied().unwrap_or_default()
}

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        div { class: "app",
            Branding {}
            ThemeToggleWidget { initial: initial_theme() }
        }
    }
}

/// Open the desktop window. Blocks until it is closed.
pub fn launch(config: AppConfig) {
    if INITIAL_THEME.set(config.initial_theme).is_err() {
        tracing::warn!("Initial theme already set, keeping {}", initial_theme());
    }

    tracing::info!(
        theme = %config.initial_theme,
        width = config.width,
        height = config.height,
        "Launching Daylight"
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title("Daylight")
                        .with_inner_size(dioxus::desktop::LogicalSize::new(config.width, config.height))
                        .with_resizable(true),
                )
                .with_custom_head(config.custom_head(SHARED_CSS)),
        )
        .launch(App);
}
