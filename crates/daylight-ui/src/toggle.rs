//! Theme toggle widget.

use dioxus::prelude::*;

use crate::theme::Theme;

/// Script that mirrors the theme onto `<html data-theme="...">`.
pub fn document_theme_script(theme: Theme) -> String {
    format!(
        "document.documentElement.setAttribute('data-theme', '{}');",
        theme.css_value()
    )
}

/// Holds the current theme, shows it, and flips it on click.
///
/// The theme is written to `data-theme` both on the widget's root element and
/// on the document root, so page-level styles follow it too.
#[component]
pub fn ThemeToggleWidget(#[props(default)] initial: Theme) -> Element {
    let mut theme = use_signal(|| initial);

    use_effect(move || {
        document::eval(&document_theme_script(theme()));
    });

    let current = theme();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{current.css_value()}",
            p { class: "theme-current", "Current theme: {current}" }
            button {
                class: "theme-toggle",
                r#type: "button",
                aria_label: current.toggle_label(),
                onclick: move |_| {
                    let from = theme();
                    let to = from.toggled();
                    tracing::debug!(%from, %to, "Toggling theme");
                    theme.set(to);
                },
                "{current.toggle_text()}"
            }
        }
    }
}
