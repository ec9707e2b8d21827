//! Static branding: logo, edit hint and documentation link.

use std::sync::LazyLock;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use dioxus::prelude::*;

/// Bundled application logo.
pub const LOGO_SVG: &str = include_str!("../assets/logo.svg");

/// Documentation link target.
pub const LEARN_URL: &str = "https://reactjs.org";

static LOGO_DATA_URL: LazyLock<String> = LazyLock::new(|| svg_data_url(LOGO_SVG));

/// Encode SVG markup as a data URL for display in the webview.
pub fn svg_data_url(svg: &str) -> String {
    let encoded = STANDARD.encode(svg.as_bytes());
    format!("data:image/svg+xml;base64,{}", encoded)
}

#[component]
pub fn Logo() -> Element {
    rsx! {
        img { class: "app-logo", src: LOGO_DATA_URL.as_str(), alt: "logo" }
    }
}

#[component]
pub fn LearnLink() -> Element {
    rsx! {
        a {
            class: "app-link",
            href: LEARN_URL,
            target: "_blank",
            rel: "noopener noreferrer",
            "Learn React"
        }
    }
}

/// Header with the logo, edit hint and documentation link.
#[component]
pub fn Branding() -> Element {
    rsx! {
        header { class: "app-header",
            Logo {}
            p { class: "app-hint",
                "Edit "
                code { "src/app.rs" }
                " and save to reload."
            }
            LearnLink {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_data_url() {
        assert_eq!(svg_data_url("<svg/>"), "data:image/svg+xml;base64,PHN2Zy8+");
    }

    #[test]
    fn test_logo_decodes_back_to_svg() {
        let url = svg_data_url(LOGO_SVG);
        let payload = url.strip_prefix("data:image/svg+xml;base64,").unwrap();
        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(decoded, LOGO_SVG.as_bytes());
    }
}
