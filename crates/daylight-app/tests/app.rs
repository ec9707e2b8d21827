//! Full-app render checks.

use std::io::Write;

use clap::Parser;
use daylight_app::{App, AppConfig, Args, initial_theme};
use daylight_ui::Theme;
use dioxus::prelude::*;

fn render_app() -> String {
    let mut dom = VirtualDom::new(App);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn test_app_renders_branding_and_toggle() {
    let html = render_app();

    assert!(html.contains(r#"alt="logo""#), "{html}");
    assert!(html.contains("<code>src/app.rs</code>"), "{html}");
    assert!(html.contains("Learn React"), "{html}");
    assert!(html.contains("reactjs"), "{html}");

    assert!(html.contains(r#"data-theme="light""#), "{html}");
    assert!(html.contains("Current theme: light"), "{html}");
    assert!(html.contains(r#"aria-label="Switch to dark mode""#), "{html}");
    assert_eq!(html.matches("<button").count(), 1, "{html}");
}

#[test]
fn test_initial_theme_defaults_to_light() {
    assert_eq!(initial_theme(), Theme::Light);
}

#[test]
fn test_stylesheet_is_appended_to_head() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, ".theme-toggle {{ font-size: 2rem; }}").unwrap();

    let path = file.path().to_str().unwrap();
    let args = Args::try_parse_from(["daylight", "--theme", "dark", "--stylesheet", path]).unwrap();
    let config = AppConfig::from_args(&args).unwrap();

    assert_eq!(config.initial_theme, Theme::Dark);
    let head = config.custom_head(daylight_ui::SHARED_CSS);
    assert!(head.starts_with("<style>"));
    assert!(head.ends_with("<style>.theme-toggle { font-size: 2rem; }</style>"));
    assert!(head.contains(r#"[data-theme="dark"]"#));
}
