//! Command-line arguments and launch configuration.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use daylight_ui::Theme;

/// Command-line arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "daylight")]
#[command(about = "Light/dark theme toggle demo")]
pub struct Args {
    /// Initial theme (light or dark)
    #[arg(short, long, default_value = "light")]
    pub theme: Theme,

    /// Initial window width
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Extra CSS file appended after the shared styles
    #[arg(long)]
    pub stylesheet: Option<PathBuf>,

    /// Default log filter, overridden by RUST_LOG
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

/// Resolved settings for one launch of the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub initial_theme: Theme,
    pub width: u32,
    pub height: u32,
    /// Contents of `--stylesheet`, if given.
    pub extra_css: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_theme: Theme::default(),
            width: 800,
            height: 600,
            extra_css: None,
        }
    }
}

impl AppConfig {
    /// Build the config from parsed arguments, reading the stylesheet if one
    /// was given.
    pub fn from_args(args: &Args) -> Result<Self> {
        let extra_css = args
            .stylesheet
            .as_ref()
            .map(|path| {
                std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read stylesheet {}", path.display()))
            })
            .transpose()?;

        Ok(Self {
            initial_theme: args.theme,
            width: args.width,
            height: args.height,
            extra_css,
        })
    }

    /// `<style>` blocks injected into the page head.
    pub fn custom_head(&self, shared_css: &str) -> String {
        let mut head = format!("<style>{shared_css}</style>");
        if let Some(css) = &self.extra_css {
            let _ = write!(head, "<style>{css}</style>");
        }
        head
    }
}
