//! Daylight desktop app
//!
//! Wires the shared UI components into a Dioxus desktop window:
//! - CLI parsing and launch configuration
//! - Logging setup
//! - The root component and window launch

pub mod app;
pub mod config;
pub mod logging;

pub use app::{App, initial_theme, launch};
pub use config::{AppConfig, Args};
