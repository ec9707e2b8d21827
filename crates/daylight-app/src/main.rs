//! Daylight - Main entry point
//!
//! Usage:
//!   daylight
//!   daylight --theme dark --stylesheet custom.css

use anyhow::Result;
use clap::Parser;

use daylight_app::{AppConfig, Args, launch, logging};

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init(&args.log_level)?;

    let config = AppConfig::from_args(&args)?;
    launch(config);

    Ok(())
}
