#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod core;
mod i18n;
mod ui;

use clap::Parser;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::{LogLevel, Settings};
use crate::i18n::Locale;

#[derive(Parser)]
#[command(name = "art-space", version, about = "Step through a small gallery of artworks")]
struct Args {
    /// Settings file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Language for the navigation labels
    #[arg(short, long, value_enum)]
    locale: Option<Locale>,

    /// Log verbosity
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,
}

fn init_logging(level: LogLevel) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_allow_str(env!("CARGO_CRATE_NAME"))
        .build();

    let _ = TermLogger::init(
        level.into(),
        log_config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn main() -> ExitCode {
    let args = Args::parse();

    let settings = Settings::load(args.config.as_deref());
    let level = args
        .log_level
        .or_else(|| settings.as_ref().ok().map(|s| s.log_level))
        .unwrap_or_default();
    init_logging(level);

    let mut settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(locale) = args.locale {
        settings.locale = locale;
    }

    let catalog = match settings.catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match app::run(settings, catalog) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Failed to start the viewer: {}", e);
            ExitCode::FAILURE
        }
    }
}
