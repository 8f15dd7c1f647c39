use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use crossterm::tty::IsTty;

use led_display_test::app;
use led_display_test::config::{Cli, Settings};

/// Print the flag reference to stderr
fn usage() {
    eprintln!("Flags:");
    let _ = Cli::command().write_long_help(&mut io::stderr());
}

/// Set up stderr logging, unless it would draw over the terminal panel
fn init_logging(cli: &Cli, settings: &Settings) {
    if settings
        .runtime
        .backend
        .logs_would_cover_panel(io::stderr().is_tty())
    {
        if cli.verbose || cli.debug {
            eprintln!("Logging is off while the panel is drawn here; redirect stderr to keep it");
        }
        return;
    }

    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

async fn run(settings: Settings) -> anyhow::Result<()> {
    app::run(settings).await.context("Display test failed")
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            usage();
            return ExitCode::from(1);
        }
    };
    init_logging(&cli, &settings);

    tracing::info!("Starting led-display-test version {}", env!("CARGO_PKG_VERSION"));
    tracing::debug!(?settings, "Resolved settings");

    match run(settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("{e:#}");
            usage();
            ExitCode::from(255)
        }
    }
}
