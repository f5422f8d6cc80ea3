//! Sanmoku - command-line entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use sanmoku::{Cli, Command, ReplayReport, Settings, load_settings_logged, replay, run_tui};
use sanmoku_core::{GameEvent, MoveOrder};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Settings decide where the application logs, so loading logs to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let settings = load_settings_logged(&cli.config, filter, std::io::stderr)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(settings),
        Command::Replay {
            events,
            json,
            descending,
            no_coordinates,
        } => {
            let mut settings = settings;
            if descending {
                settings = settings.with_move_order(MoveOrder::Descending);
            }
            if no_coordinates {
                settings = settings.with_show_coordinates(false);
            }
            run_replay(settings, events, json)
        }
    }
}

/// Replays events and prints the resulting position to stdout.
#[instrument(skip(settings, events), fields(events = events.len()))]
fn run_replay(settings: Settings, events: Vec<GameEvent>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Replaying events");
    let session = replay(&settings, &events).context("Replay failed")?;
    let report = ReplayReport::new(&session, &settings);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}
