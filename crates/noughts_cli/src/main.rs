//! Noughts - terminal tic-tac-toe.

use anyhow::{Context, Result};
use clap::Parser;
use noughts_cli::{Cli, Command, Numbering, Session, Settings, evaluate_notation};
use tracing::{Subscriber, info, instrument};
use tracing_subscriber::EnvFilter;

/// Filter used while the settings file is read, before its own filter applies.
const STARTUP_LOG_FILTER: &str = "warn";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = tracing::subscriber::with_default(subscriber(STARTUP_LOG_FILTER), || {
        Settings::load(cli.config.as_deref())
    })?;
    init_tracing(settings.log_filter())?;

    match cli.command {
        Command::Play {
            auto_new_game,
            hide_indices,
            zero_based,
        } => {
            let numbering = if zero_based {
                Numbering::ZeroBased
            } else {
                Numbering::OneBased
            };
            run_play(settings.with_overrides(auto_new_game, hide_indices), numbering)
        }
        Command::Eval { board, json } => run_eval(&board, json),
    }
}

/// Logs go to stderr so stdout carries only the game.
fn subscriber(default_filter: &str) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .finish()
}

fn init_tracing(default_filter: &str) -> Result<()> {
    tracing::subscriber::set_global_default(subscriber(default_filter))
        .context("Failed to install tracing subscriber")
}

/// Run an interactive game on the terminal
#[instrument(skip(settings))]
fn run_play(settings: Settings, numbering: Numbering) -> Result<()> {
    info!(?settings, "Starting play");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(stdin.lock(), stdout.lock(), settings, numbering).run()?;
    Ok(())
}

/// Evaluate a single board and print the result
#[instrument]
fn run_eval(board: &str, json: bool) -> Result<()> {
    let evaluation = evaluate_notation(board)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        println!("{evaluation}");
    }
    Ok(())
}
