//! Strictly Turns - CLI
//!
//! Plays one match between two concurrent players and prints the result.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use strictly_turns::{GameResult, MatchConfig, run_match};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing();

    let config = load_config(&cli)?;
    let report = run_match(&config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_result(*report.result());
    }
    Ok(())
}

/// Logs go to stderr so stdout carries only the game.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Reads the config file, if any, then applies command-line overrides.
#[instrument(skip_all, fields(config_path = ?cli.config))]
fn load_config(cli: &Cli) -> Result<MatchConfig> {
    let mut config = match &cli.config {
        Some(path) => MatchConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => MatchConfig::default(),
    };

    if let Some(policy) = cli.first {
        config = config.with_first_policy(policy);
    }
    if let Some(policy) = cli.second {
        config = config.with_second_policy(policy);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(exhaustion) = cli.on_exhaustion {
        config = config.with_on_exhaustion(exhaustion);
    }
    if cli.quiet || cli.json {
        config = config.with_show_board(false);
    }

    info!(?config, "Match configured");
    Ok(config)
}

fn print_result(result: GameResult) {
    println!("{}", result);
}
