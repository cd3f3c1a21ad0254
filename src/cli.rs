//! Command-line interface for strictly_turns.

use clap::Parser;
use strictly_turns::{Exhaustion, PolicyKind};

/// Strictly Turns - two threads, one board, strict alternation
#[derive(Parser, Debug)]
#[command(name = "strictly_turns")]
#[command(about = "Turn-gated tic-tac-toe between two concurrent players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML match config
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Policy for X (moves first)
    #[arg(long, value_enum)]
    pub first: Option<PolicyKind>,

    /// Policy for O
    #[arg(long, value_enum)]
    pub second: Option<PolicyKind>,

    /// Seed for random policies
    #[arg(long)]
    pub seed: Option<u64>,

    /// What a player does when its policy runs out of proposals
    #[arg(long, value_enum)]
    pub on_exhaustion: Option<Exhaustion>,

    /// Do not print the board after each move
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the match report as JSON instead of the result line
    #[arg(long)]
    pub json: bool,
}
