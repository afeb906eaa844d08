//! Development tasks for the reward engine
//!
//! This binary provides balance and inspection tools using the cargo-xtask
//! pattern. Run with: `cargo xtask <command>`

mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{Luck, Odds, Roll, Shop};

/// Development tasks for the reward engine
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Balance and inspection tools for reward generation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate reward batches for a party and seed
    Roll(Roll),

    /// Show per-tier weights and odds of a pool
    Odds(Odds),

    /// Show party luck, grade and upgrade odds
    Luck(Luck),

    /// Show shop rows and reroll prices for a wave
    Shop(Shop),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for REWARD_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Roll(cmd) => cmd.execute(),
        Command::Odds(cmd) => cmd.execute(),
        Command::Luck(cmd) => cmd.execute(),
        Command::Shop(cmd) => cmd.execute(),
    }
}
