//! `cueline` terminal client.
//!
//! Composition root: loads `.env`, sets up logging, opens the configured store,
//! and dispatches to a subcommand.
mod commands;
mod logging;
mod render;

use anyhow::Result;
use clap::Parser;
use commands::{GlobalArgs, History, Play, Select, Stats, Streak};

/// Daily movie-dialogue guessing game
#[derive(Parser)]
#[command(name = "cueline")]
#[command(about = "Guess who said the line, and in which movie", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Play (or revisit) the puzzle for a pack and date
    Play(Play),

    /// Print the deterministic target index for a corpus
    Select(Select),

    /// List completed sessions
    History(History),

    /// Show the current daily streak
    Streak(Streak),

    /// Show totals and the win distribution
    Stats(Stats),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::setup_logging(cli.global.verbose)?;

    let config = cli.global.runtime_config();
    match cli.command {
        Command::Play(cmd) => cmd.execute(&config),
        Command::Select(cmd) => cmd.execute(),
        Command::History(cmd) => cmd.execute(&config),
        Command::Streak(cmd) => cmd.execute(&config),
        Command::Stats(cmd) => cmd.execute(&config),
    }
}
