//! Debate CLI - play the round-earth debate game in a terminal
//!
//! # Usage
//!
//! ```bash
//! # Start an interactive game
//! debate play
//!
//! # Reproducible rebuttals, hint every other attempt
//! debate play --seed 7 --hint-every 2
//!
//! # See how an argument would be classified
//! debate classify "Ships disappear over the horizon"
//!
//! # List the evidence categories
//! debate categories --evidence ./my-evidence.json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod commands;

use commands::{categories, classify, play};
use debate_core::GameConfig;

/// Round-earth debate game
///
/// Convince a flat-earth skeptic using scientific arguments.
#[derive(Parser)]
#[command(
    name = "debate",
    version,
    about = "Round-earth debate game",
    long_about = "Convince the skeptic that the Earth is round.\n\n\
                  Arguments are scored by the kind of evidence they use;\n\
                  reusing the same kind of evidence only earns half credit."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON evidence table to use instead of the built-in one
    #[arg(long, global = true, value_name = "PATH")]
    evidence: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    #[command(name = "play")]
    Play(play::PlayArgs),

    /// Classify a single argument without playing
    #[command(name = "classify")]
    Classify(classify::ClassifyArgs),

    /// List evidence categories
    #[command(name = "categories")]
    Categories(categories::CategoriesArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let mut config = GameConfig::from_env().context("Invalid environment configuration")?;
    if let Some(path) = cli.evidence {
        config.evidence_path = Some(path);
    }

    match cli.command {
        Commands::Play(args) => play::run(args, config),
        Commands::Classify(args) => classify::run(args, &config),
        Commands::Categories(args) => categories::run(args, &config),
    }
}

/// Setup logging based on verbosity level
fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

