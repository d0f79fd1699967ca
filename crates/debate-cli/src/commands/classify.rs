//! Classify command - show how a single argument would be scored
//!
//! Usage:
//! ```bash
//! debate classify "NASA has satellite photos"
//! debate classify --json "Gravity proves it"
//! ```

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use debate_core::{Classifier, GameConfig};

/// Arguments for the classify command
#[derive(Args)]
pub struct ClassifyArgs {
    /// Argument text to classify
    #[arg(required = true, num_args = 1..)]
    text: Vec<String>,

    /// Output raw JSON (no formatting)
    #[arg(long)]
    json: bool,
}

/// Run the classify command
pub fn run(args: ClassifyArgs, config: &GameConfig) -> Result<()> {
    let table = config
        .load_table()
        .context("Failed to load evidence table")?;
    let classifier = Classifier::new(table);
    let text = args.text.join(" ");

    let Some(result) = classifier.classify(&text) else {
        if args.json {
            println!("null");
        } else {
            println!("{} No evidence category matched", "✗".red().bold());
        }
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let description = classifier.description_for(&result.category)?;
    println!("{} {}", "✓".green().bold(), result.category.green().bold());
    println!("  {} {}", "Weight:".dimmed(), result.weight);
    println!("  {} {}", "Evidence:".dimmed(), description);

    Ok(())
}
