//! Categories command - list the evidence table
//!
//! Usage:
//! ```bash
//! debate categories
//! debate categories --evidence ./custom.json
//! ```

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};

use debate_core::GameConfig;

/// Arguments for the categories command
#[derive(Args)]
pub struct CategoriesArgs {
    /// Also print every rebuttal
    #[arg(long)]
    rebuttals: bool,
}

/// Run the categories command
pub fn run(args: CategoriesArgs, config: &GameConfig) -> Result<()> {
    let evidence = config
        .load_table()
        .context("Failed to load evidence table")?;

    println!("{}", "Evidence Categories".bold().cyan());
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new("Id").fg(Color::Cyan),
            Cell::new("Weight").fg(Color::Cyan),
            Cell::new("Description").fg(Color::Cyan),
            Cell::new("Keywords").fg(Color::Cyan),
        ]);

    for category in evidence.iter() {
        table.add_row(vec![
            Cell::new(&category.id).fg(Color::Green),
            Cell::new(category.weight),
            Cell::new(&category.description),
            Cell::new(category.keywords.join(", ")),
        ]);
    }

    println!("{table}");

    if args.rebuttals {
        for category in evidence.iter() {
            println!();
            println!("{}", category.id.bold());
            for rebuttal in &category.rebuttals {
                println!("  {} {}", "•".cyan(), rebuttal);
            }
        }
    }

    Ok(())
}
