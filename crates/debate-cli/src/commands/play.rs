//! Play command - interactive console game
//!
//! Usage:
//! ```bash
//! debate play
//! debate play --seed 42 --hint-every 2
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use debate_core::{Classifier, GameConfig, Session, SubmitResult, CONFIDENCE_THRESHOLD};

/// Arguments for the play command
#[derive(Args)]
pub struct PlayArgs {
    /// Seed for rebuttal and hint selection
    #[arg(long)]
    seed: Option<u64>,

    /// Show a hint every N attempts (0 disables hints)
    #[arg(long, value_name = "N")]
    hint_every: Option<u32>,
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Convinced,
    Quit,
    /// Input closed before either of the above
    EndOfInput,
}

/// Run the play command
pub fn run(args: PlayArgs, mut config: GameConfig) -> Result<()> {
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(n) = args.hint_every {
        config.hint_interval = n;
    }

    let table = config
        .load_table()
        .context("Failed to load evidence table")?;
    tracing::info!(
        categories = table.len(),
        seed = ?config.seed,
        hint_interval = config.hint_interval,
        "Starting game"
    );
    let mut session = Session::with_random(Classifier::new(table), config.random_source());

    let stdin = io::stdin();
    let stdout = io::stdout();
    play_game(&mut session, &config, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Drive one game over arbitrary input and output streams
pub fn play_game<R, W>(
    session: &mut Session,
    config: &GameConfig,
    mut input: R,
    mut out: W,
) -> Result<GameOutcome>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n{}", "=== Round Earth Debate ===".bold().cyan())?;
    writeln!(
        out,
        "\nYour goal: Convince the skeptic that the Earth is round using scientific arguments."
    )?;
    writeln!(
        out,
        "Win condition: Reach a credibility score of {CONFIDENCE_THRESHOLD} points."
    )?;
    writeln!(
        out,
        "\nTip: Use clear, scientific explanations. Different types of evidence have different weights."
    )?;

    while !session.state().is_convinced() {
        let status = session.status();
        writeln!(
            out,
            "\n{} {}",
            "Current Credibility Score:".dimmed(),
            status.credibility_score.to_string().green()
        )?;
        writeln!(out, "{} {}%", "Skepticism Level:".dimmed(), status.skepticism)?;
        writeln!(out, "{} {}", "Attempts so far:".dimmed(), status.attempts)?;
        writeln!(out, "\nPresent your argument (or type 'quit' to exit):")?;
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(GameOutcome::EndOfInput);
        }
        let argument = line.trim();

        if argument.eq_ignore_ascii_case("quit") {
            writeln!(out, "\nGame ended by player.")?;
            return Ok(GameOutcome::Quit);
        }

        let scored = match session.submit(argument)? {
            SubmitResult::NotUnderstood { message, .. } => {
                writeln!(out, "\n{} {}", "Skeptic:".red().bold(), message)?;
                continue;
            }
            SubmitResult::Scored(scored) => scored,
        };

        if let Some(note) = &scored.repeat_message {
            writeln!(out, "\n{} {}", "⚠ Note:".yellow().bold(), note)?;
        }
        writeln!(out, "\n{} {}", "Skeptic:".red().bold(), scored.rebuttal)?;

        if scored.status.convinced {
            writeln!(
                out,
                "\n{} You've convinced the skeptic in {} attempts!",
                "Congratulations!".green().bold(),
                scored.status.attempts
            )?;
            writeln!(
                out,
                "Final Credibility Score: {}",
                scored.status.credibility_score
            )?;
            return Ok(GameOutcome::Convinced);
        }

        if config.hint_due(scored.status.attempts) {
            writeln!(out, "\n{} {}", "ℹ Hint:".blue().bold(), session.hint())?;
        }
    }

    Ok(GameOutcome::Convinced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use debate_core::{EvidenceTable, ScriptedRandom};
    use std::io::Cursor;
    use std::sync::Arc;

    fn session() -> Session {
        let table = Arc::new(EvidenceTable::builtin().unwrap());
        Session::with_random(Classifier::new(table), Box::new(ScriptedRandom::first()))
    }

    fn play(input: &str) -> (GameOutcome, String, Session) {
        colored::control::set_override(false);
        let mut session = session();
        let mut out = Vec::new();
        let outcome = play_game(
            &mut session,
            &GameConfig::default(),
            Cursor::new(input.to_string()),
            &mut out,
        )
        .unwrap();
        (outcome, String::from_utf8(out).unwrap(), session)
    }

    #[test]
    fn test_win() {
        let (outcome, out, session) =
            play("horizon\nnonsense\ngravity\ntime zone\nmagellan\nnasa\n");
        assert_eq!(outcome, GameOutcome::Convinced);
        assert!(out.contains("I don't understand"));
        assert!(out.contains("convinced the skeptic in 5 attempts"));
        assert!(out.contains("Final Credibility Score: 100"));
        assert_eq!(session.state().attempts(), 5);
    }

    #[test]
    fn test_quit_and_repeat_note() {
        let (outcome, out, _) = play("nasa\nsatellite\nQUIT\n");
        assert_eq!(outcome, GameOutcome::Quit);
        assert!(out.contains("Reduced effectiveness"));
        assert!(out.contains("Game ended by player."));
    }

    #[test]
    fn test_hint_every_third_attempt() {
        let (outcome, out, _) = play("nasa\nnasa\nnasa\n");
        assert_eq!(outcome, GameOutcome::EndOfInput);
        assert_eq!(out.matches("Hint:").count(), 1);
        assert!(out.contains("Try using evidence about Arguments based on gravitational"));
    }
}
