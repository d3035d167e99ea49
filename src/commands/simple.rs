//! Simple interactive CLI mode
//!
//! Reads `WORD-DIGITS` entries one per line and keeps a live session, showing
//! how many words remain and the best next guesses by ELR.

use crate::constraints::Session;
use crate::core::{DELIMITER, GuessFeedback};
use crate::output::formatters::elr_bar;
use crate::scoring::ElrScorer;
use crate::table::{CandidateSet, LetterStats, SortKey, rank};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// How many suggestions to show after each turn
const SHOWN: usize = 5;

/// Run the simple interactive mode on stdin/stdout
///
/// # Errors
///
/// Returns an error on terminal I/O failure or if the scorer cannot start its
/// workers.
pub fn run_simple(table: &CandidateSet, scorer: &ElrScorer) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(table, scorer, &mut stdin.lock(), &mut stdout.lock())
}

/// Interactive loop over any line source
///
/// # Errors
///
/// Returns an error on I/O failure or if the scorer cannot start its workers.
pub fn run_session<R: BufRead, W: Write>(
    table: &CandidateSet,
    scorer: &ElrScorer,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let length = table.word_length();
    let stats = LetterStats::from_candidates(table);
    let mut session = Session::new(length);

    writeln!(out, "{}", "Wordle assistant - interactive mode".bright_cyan().bold())?;
    writeln!(
        out,
        "Enter each guess as WORD{DELIMITER}{} (0 absent, 1 present, 2 exact).",
        "0".repeat(length.get())
    )?;
    writeln!(out, "Commands: 'undo', 'new', 'quit'\n")?;
    show_state(&session, table, &stats, scorer, out)?;

    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match line.trim().to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                session.reset();
                writeln!(out, "New game started")?;
            }
            "undo" | "u" => match session.undo() {
                Some(entry) => writeln!(out, "Removed {entry}")?,
                None => {
                    writeln!(out, "Nothing to undo")?;
                    continue;
                }
            },
            entry => {
                let recorded = GuessFeedback::parse(entry, length)
                    .and_then(|parsed| session.record(parsed).map(|_| ()));
                if let Err(error) = recorded {
                    writeln!(out, "{} {error}", "Rejected:".red())?;
                    continue;
                }
                if session.is_solved() {
                    writeln!(
                        out,
                        "{}",
                        format!("Solved in {} guesses!", session.turns())
                            .green()
                            .bold()
                    )?;
                    session.reset();
                    writeln!(out, "New game started")?;
                }
            }
        }

        show_state(&session, table, &stats, scorer, out)?;
    }

    writeln!(out, "Bye")?;
    Ok(())
}

fn show_state<W: Write>(
    session: &Session,
    table: &CandidateSet,
    stats: &LetterStats,
    scorer: &ElrScorer,
    out: &mut W,
) -> Result<()> {
    let remaining = session.candidates(table);
    writeln!(
        out,
        "Turn {}: {} of {} words remaining  [{}]",
        session.turns() + 1,
        remaining.len(),
        table.len(),
        session.knowns().exact_pattern()
    )?;

    if remaining.is_empty() {
        writeln!(
            out,
            "{}",
            "No words match this feedback. Type 'undo' or 'new'.".yellow()
        )?;
        return Ok(());
    }

    let scores = scorer.score(&remaining)?;
    for row in rank(&remaining, stats, Some(&scores), SortKey::Elr)
        .iter()
        .take(SHOWN)
    {
        let elr = row.elr.unwrap_or_default();
        writeln!(out, "  {}  {} {elr:.4}", row.word, elr_bar(elr, 20))?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WordLength;

    fn table() -> CandidateSet {
        CandidateSet::try_from_words(
            WordLength::DEFAULT,
            &["share", "flare", "stare", "spare", "aware", "crane", "slate"],
        )
        .unwrap()
    }

    fn run(script: &str) -> String {
        let mut input = script.as_bytes();
        let mut out = Vec::new();
        run_session(&table(), &ElrScorer::default(), &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn narrows_with_feedback() {
        let out = run("CRANE-01202\nquit\n");
        assert!(out.contains("7 of 7 words remaining"));
        assert!(out.contains("5 of 7 words remaining"));
        assert!(out.contains("Bye"));
    }

    #[test]
    fn undo_and_new_restore_state() {
        let out = run("CRANE-01202\nundo\nundo\nCRANE-01202\nnew\n");
        assert!(out.contains("Removed CRANE-01202"));
        assert!(out.contains("Nothing to undo"));
        assert!(out.contains("New game started"));
        assert_eq!(out.matches("7 of 7 words remaining").count(), 3);
    }

    #[test]
    fn bad_entries_are_rejected_and_session_kept() {
        let out = run("CRANE-0120\nCRANE-01202\nCRANE-22222\n");
        assert_eq!(out.matches("Rejected:").count(), 2);
        assert_eq!(out.matches("5 of 7 words remaining").count(), 1);
    }

    #[test]
    fn solving_starts_a_new_game() {
        let out = run("SHARE-22222\n");
        assert!(out.contains("Solved in 1 guesses!"));
        assert!(out.contains("New game started"));
    }

    #[test]
    fn empty_candidates_are_reported() {
        let out = run("CRANE-00000\n");
        assert!(out.contains("0 of 7 words remaining"));
        assert!(out.contains("No words match"));
    }
}
