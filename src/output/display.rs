//! Display functions for command results

use super::formatters::{elr_bar, percent};
use crate::commands::{BenchmarkResult, CompareResult, ScoreResult, SuggestResult};
use crate::core::Rejected;
use crate::table::{RankedRow, SortKey};
use colored::Colorize;

/// Print one warning line per rejected input
pub fn print_rejections(what: &str, rejected: &[Rejected]) {
    for entry in rejected {
        println!(
            "{} skipped {what} '{}': {}",
            "warning:".yellow().bold(),
            entry.input,
            entry.error
        );
    }
}

fn print_rows(rows: &[RankedRow], sort_by: SortKey, show_elr: bool) {
    let elr_header = if show_elr { "elr" } else { "" };
    println!(
        "   {:<8} {:>10} {:>8} {:>8} {}",
        "word".bright_black(),
        "weight".bright_black(),
        "letters".bright_black(),
        "position".bright_black(),
        elr_header.bright_black()
    );
    for (i, row) in rows.iter().enumerate() {
        let elr = row
            .elr
            .map(|elr| format!("{} {elr:.4}", elr_bar(elr, 20).green()))
            .unwrap_or_default();
        println!(
            "{:>2}. {:<8} {:>10.1} {:>8} {:>8} {elr}",
            i + 1,
            row.word.text().bright_white().bold(),
            row.weight,
            row.letter_frequency_sum,
            row.position_frequency_sum,
        );
    }
    println!("   sorted by {}", sort_by.to_string().cyan());
}

/// Print the result of a suggestion run
pub fn print_suggest_result(result: &SuggestResult) {
    print_rejections("entry", &result.rejected);

    println!("\n{}", "─".repeat(60).cyan());
    for entry in &result.accepted {
        println!(
            "  {} {}",
            entry.guess.text().bright_white().bold(),
            entry.feedback.to_emoji()
        );
    }
    if !result.accepted.is_empty() {
        println!("  known: {}", result.knowns.exact_pattern().bright_yellow());
    }
    println!(
        "Words remaining: {} ({:.1}% of {})",
        result.remaining.to_string().bright_yellow().bold(),
        result.remaining_percent(),
        result.total
    );
    println!("{}", "─".repeat(60).cyan());

    if result.remaining == 0 {
        println!(
            "\n{}",
            "No words match the feedback given. Check the entries above.".red()
        );
        return;
    }

    let show_elr = result.rows.iter().any(|row| row.elr.is_some());
    print_rows(&result.rows, result.sort_by, show_elr);
    if show_elr && !result.elr_complete {
        println!("{}", "   ELR scoring stopped early".yellow());
    }
}

/// Print the result of a batch scoring run
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ELR SCORES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let status = if result.complete {
        "complete".green()
    } else {
        "stopped early".yellow()
    };
    println!(
        "\n   Scored:       {}/{} ({:.1}%), {status}",
        result.scored,
        result.requested,
        percent(result.scored, result.requested)
    );
    println!("   Time taken:   {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second: {:.1}\n", result.words_per_second());

    print_rows(&result.rows, SortKey::Elr, true);
}

/// Print the feedback of a comparison
pub fn print_compare_result(result: &CompareResult) {
    println!(
        "{} vs {}: {} {}",
        result.guess.text().bright_white().bold(),
        result.actual.text().bright_white().bold(),
        result.feedback.to_string().bright_yellow(),
        result.feedback.to_emoji()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} ({:.1}%)",
        result.solved,
        percent(result.solved, result.total_words)
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=result.max_turns {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = percent(count, result.total_words);
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.failures.is_empty() {
        let words: Vec<_> = result.failures.iter().map(|w| w.text()).collect();
        println!(
            "\n{} {}",
            "Not solved:".red().bold(),
            words.join(", ")
        );
    }
}
