//! Wordler - CLI
//!
//! Wordle assistant that narrows a word table from guess feedback and ranks
//! the remaining words by Expected List Reduction.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::time::Duration;
use wordler::{
    commands::{
        DEFAULT_MAX_TURNS, ScoreConfig, SuggestConfig, compare_words, run_benchmark, run_score,
        run_simple, scored_len, suggest,
    },
    config::{EngineConfig, WordLength},
    output::{
        formatters::progress_bar, print_benchmark_result, print_compare_result, print_rejections,
        print_score_result, print_suggest_result,
    },
    scoring::ElrScorer,
    table::{CandidateSet, SortKey},
    wordlists::{EMBEDDED_LENGTH, embedded, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordler",
    about = "Wordle assistant: constraint filtering and Expected List Reduction scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word table: 'embedded' (default) or path to a WORD[,WEIGHT] file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of letters per word
    #[arg(short = 'l', long, global = true, default_value_t = WordLength::DEFAULT.get())]
    word_length: usize,

    /// Worker threads for ELR scoring (default: one per core)
    #[arg(short = 'j', long, global = true)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter the table by guess feedback and suggest next guesses
    Suggest {
        /// Guesses with feedback, e.g. CRANE-01202 (0 absent, 1 present, 2 exact)
        entries: Vec<String>,

        /// Number of suggestions to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,

        /// word-frequency, letter-frequency, letter-position-frequency or elr
        #[arg(short, long, default_value_t = SortKey::default())]
        sort_by: SortKey,

        /// Compute ELR for the remaining words even when not sorting by it
        #[arg(long)]
        elr: bool,
    },

    /// Score every word of the table by ELR
    Score {
        /// Number of top words to show
        #[arg(short = 'n', long, default_value = "20")]
        top: usize,

        /// Score a random sample of this many words
        #[arg(long)]
        sample: Option<usize>,

        /// Seed for the random sample
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Stop scoring after this many seconds
        #[arg(short, long)]
        time_limit: Option<f64>,
    },

    /// Show the feedback a guess gets against an answer
    Compare {
        guess: String,
        actual: String,
    },

    /// Interactive mode: enter feedback turn by turn
    Simple,

    /// Play the engine against the first words of the table
    Benchmark {
        /// Number of target words
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,

        /// Turns before a game counts as failed
        #[arg(short, long, default_value_t = DEFAULT_MAX_TURNS)]
        max_turns: usize,
    },
}

/// Load the word table selected by `-w`
///
/// - "embedded": the built-in five-letter table
/// - "<path>": a `WORD[,WEIGHT,...]` file; bad rows are reported and skipped
fn load_table(wordlist: &str, length: WordLength) -> Result<CandidateSet> {
    if wordlist == "embedded" {
        if length != EMBEDDED_LENGTH {
            bail!(
                "the embedded table has {}-letter words; use --wordlist PATH for length {}",
                EMBEDDED_LENGTH.get(),
                length.get()
            );
        }
        return Ok(embedded());
    }

    let (table, rejected) = load_from_file(wordlist, length)
        .with_context(|| format!("failed to read word table '{wordlist}'"))?;
    print_rejections("row", &rejected);
    if table.is_empty() {
        bail!("word table '{wordlist}' has no usable {}-letter words", length.get());
    }
    Ok(table)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let length = WordLength::new(cli.word_length)?;
    let config = EngineConfig::new(length).with_threads(cli.threads);

    match cli.command {
        Commands::Compare { guess, actual } => {
            let result = compare_words(&guess, &actual, length)?;
            print_compare_result(&result);
            Ok(())
        }
        Commands::Suggest {
            entries,
            top,
            sort_by,
            elr,
        } => {
            let table = load_table(&cli.wordlist, length)?;
            let suggest_config = SuggestConfig {
                entries,
                top,
                sort_by,
                with_elr: elr,
            };
            let result = suggest(&suggest_config, &table, &ElrScorer::from_config(&config))?;
            print_suggest_result(&result);
            Ok(())
        }
        Commands::Score {
            top,
            sample,
            seed,
            time_limit,
        } => {
            let table = load_table(&cli.wordlist, length)?;
            let limit = time_limit
                .map(Duration::try_from_secs_f64)
                .transpose()
                .context("invalid --time-limit")?;
            let scorer = ElrScorer::from_config(&config.with_time_limit(limit));
            run_score_command(&table, &scorer, ScoreConfig { top, sample, seed })
        }
        Commands::Simple => {
            let table = load_table(&cli.wordlist, length)?;
            run_simple(&table, &ElrScorer::from_config(&config))
        }
        Commands::Benchmark { count, max_turns } => {
            let table = load_table(&cli.wordlist, length)?;
            run_benchmark_command(&table, &ElrScorer::from_config(&config), count, max_turns)
        }
    }
}

fn run_score_command(table: &CandidateSet, scorer: &ElrScorer, config: ScoreConfig) -> Result<()> {
    let total = scored_len(&config, table);
    println!("Scoring {total} words...");

    let pb = progress_bar(total);
    let tick = || pb.inc(1);
    let result = run_score(&config, table, scorer, Some(&tick))?;
    pb.finish_and_clear();

    print_score_result(&result);
    Ok(())
}

fn run_benchmark_command(
    table: &CandidateSet,
    scorer: &ElrScorer,
    count: usize,
    max_turns: usize,
) -> Result<()> {
    let targets: Vec<_> = table.prefix(count).words().cloned().collect();
    println!(
        "Running benchmark on {} words (max {max_turns} turns)...",
        targets.len()
    );

    let result = run_benchmark(table, &targets, max_turns, scorer)?;
    print_benchmark_result(&result);
    Ok(())
}
