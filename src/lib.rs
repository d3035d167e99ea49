//! Wordler
//!
//! A Wordle assistant built on constraint propagation: guess feedback is
//! folded into a set of known constraints, the word table is filtered by
//! them, and the remaining words are ranked by Expected List Reduction (ELR),
//! the expected fraction of candidates a guess would eliminate.
//!
//! # Quick Start
//!
//! ```rust
//! use wordler::config::WordLength;
//! use wordler::constraints::Session;
//! use wordler::core::GuessFeedback;
//! use wordler::scoring::score;
//! use wordler::table::CandidateSet;
//!
//! let table = CandidateSet::try_from_words(
//!     WordLength::DEFAULT,
//!     &["share", "spare", "stare", "flare", "crane", "slate"],
//! )
//! .unwrap();
//!
//! // Record what the game showed for a guess
//! let mut session = Session::new(WordLength::DEFAULT);
//! session
//!     .record(GuessFeedback::parse("CRANE-01202", WordLength::DEFAULT).unwrap())
//!     .unwrap();
//!
//! // Narrow the table and score what is left
//! let remaining = session.candidates(&table);
//! assert_eq!(remaining.len(), 4);
//! let scores = score(&remaining).unwrap();
//! let (best, elr) = scores.best().unwrap();
//! println!("Try {best} (ELR {elr:.3})");
//! ```

// Run configuration
pub mod config;

// Core domain types
pub mod core;

// Constraint accumulation and filtering
pub mod constraints;

// ELR scoring
pub mod scoring;

// Candidate tables and ranking
pub mod table;

// Word tables
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
