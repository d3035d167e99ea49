//! Core domain types for Wordle
//!
//! Words, feedback, and the error taxonomy. Everything here is a plain value
//! type with no shared state.

mod error;
mod feedback;
mod guess;
pub mod letters;
mod word;

pub use error::EngineError;
pub use feedback::{Feedback, Mark};
pub use guess::{DELIMITER, GuessFeedback, Rejected};
pub use letters::{LetterSet, PositionSet};
pub use word::{Word, WordError};
