//! Constraint propagation
//!
//! Accumulates feedback into a [`Knowns`] state and turns that state into a
//! candidate [`Filter`].

pub mod filter;
mod knowns;
mod session;

pub use filter::{Filter, apply};
pub use knowns::Knowns;
pub use session::Session;
