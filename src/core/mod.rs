//! Core domain types for Wordle
//!
//! Words and the feedback evaluation rules. Everything here is pure and
//! deterministic.

mod feedback;
mod word;

pub use feedback::{Feedback, Mark};
pub use word::{Word, WordError};
