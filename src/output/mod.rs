//! Text output
//!
//! Plain formatting shared by chat replies and colored terminal printing for
//! the CLI.

pub mod display;
pub mod formatters;

pub use display::{colored_guess, print_check_result, print_outcome, print_stats};
