//! Command implementations

pub mod chat;
pub mod check;
pub mod play;

pub use chat::run_chat;
pub use check::{CheckResult, check_guess};
pub use play::{PlayConfig, run_play};
