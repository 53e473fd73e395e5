//! Wordle Chat
//!
//! A Wordle game engine for chat bots: per-player sessions, duplicate-aware
//! feedback, and a transport-free host layer with expiry timers and
//! statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_chat::game::{OutcomeKind, Session};
//!
//! let mut session = Session::with_secret(["apple", "paper", "grape"], 5, "apple").unwrap();
//!
//! let outcome = session.guess("paper");
//! println!("{}", outcome.feedback.unwrap().to_emoji()); // 🟨🟨🟩🟨⬛
//!
//! assert_eq!(session.guess("apple").kind, OutcomeKind::Solved);
//! ```

// Core domain types
pub mod core;

// Game sessions
pub mod game;

// Word lists
pub mod wordlists;

// Chat-bot host: registry, commands, statistics
pub mod host;

// Command implementations
pub mod commands;

// Text output formatting
pub mod output;
