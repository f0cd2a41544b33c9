//! # Flashcards
//!
//! A small library for quizzing yourself on term/definition cards, with a terminal
//! client on top. The library never prints or prompts: callers hand it plain values
//! and get structured results back.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, binary only)                              │
//! │  - Argument parsing, the interactive loop, the transcript   │
//! │  - The ONLY place that touches stdin/stdout/exit codes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, owns the store                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per command, returns CmdResult                │
//! │  - Turns recoverable store errors into messages             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (store/)                                       │
//! │  - FlashcardStore: term -> Card, uniqueness, quiz, stats    │
//! │  - format: the `TERM : DEFINITION : MISTAKES` line codec    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error handling
//!
//! Everything that can go wrong while using a card set (duplicate term, missing
//! file, empty set when quizzing, ...) is an ordinary value. Nothing in the library
//! panics or exits on user input.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade used by clients
//! - [`commands`]: Per-command logic and messages
//! - [`store`]: The card store and the set file codec
//! - [`model`]: `Card`, quiz outcomes, hardest-card report
//! - [`transcript`]: Session record written by the `log` command
//! - [`config`]: Session defaults loaded from `config.json`
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod transcript;
