//! Presentation layer for echo-chat
//!
//! This crate contains CLI definitions, output formatting, the placeholder
//! login prompt, and the interactive chat REPL.

pub mod chat;
pub mod cli;
pub mod login;
pub mod output;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use output::formatter::ConsoleFormatter;
