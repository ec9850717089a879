//! Chat history persistence.
//!
//! [`json_file::JsonFileHistoryStore`] implements the application layer's
//! `HistoryStore` port over a single JSON file.

pub mod json_file;
