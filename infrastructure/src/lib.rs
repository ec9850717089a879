//! Infrastructure layer for echo-chat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod assistant;
pub mod config;
pub mod history;

// Re-export commonly used types
pub use assistant::{error::AssistantError, http::HttpAssistantClient};
pub use config::{
    ConfigLoader, FileAssistantConfig, FileConfig, FileHistoryConfig, FileReplConfig,
};
pub use history::json_file::JsonFileHistoryStore;
