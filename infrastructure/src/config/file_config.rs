//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; every field has a default so a partial
//! (or absent) file is always valid.

use serde::{Deserialize, Serialize};

/// Default assistant endpoint, matching the development server.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Remote assistant settings
    pub assistant: FileAssistantConfig,
    /// History persistence settings
    pub history: FileHistoryConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

/// Raw assistant configuration from TOML (`[assistant]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAssistantConfig {
    /// Base URL of the assistant service; the client posts to `<base>/chat`
    pub base_url: String,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for FileAssistantConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Raw history configuration from TOML (`[history]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHistoryConfig {
    /// Path of the history file; the platform data directory when unset
    pub path: Option<String>,
}

/// Raw REPL configuration from TOML (`[repl]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show the busy spinner while a reply is pending
    pub show_spinner: bool,
    /// Path to the input history file
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_spinner: true,
            history_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_config() {
        let toml_str = r#"
[assistant]
base_url = "https://assistant.example.com"
request_timeout_secs = 30

[history]
path = "/tmp/echo-chat/history.json"

[repl]
show_spinner = false
history_file = "~/.local/share/echo-chat/input.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.assistant.base_url, "https://assistant.example.com");
        assert_eq!(config.assistant.request_timeout_secs, 30);
        assert_eq!(
            config.history.path.as_deref(),
            Some("/tmp/echo-chat/history.json")
        );
        assert!(!config.repl.show_spinner);
        assert!(config.repl.history_file.is_some());
    }

    #[test]
    fn deserialize_partial_config() {
        let toml_str = r#"
[assistant]
base_url = "http://10.0.0.5:8000"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.assistant.base_url, "http://10.0.0.5:8000");
        // Defaults should apply
        assert_eq!(config.assistant.request_timeout_secs, 120);
        assert!(config.history.path.is_none());
        assert!(config.repl.show_spinner);
    }

    #[test]
    fn default_config() {
        let config = FileConfig::default();
        assert_eq!(config.assistant.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.assistant.request_timeout_secs, 120);
        assert!(config.history.path.is_none());
        assert!(config.repl.show_spinner);
    }
}
