//! JSON file writer for the session collection.
//!
//! The whole collection is stored as one JSON array of sessions and
//! rewritten on every save. Load and save failures degrade with a warning
//! instead of propagating: a missing or unreadable file loads as an empty
//! collection, and a failed write leaves the previous file contents behind.

use echo_application::ports::history_store::HistoryStore;
use echo_domain::ChatSession;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Failures reading or writing the history file.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// History store backed by a single JSON file.
pub struct JsonFileHistoryStore {
    path: PathBuf,
}

impl JsonFileHistoryStore {
    /// Create a store over the given file path. The file and its parent
    /// directories are created lazily on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default history location: `<data_dir>/echo-chat/chat_history.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("echo-chat").join("chat_history.json"))
    }

    /// Path of the history file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<ChatSession>, HistoryError> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write(&self, sessions: &[ChatSession]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(sessions)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl HistoryStore for JsonFileHistoryStore {
    fn load(&self) -> Vec<ChatSession> {
        if !self.path.exists() {
            return Vec::new();
        }
        match self.read() {
            Ok(sessions) => sessions,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Could not read chat history; starting empty"
                );
                Vec::new()
            }
        }
    }

    fn save(&self, sessions: &[ChatSession]) {
        if let Err(e) = self.write(sessions) {
            warn!(
                path = %self.path.display(),
                error = %e,
                "Could not write chat history"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use echo_application::ports::assistant_gateway::AssistantGateway;
    use echo_application::store::ChatStore;
    use std::sync::Arc;

    struct CannedGateway;

    #[async_trait]
    impl AssistantGateway for CannedGateway {
        async fn ask(&self, _content: &str) -> String {
            "canned reply".to_string()
        }
    }

    #[test]
    fn load_missing_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileHistoryStore::new(dir.path().join("none.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileHistoryStore::new(dir.path().join("history.json"));

        let mut session = ChatSession::new();
        session.push_user("hello");
        session.push_assistant("hi there");
        let sessions = vec![session];

        store.save(&sessions);
        assert_eq!(store.load(), sessions);
    }

    #[test]
    fn corrupt_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "{not json").unwrap();

        let store = JsonFileHistoryStore::new(&path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("history.json");

        let store = JsonFileHistoryStore::new(&path);
        store.save(&[ChatSession::new()]);

        assert!(path.exists());
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn stored_layout_uses_camel_case_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let store = JsonFileHistoryStore::new(&path);

        let mut session = ChatSession::new();
        session.push_user("hello");
        store.save(&[session]);

        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value[0].get("lastMessage").is_some());
        assert!(value[0].get("timestamp").is_some());
        assert_eq!(value[0]["messages"][0]["role"], "user");
    }

    #[tokio::test]
    async fn reloaded_collection_mirrors_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let history = Arc::new(JsonFileHistoryStore::new(dir.path().join("history.json")));

        let mut store = ChatStore::new(Arc::new(CannedGateway), history.clone());
        store.create_session();
        store.send_message("Hello there, how are you doing today friend").await;
        store.create_session();

        // A fresh load from the same file deep-equals the in-memory state
        assert_eq!(history.load(), store.sessions());
    }
}
