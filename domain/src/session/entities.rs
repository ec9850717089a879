//! Session domain entities

use crate::util::truncate_str;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title given to a session before its first message arrives.
pub const NEW_SESSION_TITLE: &str = "New Chat";

/// Number of leading words used when deriving a title.
const TITLE_WORDS: usize = 6;

/// Titles longer than this are cut to 47 bytes plus an ellipsis.
const TITLE_MAX_LEN: usize = 50;

/// Byte length of the assistant reply preview.
const PREVIEW_LEN: usize = 100;

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A message in a conversation (Entity)
///
/// Immutable once created. Ids are random UUIDs, so two messages minted in
/// the same instant never collide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub role: Role,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content, Role::User)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(content, Role::Assistant)
    }

    fn new(content: impl Into<String>, role: Role) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            role,
            timestamp: Utc::now(),
        }
    }
}

/// A chat session (Entity)
///
/// Holds the ordered conversation history plus denormalized display fields:
/// `title` is derived once from the first user message, `last_message` is a
/// preview of the newest message, `updated_at` tracks the latest append.
///
/// Serialized names follow the persisted history layout: camelCase, with
/// `updated_at` stored under the `timestamp` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: String,
    pub title: String,
    pub messages: Vec<Message>,
    pub last_message: String,
    #[serde(rename = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: NEW_SESSION_TITLE.to_string(),
            messages: Vec::new(),
            last_message: String::new(),
            updated_at: Utc::now(),
        }
    }

    /// Append a user message, deriving the title if this is the first one.
    ///
    /// The preview becomes the raw content and `updated_at` moves to the
    /// new message's timestamp.
    pub fn push_user(&mut self, content: &str) {
        if self.messages.is_empty() {
            self.title = derive_title(content);
        }
        self.last_message = content.to_string();
        let message = Message::user(content);
        self.updated_at = message.timestamp;
        self.messages.push(message);
    }

    /// Append an assistant reply and refresh the preview.
    ///
    /// The preview keeps a trailing `...` even when the reply fits within
    /// the preview length.
    pub fn push_assistant(&mut self, reply: &str) {
        self.last_message = format!("{}...", truncate_str(reply, PREVIEW_LEN));
        let message = Message::assistant(reply);
        self.updated_at = message.timestamp;
        self.messages.push(message);
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive a session title from the first user message: the first six
/// whitespace-separated words joined by single spaces, cut to 47 bytes plus
/// `...` when the joined form exceeds 50 bytes.
pub fn derive_title(content: &str) -> String {
    let words = content
        .split_whitespace()
        .take(TITLE_WORDS)
        .collect::<Vec<_>>()
        .join(" ");
    if words.len() > TITLE_MAX_LEN {
        format!("{}...", truncate_str(&words, TITLE_MAX_LEN - 3))
    } else {
        words
    }
}
