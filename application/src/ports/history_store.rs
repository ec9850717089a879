//! Port for durable chat history.
//!
//! The session collection is mirrored wholesale: `save` replaces the stored
//! value after every mutation, `load` reads it back once at startup.
//!
//! Both methods are intentionally non-fallible: implementations log
//! failures and degrade (empty collection on load, dropped write on save)
//! rather than disrupt the chat flow — the in-memory collection stays
//! authoritative for the life of the process.

use echo_domain::ChatSession;

/// Durable mirror of the session collection.
pub trait HistoryStore: Send + Sync {
    /// Read the stored collection; empty if nothing usable is stored.
    fn load(&self) -> Vec<ChatSession>;

    /// Replace the stored collection with the given one.
    fn save(&self, sessions: &[ChatSession]);
}

/// No-op implementation for tests and ephemeral runs.
pub struct NoHistoryStore;

impl HistoryStore for NoHistoryStore {
    fn load(&self) -> Vec<ChatSession> {
        Vec::new()
    }

    fn save(&self, _sessions: &[ChatSession]) {}
}
