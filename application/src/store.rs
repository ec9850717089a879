//! The chat store — authoritative in-memory session state.

use crate::ports::assistant_gateway::AssistantGateway;
use crate::ports::history_store::HistoryStore;
use echo_domain::{ChatSession, Message};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Owner of every chat session and the active selection.
///
/// All mutation goes through the operations here; each one writes the
/// updated collection back to the [`HistoryStore`] before returning, so the
/// stored history never lags the in-memory state by more than the mutation
/// in flight. The pending set is keyed by session id — a reply outstanding
/// in one session never marks another as busy.
///
/// The store is constructed once at startup and handed to the presentation
/// layer, which reads snapshots and invokes operations but never touches
/// the collection directly.
pub struct ChatStore {
    sessions: Vec<ChatSession>,
    active_id: Option<String>,
    pending: HashSet<String>,
    gateway: Arc<dyn AssistantGateway>,
    history: Arc<dyn HistoryStore>,
}

impl ChatStore {
    /// Create a store over the previously persisted collection.
    pub fn new(gateway: Arc<dyn AssistantGateway>, history: Arc<dyn HistoryStore>) -> Self {
        let sessions = history.load();
        debug!(count = sessions.len(), "Loaded chat history");
        Self {
            sessions,
            active_id: None,
            pending: HashSet::new(),
            gateway,
            history,
        }
    }

    /// Insert a new empty session at the front of the collection and make
    /// it active. Returns the new session's id.
    pub fn create_session(&mut self) -> String {
        let session = ChatSession::new();
        let id = session.id.clone();
        self.sessions.insert(0, session);
        self.active_id = Some(id.clone());
        self.history.save(&self.sessions);
        id
    }

    /// Make the given session active.
    ///
    /// The id is not validated and the selection is not persisted; an
    /// unknown id simply yields no current session on subsequent reads.
    pub fn select_session(&mut self, session_id: impl Into<String>) {
        self.active_id = Some(session_id.into());
    }

    /// Send a message within the active session and await the reply.
    ///
    /// No-op when no session is active — creating one first is the
    /// caller's responsibility. The user message is persisted before the
    /// remote call so it survives a failed exchange; the reply (or the
    /// gateway's fallback text) is appended afterwards to the session
    /// looked up again by id, since the selection may have moved while
    /// the call was suspended.
    pub async fn send_message(&mut self, content: &str) {
        let Some(session_id) = self.active_id.clone() else {
            debug!("send_message without an active session; ignoring");
            return;
        };
        let Some(session) = self.session_mut(&session_id) else {
            warn!(%session_id, "Active id does not resolve to a session; dropping message");
            return;
        };

        session.push_user(content);
        self.history.save(&self.sessions);

        self.pending.insert(session_id.clone());
        let reply = self.gateway.ask(content).await;

        if let Some(session) = self.session_mut(&session_id) {
            session.push_assistant(&reply);
            self.history.save(&self.sessions);
        }
        self.pending.remove(&session_id);
    }

    /// The active session, if the active id resolves.
    pub fn current_session(&self) -> Option<&ChatSession> {
        let id = self.active_id.as_deref()?;
        self.sessions.iter().find(|s| s.id == id)
    }

    /// The active session's messages, or an empty slice.
    pub fn current_messages(&self) -> &[Message] {
        self.current_session()
            .map(|s| s.messages.as_slice())
            .unwrap_or(&[])
    }

    /// All sessions, newest-created-first.
    pub fn sessions(&self) -> &[ChatSession] {
        &self.sessions
    }

    /// Id of the active session, if any.
    pub fn active_session_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// Whether a reply is outstanding for the given session.
    pub fn is_responding(&self, session_id: &str) -> bool {
        self.pending.contains(session_id)
    }

    /// Whether a reply is outstanding for the active session.
    pub fn is_current_responding(&self) -> bool {
        self.active_id
            .as_deref()
            .is_some_and(|id| self.pending.contains(id))
    }

    fn session_mut(&mut self, session_id: &str) -> Option<&mut ChatSession> {
        self.sessions.iter_mut().find(|s| s.id == session_id)
    }
}
