// src/services/session_manager.rs
use std::{
    collections::HashMap,
    fmt::Debug,
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::message::ChatMessage;

#[derive(Clone, Debug)]
pub struct Session {
    pub id: String,
    pub transcript: Vec<ChatMessage>,
    pub last_active: Instant,
}

impl Session {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            transcript: Vec::new(),
            last_active: Instant::now(),
        }
    }
}

/// In-memory transcript store keyed by session id. Each session belongs
/// to one browser; transcripts never outlive the process.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl SessionManager {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    // Create a fresh session and return its id.
    pub async fn create_session(&self) -> String {
        let id = Uuid::new_v4().to_string();
        let session = Session::new(id.clone());

        let mut guard = self.inner.write().await;
        guard.insert(id.clone(), session);
        id
    }

    // Ensure there's a session with this id.
    pub async fn ensure_session(&self, id: &str) -> String {
        {
            let guard = self.inner.read().await;
            if guard.contains_key(id) {
                return id.to_string();
            }
        }
        let mut guard = self.inner.write().await;
        guard.insert(id.to_string(), Session::new(id.to_string()));
        id.to_string()
    }

    // Append a turn to a session's transcript and touch last_active.
    pub async fn append_message(&self, session_id: &str, message: ChatMessage) -> usize {
        let mut guard = self.inner.write().await;
        let entry = guard
            .entry(session_id.to_string())
            .or_insert_with(|| Session::new(session_id.to_string()));
        entry.transcript.push(message);
        entry.last_active = Instant::now();
        entry.transcript.len()
    }

    /// Get a copy of the session's transcript. Empty for unknown sessions.
    pub async fn get_transcript(&self, session_id: &str) -> Vec<ChatMessage> {
        let guard = self.inner.read().await;
        guard
            .get(session_id)
            .map(|s| s.transcript.clone())
            .unwrap_or_default()
    }

    /// Discard a session's transcript, keeping the session alive.
    /// Runs on every landing-page render.
    pub async fn reset_transcript(&self, session_id: &str) {
        let mut guard = self.inner.write().await;
        let entry = guard
            .entry(session_id.to_string())
            .or_insert_with(|| Session::new(session_id.to_string()));
        entry.transcript.clear();
        entry.last_active = Instant::now();
    }

    /// Remove a session by id
    pub async fn remove_session(&self, session_id: &str) -> bool {
        let mut guard = self.inner.write().await;
        guard.remove(session_id).is_some()
    }

    /// Remove sessions idle longer than ttl. Returns number removed.
    pub async fn purge_expired(&self) -> usize {
        let mut guard = self.inner.write().await;
        let now = Instant::now();
        let before = guard.len();
        guard.retain(|_, s| now.duration_since(s.last_active) < self.ttl);
        before - guard.len()
    }

    /// Number of sessions
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn basic_transcript_flow() {
        let mgr = SessionManager::new(Duration::from_secs(60));
        let sid = mgr.create_session().await;
        assert!(!sid.is_empty());
        let len = mgr.append_message(&sid, ChatMessage::user("hello")).await;
        assert_eq!(len, 1);
        let transcript = mgr.get_transcript(&sid).await;
        assert_eq!(transcript.len(), 1);
        assert!(mgr.remove_session(&sid).await);
    }
}
