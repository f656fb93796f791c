use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::domain::{
    session::{listener::RiskListener, state::SelectionState},
    shared::errors::DomainError,
};

pub type SharedSession = Arc<Mutex<SelectionState>>;

/// In-memory dashboard sessions, one per browser tab.
///
/// Ids are UUID v7, so key order is creation order and the oldest session is
/// evicted first once `capacity` is reached.
pub struct SessionRegistry {
    sessions: RwLock<BTreeMap<Uuid, SharedSession>>,
    listeners: Vec<Arc<dyn RiskListener>>,
    capacity: usize,
}

impl SessionRegistry {
    pub fn new(capacity: usize) -> Self {
        Self {
            sessions: RwLock::new(BTreeMap::new()),
            listeners: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Listener attached to every session created afterwards.
    pub fn with_listener(mut self, listener: Arc<dyn RiskListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    pub async fn create(&self) -> (Uuid, SharedSession) {
        let id = Uuid::now_v7();
        let mut state = SelectionState::new(id);
        for listener in &self.listeners {
            state.subscribe(listener.clone());
        }
        let session = Arc::new(Mutex::new(state));

        let mut sessions = self.sessions.write().await;
        while sessions.len() >= self.capacity {
            if let Some((evicted, _)) = sessions.pop_first() {
                tracing::debug!(session = %evicted, "evicting oldest session");
            }
        }
        sessions.insert(id, session.clone());
        tracing::info!(session = %id, active = sessions.len(), "session created");
        (id, session)
    }

    pub async fn get(&self, id: Uuid) -> Result<SharedSession, DomainError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("Session not found: {}", id)))
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
