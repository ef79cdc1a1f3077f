//! Shared types for the API layer.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::analysis::AnalysisEngine;
use crate::flow::AnalysisFlow;

/// How long an unacknowledged disclaimer session stays retrievable.
const SESSION_TTL_SECS: u64 = 900;

/// Store size that triggers an expiry sweep on insert.
const CLEANUP_THRESHOLD: usize = 256;

// ═══════════════════════════════════════════════════════════
// API context — shared state for the analysis router
// ═══════════════════════════════════════════════════════════

/// Shared context for all API routes.
#[derive(Clone)]
pub struct ApiContext {
    pub engine: Arc<AnalysisEngine>,
    pub sessions: Arc<Mutex<SessionStore>>,
}

impl ApiContext {
    pub fn new(engine: Arc<AnalysisEngine>) -> Self {
        Self {
            engine,
            sessions: Arc::new(Mutex::new(SessionStore::new())),
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Session store — one entry per gated analysis
// ═══════════════════════════════════════════════════════════

/// A stored analysis flow awaiting disclaimer acknowledgment.
#[derive(Debug)]
pub struct FlowSession {
    pub flow: AnalysisFlow,
    created_at: Instant,
}

/// In-memory store of gated analysis sessions.
///
/// Consume-once: `remove` is the only read path, so a response can be
/// rendered at most one time. Abandoned sessions expire after the TTL
/// and are swept when the store grows past a threshold.
pub struct SessionStore {
    sessions: HashMap<Uuid, FlowSession>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
            ttl: Duration::from_secs(SESSION_TTL_SECS),
        }
    }

    #[cfg(test)]
    fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            ttl,
        }
    }

    /// Store a flow and return its id.
    pub fn insert(&mut self, flow: AnalysisFlow) -> Uuid {
        if self.sessions.len() >= CLEANUP_THRESHOLD {
            self.cleanup();
        }

        let id = Uuid::new_v4();
        self.sessions.insert(
            id,
            FlowSession {
                flow,
                created_at: Instant::now(),
            },
        );
        id
    }

    /// Take a session out of the store. Expired sessions count as absent.
    pub fn remove(&mut self, id: &Uuid) -> Option<FlowSession> {
        let session = self.sessions.remove(id)?;
        if session.created_at.elapsed() > self.ttl {
            return None;
        }
        Some(session)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn cleanup(&mut self) {
        let ttl = self.ttl;
        self.sessions
            .retain(|_, session| session.created_at.elapsed() <= ttl);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
