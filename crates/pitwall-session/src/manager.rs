//! SessionManager: concurrent access to many tuning sessions via DashMap.

use std::sync::Arc;

use dashmap::DashMap;
use pitwall_core::config::NarrowingConfig;
use pitwall_core::errors::SessionError;
use pitwall_core::{FeedbackVector, PitwallResult, SetupVector};
use tracing::info;

use crate::narrower::{AttemptOutcome, TuningSession};
use crate::stats::SessionStats;

/// Thread-safe registry of independent tuning sessions, keyed by ID.
///
/// Sessions never share a pool or history. Operations on one ID only lock
/// that ID's shard entry.
pub struct SessionManager {
    sessions: Arc<DashMap<String, TuningSession>>,
    config: NarrowingConfig,
}

impl SessionManager {
    /// Manager whose sessions use `config`.
    pub fn new(config: NarrowingConfig) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            config,
        }
    }

    /// Create a session under a fresh UUID and return the ID.
    pub fn create_session(&self) -> PitwallResult<String> {
        self.create_session_with_id(uuid::Uuid::new_v4().to_string())
    }

    /// Create (or replace) the session stored under `session_id`.
    pub fn create_session_with_id(&self, session_id: String) -> PitwallResult<String> {
        let session = TuningSession::new(self.config.clone())?;
        Ok(self.insert(session_id, session))
    }

    /// Create a session with a fixed RNG seed.
    pub fn create_seeded_session(&self, session_id: String, seed: u64) -> PitwallResult<String> {
        let session = TuningSession::with_seed(self.config.clone(), seed)?;
        Ok(self.insert(session_id, session))
    }

    fn insert(&self, session_id: String, session: TuningSession) -> String {
        self.sessions.insert(session_id.clone(), session);
        info!(session_id = %session_id, "session created");
        session_id
    }

    pub fn record_attempt(
        &self,
        session_id: &str,
        setup: SetupVector,
        feedback: FeedbackVector,
    ) -> PitwallResult<AttemptOutcome> {
        self.with_session_mut(session_id, |s| s.record_attempt(setup, feedback))?
    }

    pub fn best_recommendations(
        &self,
        session_id: &str,
        n: usize,
    ) -> PitwallResult<Vec<SetupVector>> {
        self.with_session(session_id, |s| s.best_recommendations(n))
    }

    pub fn stats(&self, session_id: &str) -> PitwallResult<SessionStats> {
        self.with_session(session_id, TuningSession::stats)
    }

    pub fn estimate_attempts_to_optimal(&self, session_id: &str) -> PitwallResult<u32> {
        self.with_session(session_id, TuningSession::estimate_attempts_to_optimal)
    }

    pub fn reset(&self, session_id: &str) -> PitwallResult<()> {
        self.with_session_mut(session_id, TuningSession::reset)?
    }

    /// Run `f` against a shared borrow of the session.
    pub fn with_session<T>(
        &self,
        session_id: &str,
        f: impl FnOnce(&TuningSession) -> T,
    ) -> PitwallResult<T> {
        let entry = self
            .sessions
            .get(session_id)
            .ok_or_else(|| not_found(session_id))?;
        Ok(f(entry.value()))
    }

    /// Run `f` against an exclusive borrow of the session.
    pub fn with_session_mut<T>(
        &self,
        session_id: &str,
        f: impl FnOnce(&mut TuningSession) -> T,
    ) -> PitwallResult<T> {
        let mut entry = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| not_found(session_id))?;
        Ok(f(entry.value_mut()))
    }

    /// Remove a session. Returns false if it did not exist.
    pub fn remove_session(&self, session_id: &str) -> bool {
        self.sessions.remove(session_id).is_some()
    }

    pub fn contains(&self, session_id: &str) -> bool {
        self.sessions.contains_key(session_id)
    }

    /// Number of active sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn session_ids(&self) -> Vec<String> {
        self.sessions.iter().map(|r| r.key().clone()).collect()
    }

    pub fn config(&self) -> &NarrowingConfig {
        &self.config
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(NarrowingConfig::default())
    }
}

fn not_found(session_id: &str) -> SessionError {
    SessionError::NotFound {
        id: session_id.to_string(),
    }
}
