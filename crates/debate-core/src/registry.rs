//! Session registry
//!
//! Hosts that serve more than one player (or more than one request per
//! player) keep sessions here and retrieve them by id, so state carries over
//! between calls instead of being rebuilt every time.

use std::collections::HashMap;

use crate::classifier::Classifier;
use crate::error::DebateError;
use crate::random::RandomSource;
use crate::session::{Session, SessionId, StatusSnapshot, SubmitResult};

/// In-memory table of live sessions sharing one classifier
#[derive(Debug)]
pub struct SessionRegistry {
    classifier: Classifier,
    sessions: HashMap<SessionId, Session>,
}

impl SessionRegistry {
    pub fn new(classifier: Classifier) -> Self {
        Self {
            classifier,
            sessions: HashMap::new(),
        }
    }

    /// Start a session with OS-seeded randomness
    pub fn create_session(&mut self) -> SessionId {
        self.insert(Session::new(self.classifier.clone()))
    }

    /// Start a session with an injected random source
    pub fn create_session_with(&mut self, random: Box<dyn RandomSource>) -> SessionId {
        self.insert(Session::with_random(self.classifier.clone(), random))
    }

    fn insert(&mut self, session: Session) -> SessionId {
        let id = session.id;
        self.sessions.insert(id, session);
        metrics::gauge!("debate_active_sessions").set(self.sessions.len() as f64);
        tracing::info!(session = %id, "Session started");
        id
    }

    pub fn get(&self, id: SessionId) -> Result<&Session, DebateError> {
        self.sessions
            .get(&id)
            .ok_or(DebateError::SessionNotFound(id))
    }

    pub fn get_mut(&mut self, id: SessionId) -> Result<&mut Session, DebateError> {
        self.sessions
            .get_mut(&id)
            .ok_or(DebateError::SessionNotFound(id))
    }

    pub fn submit(&mut self, id: SessionId, text: &str) -> Result<SubmitResult, DebateError> {
        self.get_mut(id)?.submit(text)
    }

    pub fn status(&self, id: SessionId) -> Result<StatusSnapshot, DebateError> {
        Ok(self.get(id)?.status())
    }

    pub fn hint(&mut self, id: SessionId) -> Result<String, DebateError> {
        Ok(self.get_mut(id)?.hint())
    }

    /// Remove a session, returning its final state
    pub fn end_session(&mut self, id: SessionId) -> Result<Session, DebateError> {
        let session = self
            .sessions
            .remove(&id)
            .ok_or(DebateError::SessionNotFound(id))?;
        metrics::gauge!("debate_active_sessions").set(self.sessions.len() as f64);
        tracing::info!(
            session = %id,
            attempts = session.state().attempts(),
            score = session.state().credibility_score(),
            "Session ended"
        );
        Ok(session)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evidence::EvidenceTable;
    use crate::random::ScriptedRandom;
    use std::sync::Arc;
    use uuid::Uuid;

    fn registry() -> SessionRegistry {
        let table = Arc::new(EvidenceTable::builtin().unwrap());
        SessionRegistry::new(Classifier::new(table))
    }

    #[test]
    fn test_state_persists_between_calls() {
        let mut registry = registry();
        let id = registry.create_session_with(Box::new(ScriptedRandom::first()));

        registry.submit(id, "NASA has satellite photos").unwrap();
        let result = registry.submit(id, "more satellite images").unwrap();

        assert_eq!(result.scored().unwrap().score, 7);
        assert_eq!(registry.status(id).unwrap().credibility_score, 22);
        assert_eq!(registry.status(id).unwrap().attempts, 2);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut registry = registry();
        let a = registry.create_session();
        let b = registry.create_session();
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);

        registry.submit(a, "gravity").unwrap();
        assert_eq!(registry.status(a).unwrap().credibility_score, 20);
        assert_eq!(registry.status(b).unwrap().credibility_score, 0);

        let result = registry.submit(b, "gravity").unwrap();
        assert_eq!(result.scored().unwrap().score, 20);
    }

    #[test]
    fn test_unknown_session() {
        let mut registry = registry();
        let missing = Uuid::new_v4();
        assert!(matches!(
            registry.submit(missing, "gravity"),
            Err(DebateError::SessionNotFound(id)) if id == missing
        ));
        assert!(registry.status(missing).is_err());
        assert!(registry.hint(missing).is_err());
    }

    #[test]
    fn test_end_session() {
        let mut registry = registry();
        let id = registry.create_session();
        registry.submit(id, "horizon").unwrap();

        let session = registry.end_session(id).unwrap();
        assert_eq!(session.state().credibility_score(), 25);
        assert!(registry.is_empty());
        assert!(matches!(
            registry.end_session(id),
            Err(DebateError::SessionNotFound(_))
        ));
    }
}
