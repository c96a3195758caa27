use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{Duration, Utc};

use portal_core::new_id;

use crate::model::{Session, UserRecord};
use crate::service::{AccessError, AccessService};

/// In-memory session store, keyed by opaque token.
///
/// Sessions are process-local: a restart logs everyone out. Expired
/// entries are removed lazily, when their token is next presented.
pub struct SessionStore {
    inner: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    fn insert(&self, session: Session) {
        self.inner
            .write()
            .expect("session lock poisoned")
            .insert(session.token.clone(), session);
    }

    fn get(&self, token: &str) -> Option<Session> {
        {
            let sessions = self.inner.read().expect("session lock poisoned");
            match sessions.get(token) {
                Some(s) if s.is_expired(Utc::now()) => {} // fall through to teardown
                Some(s) => return Some(s.clone()),
                None => return None,
            }
        }
        // Lazy teardown of the expired entry.
        self.inner
            .write()
            .expect("session lock poisoned")
            .remove(token);
        None
    }

    fn remove(&self, token: &str) -> bool {
        self.inner
            .write()
            .expect("session lock poisoned")
            .remove(token)
            .is_some()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccessService {
    /// Open a session for an authenticated user. Mints the token and
    /// records issue/expiry times.
    pub(crate) fn create_session(&self, user: UserRecord) -> Session {
        let now = Utc::now();
        let session = Session {
            token: new_id(),
            user,
            issued_at: now,
            expires_at: now + Duration::seconds(self.config.session_ttl_secs),
        };
        self.sessions.insert(session.clone());
        session
    }

    /// Resolve a presented token to its live session.
    pub fn session(&self, token: &str) -> Result<Session, AccessError> {
        self.sessions.get(token).ok_or(AccessError::Session)
    }

    /// Explicit teardown: remove the session so the token stops resolving.
    /// Logging out an already-dead token is not an error.
    pub fn logout(&self, token: &str) {
        self.sessions.remove(token);
    }
}
