use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::UserRecord;

/// A login session, held in memory and keyed by its opaque token.
///
/// Created on successful login, removed on logout; entries past
/// `expires_at` are torn down lazily at lookup.
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque bearer token (UUIDv4, no dashes).
    pub token: String,

    /// The authenticated directory record, as matched at login time.
    pub user: UserRecord,

    /// When the session was created.
    pub issued_at: DateTime<Utc>,

    /// When the session stops resolving.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Request body for login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response body after a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub email: String,
}

/// Request body for resolving a bot link by display name.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenBotRequest {
    pub name: String,
}
