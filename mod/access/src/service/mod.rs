pub mod authn;
pub mod authz;
pub mod directory;
pub mod session;

use std::sync::Arc;

use thiserror::Error;

use portal_sheets::SheetSource;

use crate::service::session::SessionStore;

/// Access service error type.
#[derive(Debug, Error)]
pub enum AccessError {
    /// Bad credentials. One uniform message for unknown email and wrong
    /// password alike — callers must not be able to enumerate accounts.
    #[error("access denied: invalid credentials")]
    Denied,

    /// The session token did not resolve or has expired.
    #[error("invalid or expired session")]
    Session,

    /// The directory itself is malformed (not a user mistake).
    #[error("directory misconfigured: {0}")]
    Config(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("internal: {0}")]
    Internal(String),
}

impl From<AccessError> for portal_core::ServiceError {
    fn from(e: AccessError) -> Self {
        match e {
            AccessError::Denied | AccessError::Session => {
                portal_core::ServiceError::Unauthorized(e.to_string())
            }
            AccessError::Config(m) => portal_core::ServiceError::Validation(m),
            AccessError::NotFound(m) => portal_core::ServiceError::NotFound(m),
            AccessError::Internal(m) => portal_core::ServiceError::Internal(m),
        }
    }
}

/// Configuration for the access service.
#[derive(Debug, Clone)]
pub struct AccessConfig {
    /// Tab name of the users dataset.
    pub users_sheet: String,
    /// Tab name of the bots dataset.
    pub bots_sheet: String,
    /// Session lifetime in seconds (default: 8h).
    pub session_ttl_secs: i64,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            users_sheet: "Users".to_string(),
            bots_sheet: "Bots".to_string(),
            session_ttl_secs: 28800, // 8h
        }
    }
}

/// The Access service. Holds the sheet source, session store, and
/// configuration. Directory data is never cached — every operation that
/// needs a dataset re-fetches it.
pub struct AccessService {
    pub(crate) source: Arc<dyn SheetSource>,
    pub(crate) sessions: SessionStore,
    pub(crate) config: AccessConfig,
}

impl AccessService {
    /// Create a new AccessService.
    pub fn new(source: Arc<dyn SheetSource>, config: AccessConfig) -> Arc<Self> {
        Arc::new(Self {
            source,
            sessions: SessionStore::new(),
            config,
        })
    }
}
