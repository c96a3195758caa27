//! Access module — directory-backed login + per-user bot authorization.
//!
//! # Resources
//!
//! - **UserRecord** — directory row: email, password, comma-separated allow-list
//! - **BotRecord** — directory row: bot id, display name, target URL
//! - **Session** — in-memory login record, created on login, removed on
//!   logout or expiry
//!
//! Both directories live in a remote spreadsheet and are re-fetched on every
//! use; nothing is persisted locally. Passwords in the Users sheet are stored
//! and compared in plaintext — a known gap inherited from the directory
//! format, not a recommendation.
//!
//! # Usage
//!
//! ```ignore
//! use portal_access::{AccessModule, service::AccessConfig};
//!
//! let module = AccessModule::new(source, AccessConfig::default());
//! let router = module.routes(); // Mount under /access
//! ```

pub mod api;
pub mod model;
pub mod service;

use std::sync::Arc;

use axum::Router;

use portal_core::Module;
use portal_sheets::SheetSource;

use crate::service::{AccessConfig, AccessService};

/// Access module implementing the Module trait.
///
/// Holds the AccessService and provides HTTP routes for login, logout,
/// session info, and authorized bot listing.
pub struct AccessModule {
    service: Arc<AccessService>,
}

impl AccessModule {
    /// Create a new AccessModule backed by the given sheet source.
    pub fn new(source: Arc<dyn SheetSource>, config: AccessConfig) -> Self {
        let service = AccessService::new(source, config);
        Self { service }
    }

    /// Get a reference to the underlying AccessService.
    pub fn service(&self) -> &Arc<AccessService> {
        &self.service
    }
}

impl Module for AccessModule {
    fn name(&self) -> &str {
        "access"
    }

    fn routes(&self) -> Router {
        api::build_router(self.service.clone())
    }
}
