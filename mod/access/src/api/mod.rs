mod bots;
mod login;
mod me;
mod middleware;

use std::sync::Arc;

use axum::Router;

use crate::service::AccessService;

/// Shared application state.
pub type AppState = Arc<AccessService>;

/// Build the complete access API router.
///
/// All routes are relative — the caller nests them under `/access`.
pub fn build_router(svc: Arc<AccessService>) -> Router {
    let api = Router::new()
        .merge(login::routes())
        .merge(me::routes())
        .merge(bots::routes());

    Router::new()
        .nest("/access", api)
        .layer(axum::middleware::from_fn_with_state(
            svc.clone(),
            middleware::session_middleware,
        ))
        .with_state(svc)
}
