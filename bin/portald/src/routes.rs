//! Route registration — collects all module routes + system endpoints.

use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;

use tracing::info;

/// Build the complete router with all routes.
///
/// Module routers arrive already nested under their own prefix and with
/// their state applied, so they are merged, not re-nested.
pub fn build_router(module_routes: Vec<(&str, Router)>) -> Router {
    let mut app = Router::new()
        .route("/", get(login_page))
        .route("/portal", get(portal_page))
        .route("/health", get(health))
        .route("/version", get(version));

    for (name, router) in module_routes {
        info!("mounting module '{}'", name);
        app = app.merge(router);
    }

    app
}

async fn login_page() -> impl IntoResponse {
    Html(include_str!("web/login.html"))
}

async fn portal_page() -> impl IntoResponse {
    Html(include_str!("web/portal.html"))
}

async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "ok",
    }))
}

async fn version() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": "portald",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
