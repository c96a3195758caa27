use axum::extract::Extension;
use axum::routing::get;
use axum::{Json, Router};

use crate::model::Session;
use crate::api::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/me", get(me))
}

/// GET /access/me — the session user's email and allow-list.
async fn me(Extension(session): Extension<Session>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "email": session.user.email,
        "allowed_bots": session.user.allowed_ids(),
    }))
}
