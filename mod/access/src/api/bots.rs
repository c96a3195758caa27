use axum::extract::{Extension, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use portal_core::ServiceError;

use crate::model::{OpenBotRequest, Session};
use crate::api::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bots", get(list_bots))
        .route("/bots/open", post(open_bot))
}

/// GET /access/bots — the session user's authorized subset, re-fetched
/// from the Bots sheet on every call.
async fn list_bots(
    State(svc): State<AppState>,
    Extension(session): Extension<Session>,
) -> Json<serde_json::Value> {
    let items = svc.list_bots(&session.user).await;
    Json(serde_json::json!({
        "total": items.len(),
        "items": items,
    }))
}

/// POST /access/bots/open — resolve a selected display name to its URL.
async fn open_bot(
    State(svc): State<AppState>,
    Extension(session): Extension<Session>,
    Json(body): Json<OpenBotRequest>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let url = svc
        .open_bot(&session.user, &body.name)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({ "url": url })))
}
