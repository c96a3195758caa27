use axum::extract::{Extension, State};
use axum::routing::post;
use axum::{Json, Router};

use portal_core::ServiceError;

use crate::model::{LoginRequest, LoginResponse, Session};
use crate::api::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
}

/// POST /access/login — credentials in, session token out.
///
/// All credential failures share one uniform 401 body.
async fn login(
    State(svc): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ServiceError> {
    let session = svc
        .login(&body.email, &body.password)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(LoginResponse {
        token: session.token,
        email: session.user.email,
    }))
}

/// POST /access/logout — remove the presented session.
async fn logout(
    State(svc): State<AppState>,
    Extension(session): Extension<Session>,
) -> axum::http::StatusCode {
    svc.logout(&session.token);
    axum::http::StatusCode::NO_CONTENT
}
