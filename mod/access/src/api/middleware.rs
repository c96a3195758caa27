use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, middleware::Next};
use serde_json::json;

use crate::api::AppState;

/// Paths that don't require a session.
const PUBLIC_PATHS: &[&str] = &["/access/login"];

/// Session authentication middleware.
///
/// Checks for a Bearer token in the Authorization header and resolves it
/// against the session store. If live, the Session is stored as an
/// Extension for handlers to access via `Extension<Session>`.
pub async fn session_middleware(
    State(svc): State<AppState>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();

    if is_public_path(&path) {
        return next.run(req).await;
    }

    let token = match extract_bearer(req.headers()) {
        Some(t) => t.to_string(),
        None => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": "missing authorization header"})),
            )
                .into_response();
        }
    };

    match svc.session(&token) {
        Ok(session) => {
            req.extensions_mut().insert(session);
            next.run(req).await
        }
        Err(e) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

/// Extract the Bearer token from Authorization header.
fn extract_bearer(headers: &axum::http::HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

/// Check if a path is public (no session required).
fn is_public_path(path: &str) -> bool {
    for prefix in PUBLIC_PATHS {
        if path.starts_with(prefix) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_paths() {
        assert!(is_public_path("/access/login"));
        assert!(!is_public_path("/access/bots"));
        assert!(!is_public_path("/access/me"));
        assert!(!is_public_path("/access/logout"));
    }

    #[test]
    fn test_extract_bearer() {
        let mut headers = axum::http::HeaderMap::new();
        headers.insert("authorization", "Bearer abc123".parse().unwrap());
        assert_eq!(extract_bearer(&headers), Some("abc123"));

        let mut headers = axum::http::HeaderMap::new();
        headers.insert("authorization", "Basic abc123".parse().unwrap());
        assert_eq!(extract_bearer(&headers), None);

        assert_eq!(extract_bearer(&axum::http::HeaderMap::new()), None);
    }
}
