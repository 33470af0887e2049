//! Static API key check: when `API_KEY` is configured,
//! every non-health route requires a matching `X-API-Key` header.

use crate::state::AppState;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

pub async fn require_api_key(State(state): State<Arc<AppState>>, request: Request, next: Next) -> Response {
    let Some(expected) = &state.api_key else {
        return next.run(request).await;
    };

    let provided = request.headers().get("X-API-Key").and_then(|h| h.to_str().ok());
    match provided {
        Some(key) if key == expected => next.run(request).await,
        _ => (
            StatusCode::UNAUTHORIZED,
            axum::Json(serde_json::json!({ "error": "unauthorized", "message": "missing or invalid X-API-Key" })),
        )
            .into_response(),
    }
}
