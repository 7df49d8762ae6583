use crate::domain::error::err;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

pub const INTERNAL_API_KEY_HEADER: &str = "X-Internal-Api-Key";

/// Guards writes; only the lending backend holding the internal key may save
/// borrower affordability.
pub async fn require_internal_api_key(
    State(expected): State<String>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(INTERNAL_API_KEY_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");

    if provided.is_empty() || provided != expected {
        tracing::warn!("rejected {} {} without a valid internal key", request.method(), request.uri().path());
        return (
            StatusCode::UNAUTHORIZED,
            Json(err("UNAUTHORIZED", "missing or invalid internal api key")),
        )
            .into_response();
    }

    next.run(request).await
}
