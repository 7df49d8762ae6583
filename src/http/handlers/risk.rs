use crate::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

pub async fn get_risk_report(
    State(state): State<AppState>,
    Path(borrower_id): Path<Uuid>,
) -> impl IntoResponse {
    match state.risk_service.risk_report(borrower_id).await {
        Ok(report) => (axum::http::StatusCode::OK, Json(report)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}
