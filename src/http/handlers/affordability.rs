use crate::domain::affordability::AffordabilityInput;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

pub async fn preview(
    State(state): State<AppState>,
    Json(input): Json<AffordabilityInput>,
) -> impl IntoResponse {
    match state.risk_service.preview_affordability(&input) {
        Ok(view) => (axum::http::StatusCode::OK, Json(view)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}

pub async fn get_affordability(
    State(state): State<AppState>,
    Path(borrower_id): Path<Uuid>,
) -> impl IntoResponse {
    match state.risk_service.affordability(borrower_id).await {
        Ok(record) => (axum::http::StatusCode::OK, Json(record)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}

pub async fn upsert_affordability(
    State(state): State<AppState>,
    Path(borrower_id): Path<Uuid>,
    Json(input): Json<AffordabilityInput>,
) -> impl IntoResponse {
    match state.risk_service.save_affordability(borrower_id, input).await {
        Ok(record) => (axum::http::StatusCode::OK, Json(record)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}
