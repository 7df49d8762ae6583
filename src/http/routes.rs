use crate::http::handlers::{affordability, ops, risk};
use crate::http::middleware::admin_auth::require_internal_api_key;
use crate::AppState;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use axum::Router;

pub fn router(state: AppState, internal_api_key: String) -> Router {
    Router::new()
        .route("/health", get(ops::health))
        .route("/ops/readiness", get(ops::readiness))
        .route("/ops/liveness", get(ops::liveness))
        .route("/affordability/preview", post(affordability::preview))
        .route(
            "/borrowers/:borrower_id/affordability",
            get(affordability::get_affordability).merge(
                put(affordability::upsert_affordability)
                    .route_layer(from_fn_with_state(internal_api_key, require_internal_api_key)),
            ),
        )
        .route(
            "/borrowers/:borrower_id/risk-report",
            get(risk::get_risk_report),
        )
        .with_state(state)
}
