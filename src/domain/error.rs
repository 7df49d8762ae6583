use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

pub type ServiceError = (axum::http::StatusCode, ErrorEnvelope);

pub fn err(code: &str, message: &str) -> ErrorEnvelope {
    ErrorEnvelope {
        error: ErrorPayload {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
        },
    }
}

pub fn err_with_details(code: &str, message: &str, details: &str) -> ErrorEnvelope {
    let mut envelope = err(code, message);
    envelope.error.details = Some(details.to_string());
    envelope
}

pub fn internal(e: anyhow::Error) -> ServiceError {
    tracing::error!("internal error: {:#}", e);
    (
        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        err("INTERNAL_ERROR", &e.to_string()),
    )
}
