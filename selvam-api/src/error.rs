use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use selvam_core::CoreError;
use serde_json::json;

/// Handler failure. Every variant renders as `{"success": false, "message": ...}`.
#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    /// Carries the message shown to the visitor; details are logged where the error is raised.
    DispatchError(String),
    PayloadTooLarge(String),
    Anyhow(anyhow::Error),
}

impl AppError {
    /// Keeps validation messages, replaces anything else with `public_message`.
    pub fn from_core(err: CoreError, public_message: &str) -> Self {
        match err {
            CoreError::ValidationError(msg) => AppError::ValidationError(msg),
            CoreError::DispatchError(detail) | CoreError::InternalError(detail) => {
                tracing::error!("{}: {}", public_message, detail);
                AppError::DispatchError(public_message.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::DispatchError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            },
        };

        let body = Json(json!({
            "success": false,
            "message": message,
        }));

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Anyhow(err)
    }
}

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        // Bodies over the configured limit surface as a buffering rejection
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self::PayloadTooLarge("Request body too large".to_string());
        }
        Self::ValidationError("Invalid request body".to_string())
    }
}
