use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use selvam_core::enquiry::EnquiryRequest;
use serde::Serialize;

use crate::{error::AppError, state::AppState};

const SEND_FAILED: &str = "Failed to send enquiry. Please try again.";

#[derive(Debug, Serialize)]
struct EnquiryResponse {
    success: bool,
    message: &'static str,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/send-enquiry", post(send_enquiry))
}

/// POST /send-enquiry
async fn send_enquiry(
    State(state): State<AppState>,
    payload: Result<Json<EnquiryRequest>, JsonRejection>,
) -> Result<Json<EnquiryResponse>, AppError> {
    let Json(request) = payload?;

    state
        .enquiries
        .submit(request)
        .await
        .map_err(|e| AppError::from_core(e, SEND_FAILED))?;

    Ok(Json(EnquiryResponse {
        success: true,
        message: "Enquiry sent successfully",
    }))
}
