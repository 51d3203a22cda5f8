use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use chrono::Utc;
use selvam_core::quotation::QuotationUpload;
use serde::Serialize;

use crate::{error::AppError, state::AppState};

const SAVE_FAILED: &str = "Failed to save quotation PDF.";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveQuotationResponse {
    success: bool,
    file_name: String,
    public_path: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/save-quotation", post(save_quotation))
}

/// POST /save-quotation
async fn save_quotation(
    State(state): State<AppState>,
    payload: Result<Json<QuotationUpload>, JsonRejection>,
) -> Result<Json<SaveQuotationResponse>, AppError> {
    let Json(upload) = payload?;

    let stored = state
        .quotations
        .save(upload, Utc::now())
        .await
        .map_err(|e| AppError::from_core(e, SAVE_FAILED))?;

    Ok(Json(SaveQuotationResponse {
        success: true,
        file_name: stored.file_name,
        public_path: stored.public_path,
    }))
}
