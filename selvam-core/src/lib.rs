pub mod enquiry;
pub mod mailer;
pub mod quotation;
pub mod repository;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Dispatch failed: {0}")]
    DispatchError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Business name used in mail subjects until configuration names another.
pub const SITE_NAME: &str = "Shri Selvam Tiles";
