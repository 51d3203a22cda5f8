use std::path::Path;
use std::sync::Arc;

use base64::Engine;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use selvam_shared::QuotationSavedEvent;
use tracing::{error, info};

use crate::repository::QuotationRepository;
use crate::{CoreError, CoreResult};

pub const PDF_DATA_URL_PREFIX: &str = "data:application/pdf;base64,";
pub const MISSING_PDF_DATA: &str = "Missing PDF data.";
pub const INVALID_PDF_DATA: &str = "Invalid PDF data format.";

const PDF_EXTENSION: &str = ".pdf";
const MAX_NAME_ATTEMPTS: u32 = 10_000;

/// Body of a quotation save request. Fields are raw JSON so non-string values
/// can be told apart from absent ones.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationUpload {
    pub data_url: Option<serde_json::Value>,
    pub file_name: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredQuotation {
    pub file_name: String,
    pub public_path: String,
}

/// Decodes a `data:application/pdf;base64,...` URL into the PDF bytes.
pub fn decode_pdf(data_url: Option<&serde_json::Value>) -> CoreResult<Vec<u8>> {
    let data_url = match data_url.and_then(|v| v.as_str()) {
        Some(s) if !s.is_empty() => s,
        _ => return Err(CoreError::ValidationError(MISSING_PDF_DATA.to_string())),
    };

    let payload = data_url
        .strip_prefix(PDF_DATA_URL_PREFIX)
        .ok_or_else(|| CoreError::ValidationError(INVALID_PDF_DATA.to_string()))?;

    let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(compact.as_bytes())
        .map_err(|_| CoreError::ValidationError(INVALID_PDF_DATA.to_string()))?;

    if bytes.is_empty() {
        return Err(CoreError::ValidationError(INVALID_PDF_DATA.to_string()));
    }
    Ok(bytes)
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

/// Maps every character outside `[A-Za-z0-9._-]` to `-`, collapses dash runs and trims dashes.
///
/// `" Q 1.pdf "` becomes `"Q-1.pdf"`.
pub fn sanitize_file_name(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.trim().chars() {
        let c = if is_allowed(c) { c } else { '-' };
        if c == '-' && out.ends_with('-') {
            continue;
        }
        out.push(c);
    }
    out.trim_matches('-').to_string()
}

/// `2026-10-17T09:30:00.123Z` -> `2026-10-17T09-30-00-123Z`
pub fn timestamp_slug(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}

pub fn fallback_file_name(now: DateTime<Utc>) -> String {
    format!("quotation-{}{}", timestamp_slug(now), PDF_EXTENSION)
}

/// Splits into stem and extension. Any extension other than `.pdf` (any case) is replaced.
pub fn split_pdf_name(name: &str, now: DateTime<Utc>) -> (String, String) {
    let path = Path::new(name);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("quotation-{}", timestamp_slug(now)));

    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => format!(".{}", ext),
        _ => PDF_EXTENSION.to_string(),
    };
    (stem, ext)
}

/// `stem.pdf`, then `stem-1.pdf`, `stem-2.pdf`, ...
pub fn candidate_name(stem: &str, ext: &str, attempt: u32) -> String {
    if attempt == 0 {
        format!("{}{}", stem, ext)
    } else {
        format!("{}-{}{}", stem, attempt, ext)
    }
}

/// Stores quotation PDFs under a collision-free name.
///
/// The existence check and the write are separate steps: two saves racing for the same
/// name can both pick it and the later write wins.
pub struct QuotationService {
    repo: Arc<dyn QuotationRepository>,
}

impl QuotationService {
    pub fn new(repo: Arc<dyn QuotationRepository>) -> Self {
        Self { repo }
    }

    /// First free name for `requested`, or for a timestamped fallback when it sanitizes to nothing.
    pub async fn resolve_unique_name(&self, requested: Option<&str>, now: DateTime<Utc>) -> CoreResult<String> {
        let safe = requested.map(sanitize_file_name).unwrap_or_default();
        let base = if safe.is_empty() { fallback_file_name(now) } else { safe };
        let (stem, ext) = split_pdf_name(&base, now);

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let candidate = candidate_name(&stem, &ext, attempt);
            let taken = self
                .repo
                .exists(&candidate)
                .await
                .map_err(|e| CoreError::InternalError(e.to_string()))?;
            if !taken {
                return Ok(candidate);
            }
        }

        Err(CoreError::InternalError(format!(
            "no free file name for {}{} after {} attempts",
            stem, ext, MAX_NAME_ATTEMPTS
        )))
    }

    pub async fn save(&self, upload: QuotationUpload, now: DateTime<Utc>) -> CoreResult<StoredQuotation> {
        let bytes = decode_pdf(upload.data_url.as_ref())?;
        let requested = upload.file_name.as_ref().and_then(|v| v.as_str());
        let file_name = self.resolve_unique_name(requested, now).await?;

        self.repo.write(&file_name, &bytes).await.map_err(|e| {
            error!("Error saving quotation PDF {}: {}", file_name, e);
            CoreError::InternalError(e.to_string())
        })?;

        let stored = StoredQuotation {
            public_path: self.repo.public_path(&file_name),
            file_name,
        };

        let event = QuotationSavedEvent {
            file_name: stored.file_name.clone(),
            public_path: stored.public_path.clone(),
            size_bytes: bytes.len(),
            saved_at: now,
        };
        info!(event = %serde_json::to_string(&event).unwrap_or_default(), "Quotation saved");

        Ok(stored)
    }
}
