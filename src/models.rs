//! Data models for the DocuGen API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Submission record as stored in the database.
///
/// Business fields are write-once; only `pdf_url` is mutated after creation,
/// and only when a PDF conversion succeeds.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Submission {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub company: String,
    pub role: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pin_code: String,
    pub date_of_submission: String,
    pub remarks: Option<String>,
    pub pdf_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request to create a new submission
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubmissionRequest {
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub company: String,
    pub role: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pin_code: String,
    pub date_of_submission: String,
    #[serde(default)]
    pub remarks: Option<String>,
}

/// Request to generate a document for a submission
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    #[serde(rename = "submissionId", default)]
    pub submission_id: String,
}

/// Response from a generation attempt
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(rename = "pdfUrl")]
    pub pdf_url: String,
    /// Present only when the result is a degraded HTML fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Outcome of one generation attempt.
///
/// Conversion failures are absorbed into the `Degraded` variant rather than
/// surfaced as errors, so callers can tell full success from fallback output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedDocument {
    /// PDF data URI; persisted onto the submission record
    Rendered(String),
    /// HTML data URI produced because the conversion service failed;
    /// never persisted
    Degraded { uri: String, reason: String },
}
