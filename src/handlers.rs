//! HTTP handlers for the DocuGen API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::convert;
use crate::error::ApiError;
use crate::models::*;
use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Create a new submission
pub async fn create_submission(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateSubmissionRequest>,
) -> Result<(StatusCode, Json<Submission>), ApiError> {
    if req.full_name.trim().is_empty() {
        return Err(ApiError::InvalidRequest("Full name is required".into()));
    }
    if req.email.trim().is_empty() {
        return Err(ApiError::InvalidRequest("Email is required".into()));
    }

    let id = Uuid::new_v4().to_string();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO submissions (id, full_name, email, mobile, company, role, address, city, state, pin_code, date_of_submission, remarks, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&req.full_name)
    .bind(&req.email)
    .bind(&req.mobile)
    .bind(&req.company)
    .bind(&req.role)
    .bind(&req.address)
    .bind(&req.city)
    .bind(&req.state)
    .bind(&req.pin_code)
    .bind(&req.date_of_submission)
    .bind(&req.remarks)
    .bind(now.to_rfc3339())
    .execute(&state.db)
    .await?;

    tracing::info!("Created submission: {}", id);

    Ok((
        StatusCode::CREATED,
        Json(Submission {
            id,
            full_name: req.full_name,
            email: req.email,
            mobile: req.mobile,
            company: req.company,
            role: req.role,
            address: req.address,
            city: req.city,
            state: req.state,
            pin_code: req.pin_code,
            date_of_submission: req.date_of_submission,
            remarks: req.remarks,
            pdf_url: None,
            created_at: now,
        }),
    ))
}

/// List all submissions, newest first
pub async fn list_submissions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Submission>>, ApiError> {
    let submissions: Vec<Submission> = sqlx::query_as(
        r#"
        SELECT id, full_name, email, mobile, company, role, address, city, state,
               pin_code, date_of_submission, remarks, pdf_url, created_at
        FROM submissions
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(submissions))
}

/// Get a submission by ID
pub async fn get_submission(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Submission>, ApiError> {
    let submission: Option<Submission> = sqlx::query_as(
        r#"
        SELECT id, full_name, email, mobile, company, role, address, city, state,
               pin_code, date_of_submission, remarks, pdf_url, created_at
        FROM submissions
        WHERE id = ?
        "#,
    )
    .bind(&id)
    .fetch_optional(&state.db)
    .await?;

    let submission = submission.ok_or(ApiError::SubmissionNotFound)?;
    Ok(Json(submission))
}

/// Generate a document for a submission.
///
/// Renders the submission into HTML, attempts PDF conversion through the
/// external service, and returns a data URI. Conversion failures degrade to
/// an HTML data URI instead of failing the request; only the PDF result is
/// persisted onto the record.
pub async fn generate_document(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    if req.submission_id.trim().is_empty() {
        return Err(ApiError::InvalidRequest("Submission ID is required".into()));
    }

    tracing::info!("Generating document for submission: {}", req.submission_id);

    let submission: Option<Submission> = sqlx::query_as(
        r#"
        SELECT id, full_name, email, mobile, company, role, address, city, state,
               pin_code, date_of_submission, remarks, pdf_url, created_at
        FROM submissions
        WHERE id = ?
        "#,
    )
    .bind(&req.submission_id)
    .fetch_optional(&state.db)
    .await?;

    let submission = submission.ok_or(ApiError::SubmissionNotFound)?;

    let html = state
        .renderer
        .render(&submission, Utc::now())
        .map_err(|e| ApiError::Internal(e.into()))?;

    let document = match state.converter.convert(&html).await {
        Ok(bytes) => GeneratedDocument::Rendered(convert::pdf_data_url(&bytes)),
        Err(e) => {
            tracing::warn!(
                "PDF conversion failed for submission {}, falling back to HTML: {}",
                req.submission_id,
                e
            );
            GeneratedDocument::Degraded {
                uri: convert::html_data_url(&html),
                reason: "PDF preview generated (conversion service unavailable)".to_string(),
            }
        }
    };

    match document {
        GeneratedDocument::Rendered(uri) => {
            sqlx::query("UPDATE submissions SET pdf_url = ? WHERE id = ?")
                .bind(&uri)
                .bind(&req.submission_id)
                .execute(&state.db)
                .await?;

            tracing::info!("Stored PDF for submission: {}", req.submission_id);

            Ok(Json(GenerateResponse {
                success: true,
                pdf_url: uri,
                message: None,
            }))
        }
        GeneratedDocument::Degraded { uri, reason } => {
            // The fallback must not overwrite a previously stored PDF
            Ok(Json(GenerateResponse {
                success: true,
                pdf_url: uri,
                message: Some(reason),
            }))
        }
    }
}
