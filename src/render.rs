//! HTML rendering for submission documents
//!
//! Renders a submission into the fixed document layout (title block, one
//! labeled value per field, optional remarks, generation-time footer). The
//! template is registered under an `.html` name so Tera escapes every
//! interpolated value; submission fields are opaque user input.

use chrono::{DateTime, NaiveDate, Utc};
use tera::{Context, Tera};
use thiserror::Error;

use crate::models::Submission;

const DOCUMENT_TEMPLATE: &str = include_str!("../templates/document.html");
const TEMPLATE_NAME: &str = "document.html";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

/// Renders submissions into HTML documents. Built once at startup and shared
/// across requests.
pub struct DocumentRenderer {
    tera: Tera,
}

impl DocumentRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, DOCUMENT_TEMPLATE)?;
        Ok(Self { tera })
    }

    /// Render the document for a submission. `generated_at` is stamped into
    /// the footer.
    pub fn render(
        &self,
        submission: &Submission,
        generated_at: DateTime<Utc>,
    ) -> Result<String, RenderError> {
        let mut ctx = Context::new();
        ctx.insert("full_name", &submission.full_name);
        ctx.insert("email", &submission.email);
        ctx.insert("mobile", &submission.mobile);
        ctx.insert("company", &submission.company);
        ctx.insert("role", &submission.role);
        ctx.insert("address", &submission.address);
        ctx.insert("city", &submission.city);
        ctx.insert("state", &submission.state);
        ctx.insert("pin_code", &submission.pin_code);
        ctx.insert(
            "date_of_submission",
            &format_submission_date(&submission.date_of_submission),
        );

        // Blank remarks are treated the same as absent ones
        let remarks = submission
            .remarks
            .as_deref()
            .filter(|r| !r.trim().is_empty());
        ctx.insert("remarks", &remarks);

        ctx.insert(
            "generated_at",
            &generated_at.format("%B %-d, %Y, %I:%M %p").to_string(),
        );

        Ok(self.tera.render(TEMPLATE_NAME, &ctx)?)
    }
}

/// Long-month en-US date, e.g. "June 5, 2024". Unparseable input is shown
/// verbatim rather than failing the whole document.
fn format_submission_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
