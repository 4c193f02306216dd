//! Property-based tests for docugen-api
//!
//! Exercises the rendering and data-URI logic with proptest.

use chrono::Utc;
use proptest::prelude::*;

use docugen_api::convert::{html_data_url, pdf_data_url};
use docugen_api::models::Submission;
use docugen_api::render::DocumentRenderer;

fn submission_with(full_name: &str, remarks: Option<String>) -> Submission {
    Submission {
        id: "abc-123".to_string(),
        full_name: full_name.to_string(),
        email: "ada@example.com".to_string(),
        mobile: "+44 20 7946 0000".to_string(),
        company: "Analytical Engines Ltd".to_string(),
        role: "Engineer".to_string(),
        address: "12 St James's Square".to_string(),
        city: "London".to_string(),
        state: "Greater London".to_string(),
        pin_code: "SW1Y 4JH".to_string(),
        date_of_submission: "2024-06-05".to_string(),
        remarks,
        pdf_url: None,
        created_at: Utc::now(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================================
    // Rendering: escaping
    // ============================================================

    #[test]
    fn markup_in_field_values_never_survives_rendering(
        inner in "[A-Za-z0-9 ]{1,30}"
    ) {
        let renderer = DocumentRenderer::new().unwrap();
        let hostile = format!("<{}>", inner);
        let submission = submission_with(&hostile, None);

        let html = renderer.render(&submission, Utc::now()).unwrap();
        prop_assert!(!html.contains(&hostile));
        let escaped = format!("&lt;{}&gt;", inner);
        prop_assert!(html.contains(&escaped));
    }

    // ============================================================
    // Rendering: remarks block
    // ============================================================

    #[test]
    fn nonempty_remarks_render_exactly_once(
        remarks in "[A-Za-z0-9][A-Za-z0-9 ]{0,40}"
    ) {
        let renderer = DocumentRenderer::new().unwrap();
        let submission = submission_with("Ada Lovelace", Some(remarks.clone()));

        let html = renderer.render(&submission, Utc::now()).unwrap();
        prop_assert_eq!(html.matches("Remarks / Notes:").count(), 1);
        prop_assert!(html.contains(remarks.trim_end()));
    }

    #[test]
    fn blank_remarks_render_no_remarks_block(
        spaces in " {0,10}"
    ) {
        let renderer = DocumentRenderer::new().unwrap();
        let submission = submission_with("Ada Lovelace", Some(spaces));

        let html = renderer.render(&submission, Utc::now()).unwrap();
        prop_assert_eq!(html.matches("Remarks / Notes:").count(), 0);
    }

    // ============================================================
    // Data URIs
    // ============================================================

    #[test]
    fn pdf_data_urls_are_well_formed(
        bytes in proptest::collection::vec(any::<u8>(), 1..200)
    ) {
        let url = pdf_data_url(&bytes);
        let pattern = regex::Regex::new(
            r"^data:application/pdf;base64,[A-Za-z0-9+/]+={0,2}$"
        ).unwrap();
        prop_assert!(pattern.is_match(&url));
    }

    #[test]
    fn html_data_urls_are_well_formed(
        text in "[ -~]{1,200}"
    ) {
        let url = html_data_url(&text);
        let pattern = regex::Regex::new(
            r"^data:text/html;base64,[A-Za-z0-9+/]+={0,2}$"
        ).unwrap();
        prop_assert!(pattern.is_match(&url));
    }
}

// ============================================================
// Unit Tests (non-property)
// ============================================================

#[cfg(test)]
mod unit_tests {
    use docugen_api::models::GenerateResponse;

    #[test]
    fn message_field_is_omitted_on_full_success() {
        let response = GenerateResponse {
            success: true,
            pdf_url: "data:application/pdf;base64,AAAA".to_string(),
            message: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("message").is_none());
        assert_eq!(json["pdfUrl"], "data:application/pdf;base64,AAAA");
    }

    #[test]
    fn message_field_is_present_on_degraded_output() {
        let response = GenerateResponse {
            success: true,
            pdf_url: "data:text/html;base64,AAAA".to_string(),
            message: Some("PDF preview generated".to_string()),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message"], "PDF preview generated");
    }
}
