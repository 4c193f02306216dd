//! DocuGen API - form submission storage with on-demand PDF generation
//!
//! Provides REST endpoints for:
//! - Creating and listing form submissions
//! - Fetching a single submission
//! - Generating a PDF document for a submission via an external
//!   HTML-to-PDF conversion service, with an HTML data-URI fallback
//!   when that service is unavailable

use axum::{
    http::{header, HeaderName},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod convert;
pub mod error;
pub mod handlers;
pub mod models;
pub mod render;
pub mod state;

use state::AppState;

/// Build the application router.
///
/// The CORS layer answers preflight requests itself: permissive origin, with
/// the header set browser clients send alongside API credentials.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ]);

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Submission endpoints
        .route(
            "/api/submissions",
            post(handlers::create_submission).get(handlers::list_submissions),
        )
        .route("/api/submissions/:id", get(handlers::get_submission))
        // Document generation
        .route("/api/generate-pdf", post(handlers::generate_document))
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
