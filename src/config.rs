//! Process configuration for the DocuGen API
//!
//! All environment access happens here, once, at startup. Handlers receive
//! configuration through [`crate::state::AppState`] and never read the
//! environment mid-request.

/// Default endpoint of the hosted HTML-to-PDF conversion service.
pub const DEFAULT_CONVERT_ENDPOINT: &str = "https://api.pdfshift.io/v3/convert/pdf";

/// Runtime configuration, built once at process start.
#[derive(Debug, Clone)]
pub struct Config {
    /// sqlx connection string for the submission store
    pub database_url: String,

    /// Endpoint of the external HTML-to-PDF conversion service
    pub convert_endpoint: String,

    /// API key for the conversion service. When unset, requests are still
    /// attempted with a placeholder credential and fail over to the HTML
    /// fallback.
    pub convert_api_key: Option<String>,

    /// TCP port to listen on
    pub port: u16,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults
    /// suitable for local development.
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:docugen.db?mode=rwc".to_string()),
            convert_endpoint: std::env::var("PDFSHIFT_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_CONVERT_ENDPOINT.to_string()),
            convert_api_key: std::env::var("PDFSHIFT_API_KEY").ok(),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:docugen.db?mode=rwc".to_string(),
            convert_endpoint: DEFAULT_CONVERT_ENDPOINT.to_string(),
            convert_api_key: None,
            port: 3001,
        }
    }
}
