//! Client for the external HTML-to-PDF conversion service
//!
//! One bounded attempt per call, no retries. Failures here are expected to be
//! absorbed by the caller into the HTML fallback path.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::Serialize;
use thiserror::Error;
use tracing::instrument;

/// Page format sent with every conversion request
pub const PAGE_FORMAT: &str = "A4";
/// Page margin sent with every conversion request
pub const PAGE_MARGIN: &str = "20px";

/// Substituted when no API key is configured; the service rejects it and the
/// caller degrades to the HTML fallback.
const PLACEHOLDER_API_KEY: &str = "demo";

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Conversion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Conversion service returned {status}: {body}")]
    Status { status: u16, body: String },
}

#[derive(Debug, Serialize)]
struct ConvertRequest<'a> {
    source: &'a str,
    format: &'a str,
    margin: &'a str,
}

/// HTML-to-PDF conversion client. Built once at startup and shared across
/// requests.
pub struct PdfConverter {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl PdfConverter {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key,
        }
    }

    /// Convert rendered HTML to PDF bytes. Single attempt; transport errors
    /// and non-success statuses both surface as [`ConvertError`].
    #[instrument(skip(self, html), fields(html_len = html.len()))]
    pub async fn convert(&self, html: &str) -> Result<Vec<u8>, ConvertError> {
        let api_key = self.api_key.as_deref().unwrap_or(PLACEHOLDER_API_KEY);

        let response = self
            .client
            .post(&self.endpoint)
            .basic_auth("api", Some(api_key))
            .json(&ConvertRequest {
                source: html,
                format: PAGE_FORMAT,
                margin: PAGE_MARGIN,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ConvertError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Encode PDF bytes as a `data:application/pdf` URI.
pub fn pdf_data_url(bytes: &[u8]) -> String {
    format!("data:application/pdf;base64,{}", BASE64.encode(bytes))
}

/// Encode rendered HTML as a `data:text/html` URI for the fallback path.
pub fn html_data_url(html: &str) -> String {
    format!("data:text/html;base64,{}", BASE64.encode(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_data_url_encodes_bytes() {
        let url = pdf_data_url(b"%PDF-1.4 stub");
        assert!(url.starts_with("data:application/pdf;base64,"));

        let encoded = url.trim_start_matches("data:application/pdf;base64,");
        assert_eq!(BASE64.decode(encoded).unwrap(), b"%PDF-1.4 stub");
    }

    #[test]
    fn html_data_url_encodes_markup() {
        let url = html_data_url("<html><body>hi</body></html>");
        assert!(url.starts_with("data:text/html;base64,"));

        let encoded = url.trim_start_matches("data:text/html;base64,");
        assert_eq!(
            BASE64.decode(encoded).unwrap(),
            b"<html><body>hi</body></html>"
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        let converter = PdfConverter::new("http://127.0.0.1:1/convert".to_string(), None);
        let result = converter.convert("<html></html>").await;
        assert!(matches!(result, Err(ConvertError::Transport(_))));
    }
}
