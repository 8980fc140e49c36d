//! HTTP client for the external services this API forwards to.
//!
//! Three delegates are supported, each behind an optional base URL:
//! the ticketing provider (checkout sessions), the AI metadata extractor,
//! and a Google Drive listing proxy. A delegate without a configured URL
//! fails every call with [`DelegateError::NotConfigured`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default per-request timeout for delegate calls.
const DEFAULT_DELEGATE_TIMEOUT_SECS: u64 = 10;

/// Base URLs and timeouts for the external delegates.
#[derive(Debug, Clone, Default)]
pub struct DelegateConfig {
    pub ticketing_url: Option<String>,
    pub ai_extract_url: Option<String>,
    pub drive_url: Option<String>,
    pub timeout_secs: u64,
}

impl DelegateConfig {
    /// Load delegate configuration from environment variables.
    ///
    /// | Env Var                 | Default |
    /// |-------------------------|---------|
    /// | `TICKETING_URL`         | unset   |
    /// | `AI_EXTRACT_URL`        | unset   |
    /// | `DRIVE_URL`             | unset   |
    /// | `DELEGATE_TIMEOUT_SECS` | `10`    |
    pub fn from_env() -> Self {
        let timeout_secs: u64 = std::env::var("DELEGATE_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_DELEGATE_TIMEOUT_SECS.to_string())
            .parse()
            .expect("DELEGATE_TIMEOUT_SECS must be a valid u64");

        Self {
            ticketing_url: optional_url("TICKETING_URL"),
            ai_extract_url: optional_url("AI_EXTRACT_URL"),
            drive_url: optional_url("DRIVE_URL"),
            timeout_secs,
        }
    }
}

fn optional_url(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// A file listed in a Drive folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    pub url: String,
}

/// Errors from delegate calls.
#[derive(Debug, thiserror::Error)]
pub enum DelegateError {
    /// No base URL was configured for the service.
    #[error("{0} delegate is not configured")]
    NotConfigured(&'static str),

    /// The HTTP request itself failed (network, DNS, TLS, timeout, decode).
    #[error("{service} request failed: {source}")]
    Request {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The delegate returned a non-2xx status code.
    #[error("{service} returned {status}: {body}")]
    Api {
        service: &'static str,
        status: u16,
        body: String,
    },
}

const TICKETING: &str = "ticketing";
const AI_EXTRACT: &str = "ai-extract";
const DRIVE: &str = "drive";

/// Shared client for all delegates, built once at startup.
pub struct DelegateClient {
    client: reqwest::Client,
    config: DelegateConfig,
}

impl DelegateClient {
    pub fn new(config: DelegateConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()?;
        Ok(Self { client, config })
    }

    /// Create a checkout session with the ticketing provider.
    ///
    /// The request body is forwarded unchanged and the provider's JSON
    /// response is returned as-is.
    pub async fn create_checkout_session(
        &self,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DelegateError> {
        let url = endpoint(
            self.config.ticketing_url.as_deref(),
            TICKETING,
            "checkout/sessions",
        )?;
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|source| request_error(TICKETING, source))?;
        parse_response(TICKETING, response).await
    }

    /// Fetch a checkout session by its provider id.
    pub async fn get_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<serde_json::Value, DelegateError> {
        let url = endpoint(
            self.config.ticketing_url.as_deref(),
            TICKETING,
            &format!("checkout/sessions/{session_id}"),
        )?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| request_error(TICKETING, source))?;
        parse_response(TICKETING, response).await
    }

    /// Ask the AI extractor for metadata describing the image at `image_url`.
    pub async fn extract_metadata(
        &self,
        image_url: &str,
    ) -> Result<serde_json::Value, DelegateError> {
        let url = endpoint(self.config.ai_extract_url.as_deref(), AI_EXTRACT, "extract")?;
        let response = self
            .client
            .post(url)
            .json(&serde_json::json!({ "image_url": image_url }))
            .send()
            .await
            .map_err(|source| request_error(AI_EXTRACT, source))?;
        parse_response(AI_EXTRACT, response).await
    }

    /// List the files in a Drive folder.
    pub async fn list_drive_files(&self, folder_id: &str) -> Result<Vec<DriveFile>, DelegateError> {
        let url = endpoint(
            self.config.drive_url.as_deref(),
            DRIVE,
            &format!("folders/{folder_id}/files"),
        )?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| request_error(DRIVE, source))?;
        parse_response(DRIVE, response).await
    }
}

// ---- private helpers ----

/// Join a configured base URL and a relative path.
fn endpoint(
    base: Option<&str>,
    service: &'static str,
    path: &str,
) -> Result<String, DelegateError> {
    let base = base.ok_or(DelegateError::NotConfigured(service))?;
    Ok(format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    ))
}

fn request_error(service: &'static str, source: reqwest::Error) -> DelegateError {
    DelegateError::Request { service, source }
}

/// Check the status and decode a JSON body.
async fn parse_response<T: serde::de::DeserializeOwned>(
    service: &'static str,
    response: reqwest::Response,
) -> Result<T, DelegateError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(DelegateError::Api {
            service,
            status: status.as_u16(),
            body,
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|source| request_error(service, source))
}
