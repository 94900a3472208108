//! HTTP client for the remote bills store.

use async_trait::async_trait;
use log::{info, warn};
use reqwest::{multipart, Client, Response};
use shared::{Bill, UploadResponse};
use std::time::Duration;

use crate::store::{BillStore, ReceiptUpload, StoreError};

/// API client configuration.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5678".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl ApiClientConfig {
    /// Read the configuration from the environment, keeping the defaults
    /// for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("API_SERVER_URL").unwrap_or(defaults.base_url),
            timeout_seconds: std::env::var("API_TIMEOUT_SECONDS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.timeout_seconds),
        }
    }
}

/// REST client for the `bills` resource.
///
/// Requests are single-attempt: a non-success status or a transport failure
/// is surfaced as a [`StoreError`] and never retried.
pub struct ApiClient {
    client: Client,
    config: ApiClientConfig,
}

impl ApiClient {
    pub fn new(config: ApiClientConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }
}

/// Reject non-success responses with the status-derived store error.
fn ensure_success(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        warn!("store request rejected: status={}", status.as_u16());
        Err(StoreError::Api {
            status: status.as_u16(),
        })
    }
}

/// Content type of a receipt file, derived from its extension.
fn content_type(file_name: &str) -> &'static str {
    let extension = std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        _ => "application/octet-stream",
    }
}

#[async_trait]
impl BillStore for ApiClient {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        let response = self.client.get(self.url("/bills")).send().await?;
        let bills: Vec<Bill> = ensure_success(response)?.json().await?;
        Ok(bills)
    }

    async fn create(&self, upload: ReceiptUpload) -> Result<UploadResponse, StoreError> {
        info!("uploading receipt: file_name={}", upload.file.name);

        let mime = content_type(&upload.file.name);
        let part = multipart::Part::bytes(upload.file.data)
            .file_name(upload.file.name.clone())
            .mime_str(mime)?;
        let form = multipart::Form::new()
            .part("file", part)
            .text("email", upload.email);

        let response = self
            .client
            .post(self.url("/bills"))
            .multipart(form)
            .send()
            .await?;
        Ok(ensure_success(response)?.json().await?)
    }

    async fn update(&self, bill: Bill) -> Result<Bill, StoreError> {
        let response = self
            .client
            .put(self.url(&format!("/bills/{}", bill.id)))
            .json(&bill)
            .send()
            .await?;
        Ok(ensure_success(response)?.json().await?)
    }
}
