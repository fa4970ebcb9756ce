//! Authenticated HTTP client for the bundling service.
//!
//! One POST per uploaded item: a multipart form with the file part and a
//! JSON-encoded tag list, answered by a receipt with the item id. The
//! service owns content-addressing, signature application and network
//! submission; this client owns nothing but the HTTP round trip.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use permadrop_core::models::{Tag, UploadReceipt};
use permadrop_wallet::{ArweaveSigner, WalletError};
use thiserror::Error;

/// Upload pipeline errors
#[derive(Debug, Error)]
pub enum UploadError {
    /// Backend or transport failure, carrying the service's message.
    #[error("Upload failed: {0}")]
    Failed(String),

    /// Batch upload invoked with no files.
    #[error("No files provided for upload")]
    EmptyBatch,

    /// Deployment source directory does not exist.
    #[error("Build output directory not found: {0}")]
    BuildOutputMissing(PathBuf),

    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One payload handed to the bundling service.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// Raw content; the size on the wire is the payload length.
    pub content: Vec<u8>,
    /// File name forwarded with the multipart part.
    pub file_name: String,
    /// MIME type of the part.
    pub content_type: String,
    /// Tags recorded with the item, in order.
    pub tags: Vec<Tag>,
}

/// Authenticated client for the bundling service.
#[derive(Debug, Clone)]
pub struct BundlerClient {
    http: reqwest::Client,
    base_url: String,
    signer: ArweaveSigner,
}

impl BundlerClient {
    /// Build a client whose signer credential rides on every request.
    pub fn authenticated(
        base_url: impl Into<String>,
        signer: ArweaveSigner,
        timeout: Duration,
    ) -> Result<Self, UploadError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UploadError::Failed(format!("failed to create HTTP client: {}", e)))?;

        let base_url: String = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            signer,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.header(
            "authorization",
            format!("Bearer {}", self.signer.credential()),
        )
    }

    /// Upload one payload. Exactly one POST per call; a failure carries the
    /// service's message and is never retried here.
    pub async fn upload_file(&self, upload: FileUpload) -> Result<UploadReceipt, UploadError> {
        let FileUpload {
            content,
            file_name,
            content_type,
            tags,
        } = upload;

        let url = format!("{}/v1/uploads", self.base_url);
        let size_bytes = content.len();

        let tags_json = serde_json::to_string(&tags)
            .map_err(|e| UploadError::Failed(format!("failed to encode tags: {}", e)))?;
        let part = reqwest::multipart::Part::bytes(content)
            .file_name(file_name.clone())
            .mime_str(&content_type)
            .map_err(|e| UploadError::Failed(format!("invalid content type: {}", e)))?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("tags", tags_json);

        let started = Instant::now();
        let response = self
            .apply_auth(self.http.post(&url).multipart(form))
            .send()
            .await
            .map_err(|e| UploadError::Failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(UploadError::Failed(format!(
                "service returned {}: {}",
                status, body
            )));
        }

        let receipt: UploadReceipt = response
            .json()
            .await
            .map_err(|e| UploadError::Failed(format!("failed to parse upload receipt: {}", e)))?;

        tracing::info!(
            id = %receipt.id,
            file_name = %file_name,
            size_bytes = size_bytes,
            duration_ms = started.elapsed().as_millis() as u64,
            "upload accepted"
        );
        Ok(receipt)
    }
}
