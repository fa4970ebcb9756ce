//! Upload orchestration: wallet session, tags, submission, result.
//!
//! Progress is reported at fixed checkpoints rather than measured I/O: 5
//! before the session request, 10 with the session open, 20 with the payload
//! prepared, 40 at submission and 100 on completion. Batches report
//! completed items over the total instead.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use permadrop_core::constants::{APP_NAME, APP_VERSION, MANIFEST_CONTENT_TYPE};
use permadrop_core::content_type::resolve_content_type;
use permadrop_core::manifest::PathManifest;
use permadrop_core::models::{Tag, UploadRequest, UploadResult};
use permadrop_core::Config;
use permadrop_wallet::{Wallet, WalletSession, UPLOAD_PERMISSIONS};

use crate::bundler::{BundlerClient, FileUpload, UploadError};

/// Orchestrates uploads against the bundling service, opening a fresh
/// wallet session for every call.
pub struct Uploader {
    wallet: Arc<dyn Wallet>,
    config: Config,
}

impl Uploader {
    pub fn new(wallet: Arc<dyn Wallet>, config: Config) -> Self {
        Self { wallet, config }
    }

    /// Upload a single in-memory file.
    ///
    /// Wallet errors propagate unchanged; any submission failure surfaces
    /// with the service's message. One attempt, no retries: whether to try
    /// again is the caller's call.
    pub async fn upload(
        &self,
        request: UploadRequest,
        mut on_progress: impl FnMut(u8),
    ) -> Result<UploadResult, UploadError> {
        on_progress(5);
        let session = self.wallet.request_session(UPLOAD_PERMISSIONS).await?;
        on_progress(10);

        on_progress(20);
        self.submit(&session, request, &mut on_progress).await
    }

    /// Upload a file from disk, reading it inside the flow.
    pub async fn upload_path(
        &self,
        path: &Path,
        mut on_progress: impl FnMut(u8),
    ) -> Result<UploadResult, UploadError> {
        on_progress(5);
        let session = self.wallet.request_session(UPLOAD_PERMISSIONS).await?;
        on_progress(10);

        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("file.bin")
            .to_string();
        let request = UploadRequest::new(file_name, data);
        on_progress(20);

        self.submit(&session, request, &mut on_progress).await
    }

    /// Upload every file of a batch, then publish a path manifest covering
    /// them. The manifest's own upload result is returned; fetching its URL
    /// serves the whole batch.
    ///
    /// The first failure aborts the batch. Files uploaded before it stay on
    /// the network; permanent storage has nothing to roll back.
    pub async fn upload_batch(
        &self,
        requests: Vec<UploadRequest>,
        mut on_progress: impl FnMut(u8),
    ) -> Result<UploadResult, UploadError> {
        if requests.is_empty() {
            return Err(UploadError::EmptyBatch);
        }

        // Files plus the trailing manifest upload.
        let total = requests.len() as u64 + 1;
        let mut manifest = PathManifest::new();

        for (completed, request) in requests.into_iter().enumerate() {
            on_progress((completed as u64 * 100 / total) as u8);
            let file_name = request.file_name.clone();
            let result = self.upload(request, |_| {}).await?;
            manifest.insert(file_name, result.id);
        }
        on_progress(((total - 1) * 100 / total) as u8);

        manifest.finalize_index();
        let body = manifest
            .to_pretty_json()
            .map_err(|e| UploadError::Failed(format!("failed to encode manifest: {}", e)))?;
        let request =
            UploadRequest::new("manifest.json", body).with_content_type(MANIFEST_CONTENT_TYPE);
        let result = self.upload(request, |_| {}).await?;
        on_progress(100);

        tracing::info!(
            manifest_id = %result.id,
            files = manifest.len(),
            "batch upload complete"
        );
        Ok(result)
    }

    async fn submit(
        &self,
        session: &WalletSession,
        request: UploadRequest,
        on_progress: &mut impl FnMut(u8),
    ) -> Result<UploadResult, UploadError> {
        let content_type =
            resolve_content_type(&request.file_name, request.content_type.as_deref());
        let tags = vec![
            Tag::new("Content-Type", content_type.clone()),
            Tag::new("App-Name", APP_NAME),
            Tag::new("App-Version", APP_VERSION),
            Tag::new("Unix-Time", Utc::now().timestamp_millis().to_string()),
            Tag::new("Filename", request.file_name.clone()),
        ];

        let client = BundlerClient::authenticated(
            self.config.bundler_url.as_str(),
            session.signer().clone(),
            self.config.http_timeout(),
        )?;

        on_progress(40);
        let receipt = client
            .upload_file(FileUpload {
                content: request.data,
                file_name: request.file_name,
                content_type,
                tags,
            })
            .await?;
        on_progress(100);

        Ok(UploadResult::from_id(receipt.id, &self.config.gateway_url))
    }
}
