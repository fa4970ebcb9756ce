//! Static build deployment.
//!
//! Walks a build output directory, uploads every file under its relative
//! path, then publishes a path manifest covering the tree. The manifest's
//! gateway URL serves the deployed site.

use std::path::Path;

use permadrop_core::constants::MANIFEST_CONTENT_TYPE;
use permadrop_core::content_type::content_type_from_path;
use permadrop_core::humanize::format_bytes;
use permadrop_core::manifest::PathManifest;
use permadrop_core::models::{Tag, UploadResult};
use permadrop_core::Config;
use permadrop_wallet::{parse_wallet, ArweaveSigner};
use walkdir::WalkDir;

use crate::bundler::{BundlerClient, FileUpload, UploadError};

/// Uploads a directory tree and its manifest through one authenticated
/// client.
#[derive(Debug)]
pub struct Deployer {
    client: BundlerClient,
    gateway_url: String,
}

impl Deployer {
    /// Authenticate from a raw wallet credential, either JSON or
    /// base64-encoded JSON.
    pub fn from_credential(credential: &str, config: &Config) -> Result<Self, UploadError> {
        let jwk = parse_wallet(credential)?;
        let client = BundlerClient::authenticated(
            config.bundler_url.as_str(),
            ArweaveSigner::new(jwk),
            config.http_timeout(),
        )?;
        Ok(Self {
            client,
            gateway_url: config.gateway_url.clone(),
        })
    }

    /// Upload every regular file under `source_dir`, then the manifest.
    ///
    /// The walk is sorted by file name, so repeated deployments of the same
    /// tree produce identical manifests. The first failure aborts the walk;
    /// files uploaded before it stay on the network, since permanent storage
    /// has no delete to roll back with.
    pub async fn deploy(&self, source_dir: &Path) -> Result<UploadResult, UploadError> {
        if !source_dir.is_dir() {
            return Err(UploadError::BuildOutputMissing(source_dir.to_path_buf()));
        }

        let mut manifest = PathManifest::new();
        let mut total_bytes: u64 = 0;

        for entry in WalkDir::new(source_dir).sort_by_file_name() {
            let entry =
                entry.map_err(|e| UploadError::Failed(format!("directory walk failed: {}", e)))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative_path = relative_forward_slash(source_dir, entry.path())?;
            let data = tokio::fs::read(entry.path()).await?;
            let size = data.len() as u64;
            let content_type = content_type_from_path(entry.path());

            tracing::info!(
                path = %relative_path,
                size = %format_bytes(size),
                content_type = %content_type,
                "uploading"
            );

            let receipt = self
                .client
                .upload_file(FileUpload {
                    content: data,
                    file_name: relative_path.clone(),
                    content_type: content_type.clone(),
                    tags: vec![Tag::new("Content-Type", content_type)],
                })
                .await?;

            manifest.insert(relative_path, receipt.id);
            total_bytes += size;
        }

        manifest.finalize_index();
        let body = manifest
            .to_pretty_json()
            .map_err(|e| UploadError::Failed(format!("failed to encode manifest: {}", e)))?;
        let receipt = self
            .client
            .upload_file(FileUpload {
                content: body,
                file_name: "manifest.json".to_string(),
                content_type: MANIFEST_CONTENT_TYPE.to_string(),
                tags: vec![Tag::new("Content-Type", MANIFEST_CONTENT_TYPE)],
            })
            .await?;

        tracing::info!(
            manifest_id = %receipt.id,
            files = manifest.len(),
            total = %format_bytes(total_bytes),
            index = %manifest.index.path,
            "deployment uploaded"
        );
        Ok(UploadResult::from_id(receipt.id, &self.gateway_url))
    }
}

/// Relative path with forward-slash separators on every host, since manifest
/// paths are URL path segments.
fn relative_forward_slash(root: &Path, path: &Path) -> Result<String, UploadError> {
    let relative = path
        .strip_prefix(root)
        .map_err(|e| UploadError::Failed(format!("path escapes the source root: {}", e)))?;
    Ok(relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/"))
}
