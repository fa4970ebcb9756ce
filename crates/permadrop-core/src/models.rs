//! Core domain models shared by the client and CLI crates.

use serde::{Deserialize, Serialize};

/// A file selected for upload. Contents are held fully in memory and are
/// immutable once submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// Original file name; doubles as the relative path in batch manifests.
    pub file_name: String,
    /// Raw file contents.
    pub data: Vec<u8>,
    /// Self-reported MIME type, when the source provided one.
    pub content_type: Option<String>,
}

impl UploadRequest {
    pub fn new(file_name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            data,
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Payload size in bytes.
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

/// A name/value pair recorded with an uploaded item.
///
/// Order is preserved on the wire; nothing is deduplicated client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Identifier issued by the bundling service for one uploaded item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub id: String,
}

/// Outcome of a successful upload: the content identifier and the gateway
/// URL it will be retrievable under. Retrieval is eventually consistent on
/// the storage network, so the URL may lag the upload by a short while.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResult {
    pub id: String,
    pub url: String,
}

impl UploadResult {
    /// Build a result from an item id and the gateway base URL.
    pub fn from_id(id: impl Into<String>, gateway_url: &str) -> Self {
        let id = id.into();
        let url = format!("{}/{}", gateway_url.trim_end_matches('/'), id);
        Self { id, url }
    }
}
