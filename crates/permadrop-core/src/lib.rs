//! Permadrop core library
//!
//! Shared building blocks for the Permadrop crates: domain models,
//! content-type resolution, byte formatting, the path manifest model and
//! environment-driven configuration.

pub mod config;
pub mod constants;
pub mod content_type;
pub mod humanize;
pub mod manifest;
pub mod models;

pub use config::Config;
pub use content_type::{content_type_from_path, resolve_content_type};
pub use humanize::format_bytes;
pub use manifest::{ManifestEntry, ManifestIndex, PathManifest};
pub use models::{Tag, UploadReceipt, UploadRequest, UploadResult};
