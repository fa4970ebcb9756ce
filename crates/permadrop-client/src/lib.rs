//! Permadrop client library
//!
//! HTTP client for the bundling service and the orchestration built on top:
//! single-file uploads with progress checkpoints, batch uploads published
//! under a path manifest, static build deployment and primary-name
//! resolution.

pub mod bundler;
pub mod deploy;
pub mod naming;
pub mod uploader;

pub use bundler::{BundlerClient, FileUpload, UploadError};
pub use deploy::Deployer;
pub use naming::NameResolver;
pub use uploader::Uploader;
