//! Application-wide constants.

/// `App-Name` tag value attached to every tagged upload.
pub const APP_NAME: &str = "permadrop";

/// `App-Version` tag value, tracking the crate version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generic binary fallback used when no content type can be resolved.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Content type under which path manifests are uploaded.
pub const MANIFEST_CONTENT_TYPE: &str = "application/x.arweave-manifest+json";

/// Format marker carried by every path manifest document.
pub const MANIFEST_FORMAT: &str = "arweave/paths";

/// Version of the path manifest format.
pub const MANIFEST_VERSION: &str = "0.2.0";

/// Default bundling service endpoint.
pub const DEFAULT_BUNDLER_URL: &str = "https://upload.ardrive.io";

/// Default gateway used to build retrieval URLs.
pub const DEFAULT_GATEWAY_URL: &str = "https://arweave.net";

/// Default primary-name lookup gateway.
pub const DEFAULT_NAME_GATEWAY_URL: &str = "https://api.arns.app";
