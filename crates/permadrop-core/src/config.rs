//! Environment-driven configuration.
//!
//! Every setting reads from a `PERMADROP_*` variable and has a workable
//! default, so the CLI runs against the public endpoints with no setup.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::constants::{DEFAULT_BUNDLER_URL, DEFAULT_GATEWAY_URL, DEFAULT_NAME_GATEWAY_URL};

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 120;

/// Runtime configuration for the upload client and CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bundling service endpoint.
    pub bundler_url: String,
    /// Gateway used to derive retrieval URLs.
    pub gateway_url: String,
    /// Primary-name lookup gateway.
    pub name_gateway_url: String,
    /// Fallback gateway tried when the primary lookup errors out.
    pub name_fallback_url: Option<String>,
    /// Wallet keyfile path; `None` falls back to the inline env wallet.
    pub wallet_path: Option<PathBuf>,
    /// Timeout applied to bundler and naming requests.
    pub http_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bundler_url: DEFAULT_BUNDLER_URL.to_string(),
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            name_gateway_url: DEFAULT_NAME_GATEWAY_URL.to_string(),
            name_fallback_url: None,
            wallet_path: None,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from the environment, defaulting anything unset.
    pub fn from_env() -> Result<Self> {
        let http_timeout_secs = match env::var("PERMADROP_HTTP_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .context("PERMADROP_HTTP_TIMEOUT_SECS must be an integer")?,
            Err(_) => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            bundler_url: env::var("PERMADROP_BUNDLER_URL")
                .unwrap_or_else(|_| DEFAULT_BUNDLER_URL.to_string()),
            gateway_url: env::var("PERMADROP_GATEWAY_URL")
                .unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string()),
            name_gateway_url: env::var("PERMADROP_NAME_GATEWAY_URL")
                .unwrap_or_else(|_| DEFAULT_NAME_GATEWAY_URL.to_string()),
            name_fallback_url: env::var("PERMADROP_NAME_FALLBACK_URL").ok(),
            wallet_path: env::var("PERMADROP_WALLET_FILE").ok().map(PathBuf::from),
            http_timeout_secs,
        })
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}
