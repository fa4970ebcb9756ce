//! Primary-name resolution for wallet addresses.
//!
//! Asks the configured name gateway for an address's primary name, then the
//! fallback gateway. Every failure path ends in a logged `None`: callers
//! render the bare address when no name exists, and a naming outage must
//! never fail an upload flow.

use anyhow::Context;
use permadrop_core::Config;
use serde::Deserialize;

/// Body of the primary-name endpoint.
#[derive(Debug, Deserialize)]
struct PrimaryNameResponse {
    name: Option<String>,
}

/// Client for the primary-name lookup service.
#[derive(Debug, Clone)]
pub struct NameResolver {
    http: reqwest::Client,
    gateways: Vec<String>,
}

impl NameResolver {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .build()
            .context("failed to create HTTP client")?;

        let mut gateways = vec![config.name_gateway_url.clone()];
        if let Some(fallback) = &config.name_fallback_url {
            gateways.push(fallback.clone());
        }
        Ok(Self { http, gateways })
    }

    /// Primary name of `address`, or `None` when no name exists.
    ///
    /// A definitive not-found stops the search; transport failures and error
    /// statuses are logged and the next gateway is tried.
    pub async fn primary_name(&self, address: &str) -> Option<String> {
        let encoded = urlencoding::encode(address);

        for gateway in &self.gateways {
            let url = format!(
                "{}/api/v1/primary-names/{}",
                gateway.trim_end_matches('/'),
                encoded
            );
            match self.lookup(&url).await {
                Ok(Some(name)) => {
                    tracing::debug!(address = %address, name = %name, "primary name resolved");
                    return Some(name);
                }
                Ok(None) => {
                    tracing::debug!(address = %address, "address has no primary name");
                    return None;
                }
                Err(e) => {
                    tracing::warn!(gateway = %gateway, error = %e, "primary name lookup failed");
                }
            }
        }
        None
    }

    async fn lookup(&self, url: &str) -> anyhow::Result<Option<String>> {
        let response = self.http.get(url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            anyhow::bail!("status {}", response.status());
        }

        let body: PrimaryNameResponse = response.json().await?;
        Ok(body.name)
    }
}
