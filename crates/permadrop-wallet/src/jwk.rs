//! JWK wallet credentials.
//!
//! A wallet keyfile holds an RSA key in JWK form. Only the public owner
//! modulus is read here (for address derivation); private components ride
//! along untouched for the bundling service and are redacted from `Debug`
//! output.

use std::fmt;

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::traits::{WalletError, WalletResult};

/// RSA key in JWK form, as stored in a wallet keyfile.
#[derive(Clone, Serialize, Deserialize)]
pub struct Jwk {
    pub kty: String,
    /// Public exponent.
    pub e: String,
    /// Public owner modulus; the wallet address derives from this.
    pub n: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dq: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qi: Option<String>,
}

impl Jwk {
    /// Derive the wallet address: base64url(SHA-256(owner modulus bytes)),
    /// unpadded. Always 43 characters for RSA-4096 wallets.
    pub fn address(&self) -> WalletResult<String> {
        if self.n.is_empty() {
            return Err(WalletError::NoActiveAddress);
        }
        let owner = URL_SAFE_NO_PAD.decode(self.n.as_bytes()).map_err(|e| {
            WalletError::InvalidWallet(format!("owner modulus is not base64url: {}", e))
        })?;
        let digest = Sha256::digest(&owner);
        Ok(URL_SAFE_NO_PAD.encode(digest))
    }
}

impl fmt::Debug for Jwk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Private components stay out of logs.
        f.debug_struct("Jwk")
            .field("kty", &self.kty)
            .field("n", &format_args!("[{} chars]", self.n.len()))
            .finish_non_exhaustive()
    }
}

/// Parse a wallet credential from raw JSON or base64-encoded JSON.
pub fn parse_wallet(input: &str) -> WalletResult<Jwk> {
    if let Ok(jwk) = serde_json::from_str::<Jwk>(input) {
        return Ok(jwk);
    }

    let decoded = STANDARD
        .decode(input.trim())
        .map_err(|_| invalid_format())?;
    serde_json::from_slice(&decoded).map_err(|_| invalid_format())
}

fn invalid_format() -> WalletError {
    WalletError::InvalidWallet("credential must be JSON or base64-encoded JSON".to_string())
}

/// Deterministic JWK fixture shared by the crate's tests.
#[cfg(test)]
pub(crate) fn sample_jwk() -> Jwk {
    Jwk {
        kty: "RSA".to_string(),
        e: "AQAB".to_string(),
        n: URL_SAFE_NO_PAD.encode([7u8; 512]),
        d: Some("c2VjcmV0".to_string()),
        p: None,
        q: None,
        dp: None,
        dq: None,
        qi: None,
    }
}
