//! Shared fixtures for client integration tests.

use std::sync::Arc;

use permadrop_client::Uploader;
use permadrop_core::Config;
use permadrop_wallet::{Jwk, KeyfileWallet};
use wiremock::MockServer;

/// JWK fixture with a deterministic owner modulus.
pub fn test_jwk() -> Jwk {
    Jwk {
        kty: "RSA".to_string(),
        e: "AQAB".to_string(),
        // base64url of a fixed 16-byte modulus; real wallets carry 512 bytes
        n: "MDEyMzQ1Njc4OWFiY2RlZg".to_string(),
        d: Some("c2VjcmV0".to_string()),
        p: None,
        q: None,
        dp: None,
        dq: None,
        qi: None,
    }
}

/// Raw JSON credential for the fixture wallet.
pub fn test_credential() -> String {
    serde_json::to_string(&test_jwk()).unwrap()
}

/// Config pointed at the mock bundling and naming service.
pub fn test_config(server: &MockServer) -> Config {
    Config {
        bundler_url: server.uri(),
        name_gateway_url: server.uri(),
        ..Config::default()
    }
}

/// Uploader wired to a keyfile wallet under `dir` and the mock service.
pub async fn test_uploader(server: &MockServer, dir: &tempfile::TempDir) -> Uploader {
    let wallet_path = dir.path().join("wallet.json");
    std::fs::write(&wallet_path, test_credential()).unwrap();
    let wallet = KeyfileWallet::load(&wallet_path).await.unwrap();
    Uploader::new(Arc::new(wallet), test_config(server))
}

/// Byte-wise substring search over a recorded request body.
pub fn body_contains(haystack: &[u8], needle: &str) -> bool {
    let needle = needle.as_bytes();
    haystack.windows(needle.len()).any(|window| window == needle)
}
