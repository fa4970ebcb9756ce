//! Wallet construction from configuration.

use std::sync::Arc;

use permadrop_core::Config;

use crate::env::{EnvWallet, DEFAULT_WALLET_VAR};
use crate::keyfile::KeyfileWallet;
use crate::traits::{Wallet, WalletError, WalletResult};

/// Select and construct a wallet strategy from configuration.
///
/// A configured keyfile path wins; otherwise the inline environment wallet
/// is used when its variable is set. With neither present the environment
/// holds no wallet capability at all.
pub async fn create_wallet(config: &Config) -> WalletResult<Arc<dyn Wallet>> {
    if let Some(path) = &config.wallet_path {
        let wallet = KeyfileWallet::load(path).await?;
        tracing::info!(path = %wallet.path().display(), "using keyfile wallet");
        return Ok(Arc::new(wallet));
    }

    if std::env::var(DEFAULT_WALLET_VAR).is_ok() {
        tracing::info!(var = DEFAULT_WALLET_VAR, "using environment wallet");
        return Ok(Arc::new(EnvWallet::from_default_var()));
    }

    Err(WalletError::NotFound(format!(
        "no wallet configured: set PERMADROP_WALLET_FILE or {}",
        DEFAULT_WALLET_VAR
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwk::sample_jwk;
    use crate::traits::WalletStrategy;

    #[tokio::test]
    async fn keyfile_path_selects_the_keyfile_strategy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.json");
        std::fs::write(&path, serde_json::to_string(&sample_jwk()).unwrap()).unwrap();

        let config = Config {
            wallet_path: Some(path),
            ..Config::default()
        };
        let wallet = create_wallet(&config).await.unwrap();
        assert_eq!(wallet.strategy(), WalletStrategy::Keyfile);
    }

    #[tokio::test]
    async fn missing_keyfile_fails_instead_of_falling_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            wallet_path: Some(dir.path().join("gone.json")),
            ..Config::default()
        };
        let err = create_wallet(&config).await.unwrap_err();
        assert!(matches!(err, WalletError::NotFound(_)));
    }
}
