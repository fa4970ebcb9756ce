//! Keyfile wallet strategy.
//!
//! Loads a JWK from a `wallet.json`-style file on disk. The file is read
//! once at construction; sessions after that are instant and never prompt.

use std::fmt;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::jwk::{parse_wallet, Jwk};
use crate::signer::ArweaveSigner;
use crate::traits::{
    Permission, Wallet, WalletError, WalletResult, WalletSession, WalletStrategy,
};

/// Wallet backed by a JWK keyfile on disk.
pub struct KeyfileWallet {
    path: PathBuf,
    jwk: Jwk,
}

impl KeyfileWallet {
    /// Load a wallet keyfile. An unreadable file maps to `NotFound`,
    /// unparseable contents to `InvalidWallet`.
    pub async fn load(path: impl AsRef<Path>) -> WalletResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).await.map_err(|e| {
            WalletError::NotFound(format!("wallet keyfile {}: {}", path.display(), e))
        })?;
        let jwk = parse_wallet(&raw)?;

        tracing::debug!(path = %path.display(), "wallet keyfile loaded");
        Ok(Self {
            path: path.to_path_buf(),
            jwk,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Debug for KeyfileWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyfileWallet")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Wallet for KeyfileWallet {
    async fn request_session(&self, permissions: &[Permission]) -> WalletResult<WalletSession> {
        // A local keyfile grants every scope; there is nobody to prompt.
        let address = self.jwk.address()?;
        tracing::debug!(
            address = %address,
            scopes = ?permissions.iter().map(Permission::scope).collect::<Vec<_>>(),
            "keyfile wallet session opened"
        );
        Ok(WalletSession::new(
            address,
            ArweaveSigner::new(self.jwk.clone()),
        ))
    }

    fn strategy(&self) -> WalletStrategy {
        WalletStrategy::Keyfile
    }
}
