//! Environment-variable wallet strategy.
//!
//! Reads an inline credential (raw JSON or base64-encoded JSON) from an
//! environment variable at session time, so a rotated credential is picked
//! up without restarting anything.

use async_trait::async_trait;

use crate::jwk::parse_wallet;
use crate::signer::ArweaveSigner;
use crate::traits::{
    Permission, Wallet, WalletError, WalletResult, WalletSession, WalletStrategy,
};

/// Variable the factory and CLI look at by default.
pub const DEFAULT_WALLET_VAR: &str = "PERMADROP_WALLET";

/// Wallet backed by an inline credential in the environment.
#[derive(Debug)]
pub struct EnvWallet {
    var: String,
}

impl EnvWallet {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn from_default_var() -> Self {
        Self::new(DEFAULT_WALLET_VAR)
    }
}

#[async_trait]
impl Wallet for EnvWallet {
    async fn request_session(&self, permissions: &[Permission]) -> WalletResult<WalletSession> {
        let raw = std::env::var(&self.var).map_err(|_| {
            WalletError::NotFound(format!("environment variable {} is not set", self.var))
        })?;
        let jwk = parse_wallet(&raw)?;
        let address = jwk.address()?;

        tracing::debug!(
            address = %address,
            var = %self.var,
            scopes = ?permissions.iter().map(Permission::scope).collect::<Vec<_>>(),
            "env wallet session opened"
        );
        Ok(WalletSession::new(address, ArweaveSigner::new(jwk)))
    }

    fn strategy(&self) -> WalletStrategy {
        WalletStrategy::Env
    }
}
