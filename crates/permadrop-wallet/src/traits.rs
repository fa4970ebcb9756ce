//! Wallet capability abstraction.
//!
//! A [`Wallet`] turns a credential source into per-call sessions. Strategies
//! (keyfile, environment variable) are selected at configuration time via
//! the factory, so orchestration code never branches on where keys live.

use async_trait::async_trait;
use thiserror::Error;

use crate::signer::ArweaveSigner;

/// Wallet operation errors
#[derive(Debug, Error)]
pub enum WalletError {
    /// No wallet capability is available in the execution environment.
    #[error("Wallet not found: {0}")]
    NotFound(String),

    /// The wallet loaded but exposes no active address.
    #[error("No active wallet address")]
    NoActiveAddress,

    /// The credential is neither JSON nor base64-encoded JSON.
    #[error("Invalid wallet: {0}")]
    InvalidWallet(String),
}

/// Result type for wallet operations
pub type WalletResult<T> = Result<T, WalletError>;

/// Permission scopes requested when opening a session.
///
/// Local strategies grant every scope without prompting; interactive
/// strategies may prompt and block until the prompt resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    AccessAddress,
    AccessPublicKey,
    Signature,
    SignTransaction,
    Dispatch,
}

impl Permission {
    /// Wire name of the scope as wallet providers spell it.
    pub fn scope(&self) -> &'static str {
        match self {
            Permission::AccessAddress => "ACCESS_ADDRESS",
            Permission::AccessPublicKey => "ACCESS_PUBLIC_KEY",
            Permission::Signature => "SIGNATURE",
            Permission::SignTransaction => "SIGN_TRANSACTION",
            Permission::Dispatch => "DISPATCH",
        }
    }
}

/// Scopes the upload flow asks for.
pub const UPLOAD_PERMISSIONS: &[Permission] = &[
    Permission::AccessPublicKey,
    Permission::Signature,
    Permission::SignTransaction,
];

/// An open wallet session: the active address plus a signing credential.
///
/// Sessions are requested per upload call and never cached across calls, so
/// a wallet switch between uploads takes effect immediately.
#[derive(Debug, Clone)]
pub struct WalletSession {
    address: String,
    signer: ArweaveSigner,
}

impl WalletSession {
    pub fn new(address: String, signer: ArweaveSigner) -> Self {
        Self { address, signer }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn signer(&self) -> &ArweaveSigner {
        &self.signer
    }
}

/// Which credential source a wallet draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletStrategy {
    Keyfile,
    Env,
}

/// Wallet capability trait
///
/// Implementations own the credential source; callers only ever see sessions
/// and opaque signers, never raw key material.
#[async_trait]
pub trait Wallet: Send + Sync + std::fmt::Debug {
    /// Open a session with the given permission scopes.
    ///
    /// Interactive strategies may suspend here until the user answers the
    /// permission prompt; there is no timeout on that interaction.
    async fn request_session(&self, permissions: &[Permission]) -> WalletResult<WalletSession>;

    /// Which strategy this wallet uses.
    fn strategy(&self) -> WalletStrategy;
}
