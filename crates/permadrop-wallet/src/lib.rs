//! Permadrop wallet library
//!
//! Wallet capability abstraction and its strategies: a keyfile on disk and
//! an inline environment credential. Wallets produce per-call sessions with
//! an address and an opaque signer; signing and content-addressing happen in
//! the bundling service, never here.

pub mod env;
pub mod factory;
pub mod jwk;
pub mod keyfile;
pub mod signer;
pub mod traits;

pub use env::EnvWallet;
pub use factory::create_wallet;
pub use jwk::{parse_wallet, Jwk};
pub use keyfile::KeyfileWallet;
pub use signer::ArweaveSigner;
pub use traits::{
    Permission, Wallet, WalletError, WalletResult, WalletSession, WalletStrategy,
    UPLOAD_PERMISSIONS,
};
