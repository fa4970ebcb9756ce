//! Opaque signing credential consumed by the bundling service.

use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use crate::jwk::Jwk;
use crate::traits::WalletResult;

/// Signing credential handed to the bundling service with each upload.
///
/// The service applies signing and content-addressing on its side; nothing
/// in this workspace uses the key material directly.
#[derive(Clone)]
pub struct ArweaveSigner {
    jwk: Jwk,
}

impl ArweaveSigner {
    pub fn new(jwk: Jwk) -> Self {
        Self { jwk }
    }

    /// Public owner modulus of the underlying key.
    pub fn owner(&self) -> &str {
        &self.jwk.n
    }

    /// Address of the underlying wallet.
    pub fn address(&self) -> WalletResult<String> {
        self.jwk.address()
    }

    /// Bearer credential as transmitted to the bundling service.
    pub fn credential(&self) -> String {
        // A struct of plain strings always serializes.
        let json = serde_json::to_vec(&self.jwk).unwrap_or_default();
        URL_SAFE_NO_PAD.encode(json)
    }
}

impl fmt::Debug for ArweaveSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArweaveSigner")
            .field("owner", &format_args!("[{} chars]", self.jwk.n.len()))
            .finish()
    }
}
