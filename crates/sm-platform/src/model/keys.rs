//! Public key bundle facade.

use serde::{Deserialize, Serialize};

use crate::util::base64_bytes;

/// A user's published public keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeys {
    /// Raw SPKI bytes of the public encryption key (RSA-OAEP).
    #[serde(
        default,
        alias = "enc_key",
        with = "base64_bytes",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub enc_key: Vec<u8>,

    /// Raw SPKI bytes of the public signing key (RSA-PSS). Recipients use it
    /// to verify sealed-sender envelopes.
    #[serde(
        default,
        alias = "sig_key",
        with = "base64_bytes",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub sig_key: Vec<u8>,
}
