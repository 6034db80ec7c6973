//! Secure envelopes: the encrypted payload addressed to a single recipient.

use serde::{Deserialize, Serialize};

use crate::model::Urn;
use crate::util::{base64_bytes, nullable};

/// An end-to-end encrypted message addressed to one recipient.
///
/// The platform never sees plaintext; it only routes on `recipient_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecureEnvelope {
    #[serde(default, alias = "recipient_id", skip_serializing_if = "Urn::is_zero")]
    pub recipient_id: Urn,

    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "is_zero_i32"
    )]
    pub priority: i32,

    #[serde(
        default,
        alias = "encrypted_data",
        with = "base64_bytes",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub encrypted_data: Vec<u8>,

    #[serde(
        default,
        alias = "encrypted_symmetric_key",
        with = "base64_bytes",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub encrypted_symmetric_key: Vec<u8>,

    #[serde(
        default,
        with = "base64_bytes",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub signature: Vec<u8>,
}

/// A batch of envelopes, e.g. a page fetched from a recipient's queue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecureEnvelopeList {
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub envelopes: Vec<SecureEnvelope>,
}

pub(crate) fn is_zero_i32(v: &i32) -> bool {
    *v == 0
}
