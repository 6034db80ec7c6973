//! Protobuf wire messages.
//!
//! These mirror the platform's `.proto` definitions field for field and are
//! written the way `prost-build` emits them, so no `protoc` is needed at
//! build time. Application code should use the facades in [`crate::model`]
//! and convert through [`crate::codec::Facade`].

use std::collections::HashMap;

/// Structured URN record. The scheme is constant and not transmitted.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct UrnPb {
    #[prost(string, tag = "1")]
    pub namespace: String,
    #[prost(string, tag = "2")]
    pub entity_type: String,
    #[prost(string, tag = "3")]
    pub entity_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SecureEnvelopePb {
    #[prost(string, tag = "1")]
    pub recipient_id: String,
    #[prost(bytes = "vec", tag = "2")]
    pub encrypted_data: Vec<u8>,
    #[prost(bytes = "vec", tag = "3")]
    pub encrypted_symmetric_key: Vec<u8>,
    #[prost(bytes = "vec", tag = "4")]
    pub signature: Vec<u8>,
    #[prost(int32, tag = "5")]
    pub priority: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SecureEnvelopeListPb {
    #[prost(message, repeated, tag = "1")]
    pub envelopes: Vec<SecureEnvelopePb>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UserPb {
    #[prost(string, tag = "1")]
    pub alias: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub email: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PublicKeysPb {
    /// SPKI bytes of the public encryption key (RSA-OAEP).
    #[prost(bytes = "vec", tag = "1")]
    pub enc_key: Vec<u8>,
    /// SPKI bytes of the public signing key (RSA-PSS).
    #[prost(bytes = "vec", tag = "2")]
    pub sig_key: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NotificationContentPb {
    #[prost(string, tag = "1")]
    pub title: String,
    #[prost(string, tag = "2")]
    pub body: String,
    #[prost(string, tag = "3")]
    pub sound: String,
}

/// Push notification job. Device tokens are resolved by the notifier and
/// are not part of the message.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NotificationRequestPb {
    #[prost(string, tag = "1")]
    pub recipient_id: String,
    #[prost(message, optional, tag = "2")]
    pub content: Option<NotificationContentPb>,
    #[prost(map = "string, string", tag = "3")]
    pub data_payload: HashMap<String, String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueuedMessagePb {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(message, optional, tag = "2")]
    pub envelope: Option<SecureEnvelopePb>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueuedMessageListPb {
    #[prost(message, repeated, tag = "1")]
    pub messages: Vec<QueuedMessagePb>,
}
