//! Identifiers and data facades for the secure messaging platform.
//!
//! This crate converts between protobuf wire messages and idiomatic
//! in-process value types, and gives those types a stable JSON encoding
//! (camelCase on output, tolerant on input).
//!
//! # Overview
//!
//! Everything that addresses a user or group carries a [`Urn`]:
//! - **Text form**: `urn:<namespace>:<entity type>:<entity id>`
//! - **Legacy form**: a bare token such as `alice-123`, accepted on input
//!   and migrated to `urn:sm:user:alice-123`
//! - **JSON form**: the text form as a string, or `null` for the zero value
//! - **Wire form**: a [`UrnPb`](wire::UrnPb) record, absent for the zero value
//!
//! # Quick Start
//!
//! ```rust
//! use sm_platform::codec::{decode, encode};
//! use sm_platform::{SecureEnvelope, Urn};
//!
//! let recipient = Urn::parse("urn:sm:user:alice-123").unwrap();
//! assert_eq!(recipient.entity_id(), "alice-123");
//!
//! let envelope = SecureEnvelope {
//!     recipient_id: recipient,
//!     encrypted_data: vec![1, 2, 3],
//!     ..Default::default()
//! };
//!
//! // Protobuf bytes
//! let bytes = encode(&envelope);
//! let decoded: SecureEnvelope = decode(&bytes).unwrap();
//! assert_eq!(decoded, envelope);
//!
//! // Legacy identifiers are migrated on the way in
//! assert_eq!(Urn::parse("bob").unwrap().to_string(), "urn:sm:user:bob");
//! ```
//!
//! # Modules
//!
//! - [`model`]: URN value type and facades (envelopes, users, keys,
//!   notifications, routing)
//! - [`wire`]: protobuf messages
//! - [`codec`]: facade/wire conversion and binary encoding
//! - [`error`]: error types
//! - [`util`]: serde helpers for the JSON mapping

pub mod codec;
pub mod error;
pub mod model;
pub mod util;
pub mod wire;

// Re-export commonly used types at crate root
pub use codec::{Facade, decode, encode};
pub use error::{Component, ConvertError, DecodeError, FormatCause, UrnError};
pub use model::{
    ConnectionInfo, DEFAULT_NAMESPACE, DeviceToken, ENTITY_TYPE_GROUP, ENTITY_TYPE_USER,
    Namespace, NotificationContent, NotificationRequest, PublicKeys, QueuedMessage,
    QueuedMessageList, SCHEME, SecureEnvelope, SecureEnvelopeList, Urn, User, WebPushKeys,
    WebPushSubscription,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
