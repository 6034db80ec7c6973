//! In-process value types.
//!
//! - Identifiers ([`Urn`], [`Namespace`])
//! - Envelopes (encrypted payloads and lists of them)
//! - Users and public keys
//! - Notification jobs
//! - Routing (queued messages, connections)

pub mod envelope;
pub mod keys;
pub mod namespace;
pub mod notification;
pub mod routing;
pub mod urn;
pub mod user;

pub use envelope::{SecureEnvelope, SecureEnvelopeList};
pub use keys::PublicKeys;
pub use namespace::{DEFAULT_NAMESPACE, Namespace};
pub use notification::{NotificationContent, NotificationRequest, WebPushKeys, WebPushSubscription};
pub use routing::{ConnectionInfo, DeviceToken, QueuedMessage, QueuedMessageList};
pub use urn::{DELIMITER, ENTITY_TYPE_GROUP, ENTITY_TYPE_USER, SCHEME, URN_PARTS, Urn};
pub use user::User;
