//! Routing types: queued envelopes and live connection bookkeeping.

use serde::{Deserialize, Serialize};

use crate::model::SecureEnvelope;
use crate::util::nullable;

/// Where a user is connected for real-time delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionInfo {
    #[serde(default, alias = "server_instance_id", deserialize_with = "nullable")]
    pub server_instance_id: String,
    /// Unix timestamp, seconds.
    #[serde(default, alias = "connected_at", deserialize_with = "nullable")]
    pub connected_at: i64,
}

/// A push token for one of a user's devices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceToken {
    #[serde(default, deserialize_with = "nullable")]
    pub token: String,
    /// e.g. `"ios"`, `"android"`.
    #[serde(default, deserialize_with = "nullable")]
    pub platform: String,
}

/// An envelope waiting in a recipient's queue, tagged with the router's ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueuedMessage {
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envelope: Option<SecureEnvelope>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueuedMessageList {
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<QueuedMessage>,
}
