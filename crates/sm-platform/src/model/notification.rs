//! Push notification jobs.
//!
//! A [`NotificationRequest`] travels between services as a
//! [`NotificationRequestPb`](crate::wire::NotificationRequestPb), which
//! carries only the recipient, content and data payload. Delivery targets
//! (FCM tokens, Web Push subscriptions) are looked up by the notifier and
//! live only on the in-process value and its JSON form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::Urn;
use crate::util::nullable;

/// User-visible content of a push notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationContent {
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub body: String,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub sound: String,
}

/// Encryption keys of a Web Push subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebPushKeys {
    #[serde(default, deserialize_with = "nullable")]
    pub p256dh: String,
    #[serde(default, deserialize_with = "nullable")]
    pub auth: String,
}

/// A browser Web Push subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebPushSubscription {
    #[serde(default, deserialize_with = "nullable")]
    pub endpoint: String,
    #[serde(default, deserialize_with = "nullable")]
    pub keys: WebPushKeys,
}

/// A push notification job for one recipient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    #[serde(default, alias = "recipient_id", skip_serializing_if = "Urn::is_zero")]
    pub recipient_id: Urn,

    #[serde(
        default,
        alias = "fcm_tokens",
        deserialize_with = "nullable",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub fcm_tokens: Vec<String>,

    #[serde(
        default,
        alias = "web_subscriptions",
        deserialize_with = "nullable",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub web_subscriptions: Vec<WebPushSubscription>,

    #[serde(default, deserialize_with = "nullable")]
    pub content: NotificationContent,

    #[serde(
        default,
        alias = "data_payload",
        deserialize_with = "nullable",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub data_payload: BTreeMap<String, String>,
}
