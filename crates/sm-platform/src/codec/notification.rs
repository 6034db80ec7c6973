//! [`NotificationRequest`] wire conversion.
//!
//! FCM tokens and Web Push subscriptions are not part of the wire message:
//! `to_wire` drops them and `from_wire` leaves them empty.

use crate::codec::Facade;
use crate::codec::urn::parse_field;
use crate::error::ConvertError;
use crate::model::{NotificationContent, NotificationRequest};
use crate::wire::{NotificationContentPb, NotificationRequestPb};

impl Facade for NotificationRequest {
    type Wire = NotificationRequestPb;

    fn to_wire(&self) -> NotificationRequestPb {
        NotificationRequestPb {
            recipient_id: self.recipient_id.to_string(),
            content: Some(NotificationContentPb {
                title: self.content.title.clone(),
                body: self.content.body.clone(),
                sound: self.content.sound.clone(),
            }),
            data_payload: self
                .data_payload
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    fn from_wire(wire: NotificationRequestPb) -> Result<Self, ConvertError> {
        let recipient_id = parse_field("recipient URN", &wire.recipient_id)?;
        let content = wire
            .content
            .map(|c| NotificationContent {
                title: c.title,
                body: c.body,
                sound: c.sound,
            })
            .unwrap_or_default();

        Ok(NotificationRequest {
            recipient_id,
            fcm_tokens: Vec::new(),
            web_subscriptions: Vec::new(),
            content,
            data_payload: wire.data_payload.into_iter().collect(),
        })
    }
}
