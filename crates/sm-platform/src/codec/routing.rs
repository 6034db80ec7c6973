//! [`QueuedMessage`] and [`QueuedMessageList`] wire conversion.

use crate::codec::{Facade, items_from_wire};
use crate::error::ConvertError;
use crate::model::{QueuedMessage, QueuedMessageList, SecureEnvelope};
use crate::wire::{QueuedMessageListPb, QueuedMessagePb};

impl Facade for QueuedMessage {
    type Wire = QueuedMessagePb;

    fn to_wire(&self) -> QueuedMessagePb {
        QueuedMessagePb {
            id: self.id.clone(),
            envelope: self.envelope.as_ref().map(SecureEnvelope::to_wire),
        }
    }

    fn from_wire(wire: QueuedMessagePb) -> Result<Self, ConvertError> {
        let envelope =
            SecureEnvelope::from_wire_opt(wire.envelope).map_err(|source| ConvertError::Nested {
                field: "envelope",
                source: Box::new(source),
            })?;
        Ok(QueuedMessage {
            id: wire.id,
            envelope,
        })
    }
}

impl Facade for QueuedMessageList {
    type Wire = QueuedMessageListPb;

    fn to_wire(&self) -> QueuedMessageListPb {
        QueuedMessageListPb {
            messages: self.messages.iter().map(QueuedMessage::to_wire).collect(),
        }
    }

    fn from_wire(wire: QueuedMessageListPb) -> Result<Self, ConvertError> {
        Ok(QueuedMessageList {
            messages: items_from_wire("message", wire.messages)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, encode};
    use crate::model::envelope::tests::test_envelope;
    use crate::wire::SecureEnvelopePb;

    fn test_list() -> QueuedMessageList {
        QueuedMessageList {
            messages: vec![
                QueuedMessage {
                    id: "q-1".to_string(),
                    envelope: Some(test_envelope("urn:sm:user:recipient-bob")),
                },
                QueuedMessage {
                    id: "q-2".to_string(),
                    envelope: Some(test_envelope("urn:sm:user:recipient-alice")),
                },
            ],
        }
    }

    #[test]
    fn test_list_wire_roundtrip() {
        let list = test_list();
        let pb = list.to_wire();
        assert_eq!(pb.messages.len(), 2);
        assert_eq!(pb.messages[0].id, "q-1");
        assert_eq!(pb.messages[1].id, "q-2");
        assert_eq!(QueuedMessageList::from_wire(pb).unwrap(), list);
    }

    #[test]
    fn test_message_without_envelope() {
        let msg = QueuedMessage {
            id: "q-3".to_string(),
            envelope: None,
        };
        let pb = msg.to_wire();
        assert!(pb.envelope.is_none());
        assert_eq!(QueuedMessage::from_wire(pb).unwrap(), msg);
    }

    #[test]
    fn test_nested_error_is_wrapped() {
        let pb = QueuedMessageListPb {
            messages: vec![QueuedMessagePb {
                id: "q-1".to_string(),
                envelope: Some(SecureEnvelopePb {
                    recipient_id: "urn:sm:user:".to_string(),
                    ..Default::default()
                }),
            }],
        };
        let err = QueuedMessageList::from_wire(pb).unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to parse message at index 0: failed to parse nested envelope: \
             failed to parse recipient id: invalid URN format: entity ID cannot be empty"
        );
    }

    #[test]
    fn test_binary_roundtrip() {
        let list = test_list();
        assert_eq!(decode::<QueuedMessageList>(&encode(&list)).unwrap(), list);
    }
}
