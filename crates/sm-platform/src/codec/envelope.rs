//! [`SecureEnvelope`] and [`SecureEnvelopeList`] wire conversion.

use crate::codec::urn::parse_field;
use crate::codec::{Facade, items_from_wire};
use crate::error::ConvertError;
use crate::model::{SecureEnvelope, SecureEnvelopeList};
use crate::wire::{SecureEnvelopeListPb, SecureEnvelopePb};

impl Facade for SecureEnvelope {
    type Wire = SecureEnvelopePb;

    fn to_wire(&self) -> SecureEnvelopePb {
        SecureEnvelopePb {
            recipient_id: self.recipient_id.to_string(),
            encrypted_data: self.encrypted_data.clone(),
            encrypted_symmetric_key: self.encrypted_symmetric_key.clone(),
            signature: self.signature.clone(),
            priority: self.priority,
        }
    }

    fn from_wire(wire: SecureEnvelopePb) -> Result<Self, ConvertError> {
        Ok(SecureEnvelope {
            recipient_id: parse_field("recipient id", &wire.recipient_id)?,
            priority: wire.priority,
            encrypted_data: wire.encrypted_data,
            encrypted_symmetric_key: wire.encrypted_symmetric_key,
            signature: wire.signature,
        })
    }
}

impl Facade for SecureEnvelopeList {
    type Wire = SecureEnvelopeListPb;

    fn to_wire(&self) -> SecureEnvelopeListPb {
        SecureEnvelopeListPb {
            envelopes: self.envelopes.iter().map(SecureEnvelope::to_wire).collect(),
        }
    }

    fn from_wire(wire: SecureEnvelopeListPb) -> Result<Self, ConvertError> {
        Ok(SecureEnvelopeList {
            envelopes: items_from_wire("envelope", wire.envelopes)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, encode};
    use crate::error::{DecodeError, FormatCause};
    use crate::model::envelope::tests::test_envelope;

    #[test]
    fn test_wire_roundtrip() {
        let env = test_envelope("urn:contacts:user:recipient-bob");
        let pb = env.to_wire();
        assert_eq!(pb.recipient_id, "urn:contacts:user:recipient-bob");
        assert_eq!(pb.encrypted_data, vec![1, 2, 3]);
        assert_eq!(SecureEnvelope::from_wire(pb).unwrap(), env);
    }

    #[test]
    fn test_absent_envelope() {
        assert_eq!(SecureEnvelope::from_wire_opt(None).unwrap(), None);
    }

    #[test]
    fn test_legacy_recipient_is_migrated() {
        let pb = SecureEnvelopePb {
            recipient_id: "bob".to_string(),
            ..Default::default()
        };
        let env = SecureEnvelope::from_wire(pb).unwrap();
        assert_eq!(env.recipient_id.to_string(), "urn:sm:user:bob");
    }

    #[test]
    fn test_bad_recipient_has_context() {
        let pb = SecureEnvelopePb {
            recipient_id: "urn:sm:user".to_string(),
            ..Default::default()
        };
        let err = SecureEnvelope::from_wire(pb).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse recipient id: invalid URN format"));
    }

    #[test]
    fn test_list_reports_failing_index() {
        let good = test_envelope("urn:sm:user:a").to_wire();
        let bad = SecureEnvelopePb {
            recipient_id: "urn:nowhere:user:b".to_string(),
            ..Default::default()
        };
        let err = SecureEnvelopeList::from_wire(SecureEnvelopeListPb {
            envelopes: vec![good, bad],
        })
        .unwrap_err();
        assert!(matches!(err, ConvertError::Item { index: 1, .. }));
        assert!(matches!(
            err.urn_error().cause(),
            FormatCause::UnknownNamespace { .. }
        ));
    }

    #[test]
    fn test_binary_roundtrip() {
        let list = SecureEnvelopeList {
            envelopes: vec![
                test_envelope("urn:sm:user:a"),
                test_envelope("urn:contacts:user:b"),
            ],
        };
        let bytes = encode(&list);
        assert_eq!(decode::<SecureEnvelopeList>(&bytes).unwrap(), list);
    }

    #[test]
    fn test_decode_malformed_bytes() {
        let result = decode::<SecureEnvelope>(&[0xff, 0xff, 0xff]);
        assert!(matches!(result, Err(DecodeError::Wire(_))));
    }

    #[test]
    fn test_decode_invalid_urn() {
        let bytes = prost::Message::encode_to_vec(&SecureEnvelopePb {
            recipient_id: "bad:sm:user:x".to_string(),
            ..Default::default()
        });
        let result = decode::<SecureEnvelope>(&bytes);
        assert!(matches!(result, Err(DecodeError::Convert(ConvertError::Field { .. }))));
    }
}
