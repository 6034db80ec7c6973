//! Conversion between facades and their wire messages.
//!
//! Every facade implements [`Facade`]. [`encode`] and [`decode`] go all the
//! way to and from protobuf bytes. URN fields are carried as canonical
//! strings on the wire, so legacy bare identifiers in incoming messages are
//! migrated during decode.

pub mod envelope;
pub mod keys;
pub mod notification;
pub mod routing;
pub mod urn;
pub mod user;

use prost::Message;

use crate::error::{ConvertError, DecodeError};

/// An in-process value with a protobuf wire counterpart.
pub trait Facade: Sized {
    type Wire: Message + Default;

    /// Converts to the wire message. Never fails.
    fn to_wire(&self) -> Self::Wire;

    /// Converts from the wire message, validating every URN it carries.
    fn from_wire(wire: Self::Wire) -> Result<Self, ConvertError>;

    /// Maps an absent wire message to `None`.
    fn from_wire_opt(wire: Option<Self::Wire>) -> Result<Option<Self>, ConvertError> {
        wire.map(Self::from_wire).transpose()
    }
}

/// Encodes a facade as protobuf bytes.
pub fn encode<F: Facade>(value: &F) -> Vec<u8> {
    value.to_wire().encode_to_vec()
}

/// Decodes protobuf bytes into a facade.
pub fn decode<F: Facade>(bytes: &[u8]) -> Result<F, DecodeError> {
    let wire = F::Wire::decode(bytes)?;
    tracing::trace!(len = bytes.len(), "decoded wire message");
    Ok(F::from_wire(wire)?)
}

/// Converts a repeated wire field, tagging failures with the element index.
pub(crate) fn items_from_wire<F: Facade>(
    item: &'static str,
    wires: Vec<F::Wire>,
) -> Result<Vec<F>, ConvertError> {
    wires
        .into_iter()
        .enumerate()
        .map(|(index, wire)| {
            F::from_wire(wire).map_err(|source| ConvertError::Item {
                item,
                index,
                source: Box::new(source),
            })
        })
        .collect()
}
