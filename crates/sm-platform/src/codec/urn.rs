//! Structured wire form of [`Urn`].

use crate::error::ConvertError;
use crate::model::Urn;
use crate::wire::UrnPb;

impl Urn {
    /// Converts to the structured wire record.
    ///
    /// The zero value has no record at all rather than a record of empty
    /// strings.
    pub fn to_wire(&self) -> Option<UrnPb> {
        let namespace = self.namespace()?;
        Some(UrnPb {
            namespace: namespace.as_str().to_string(),
            entity_type: self.entity_type().to_string(),
            entity_id: self.entity_id().to_string(),
        })
    }

    /// Converts from the structured wire record; an absent record is the
    /// zero value.
    pub fn from_wire(record: Option<&UrnPb>) -> Result<Urn, ConvertError> {
        let Some(record) = record else {
            return Ok(Urn::default());
        };
        Urn::new(&record.namespace, record.entity_type.as_str(), record.entity_id.as_str())
            .map_err(|err| {
                tracing::debug!(error = %err, "rejected URN wire record");
                ConvertError::UrnRecord(err)
            })
    }
}

/// Parses a URN carried as a string field of a wire message.
pub(crate) fn parse_field(field: &'static str, text: &str) -> Result<Urn, ConvertError> {
    Urn::parse(text).map_err(|source| ConvertError::Field { field, source })
}
