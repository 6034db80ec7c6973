//! Error types for URN validation, facade conversion and wire decoding.

use std::fmt;

use thiserror::Error;

use crate::model::Namespace;

/// The URN component a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Namespace,
    EntityType,
    EntityId,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Component::Namespace => "namespace",
            Component::EntityType => "entity type",
            Component::EntityId => "entity ID",
        })
    }
}

/// Why a value was rejected as a URN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatCause {
    #[error("{component} cannot be empty")]
    EmptyComponent { component: Component },

    #[error("namespace '{}' is not one of [{}]", .namespace, Namespace::accepted_list())]
    UnknownNamespace { namespace: String },

    #[error("invalid scheme '{found}', expected '{expected}'")]
    InvalidScheme {
        found: String,
        expected: &'static str,
    },

    #[error("expected {expected} parts, but got {found}")]
    PartCount { expected: usize, found: usize },
}

/// Error returned by URN construction and parsing.
///
/// There is a single kind, `InvalidFormat`; the [`FormatCause`] says which
/// rule was broken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrnError {
    #[error("invalid URN format: {0}")]
    InvalidFormat(FormatCause),
}

impl UrnError {
    pub(crate) fn empty(component: Component) -> Self {
        UrnError::InvalidFormat(FormatCause::EmptyComponent { component })
    }

    /// Returns the rule that was broken.
    pub fn cause(&self) -> &FormatCause {
        match self {
            UrnError::InvalidFormat(cause) => cause,
        }
    }
}

/// Error converting a wire message into its in-process facade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("failed to convert URN from wire record: {0}")]
    UrnRecord(#[source] UrnError),

    #[error("failed to parse {field}: {source}")]
    Field {
        field: &'static str,
        #[source]
        source: UrnError,
    },

    #[error("failed to parse nested {field}: {source}")]
    Nested {
        field: &'static str,
        #[source]
        source: Box<ConvertError>,
    },

    #[error("failed to parse {item} at index {index}: {source}")]
    Item {
        item: &'static str,
        index: usize,
        #[source]
        source: Box<ConvertError>,
    },
}

impl ConvertError {
    /// Returns the URN error at the bottom of the chain.
    pub fn urn_error(&self) -> &UrnError {
        match self {
            ConvertError::UrnRecord(err) | ConvertError::Field { source: err, .. } => err,
            ConvertError::Nested { source, .. } | ConvertError::Item { source, .. } => {
                source.urn_error()
            }
        }
    }
}

/// Error decoding a binary wire message into a facade.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("malformed wire message: {0}")]
    Wire(#[from] prost::DecodeError),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}
