//! The closed set of namespaces a URN may live in.

use std::fmt;
use std::str::FromStr;

use crate::error::{FormatCause, UrnError};

/// A recognized URN namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Namespace {
    /// Secure messaging: users, groups and devices exchanging envelopes.
    SecureMessaging,
    /// Authentication and session identities.
    Auth,
    /// Contact lookup.
    Contacts,
}

/// Namespace assigned to legacy bare identifiers during migration.
pub const DEFAULT_NAMESPACE: Namespace = Namespace::SecureMessaging;

impl Namespace {
    /// Every accepted namespace, in canonical order.
    pub const ALL: [Namespace; 3] = [Namespace::SecureMessaging, Namespace::Auth, Namespace::Contacts];

    /// Returns the tag used in the text and wire forms.
    pub const fn as_str(self) -> &'static str {
        match self {
            Namespace::SecureMessaging => "sm",
            Namespace::Auth => "auth",
            Namespace::Contacts => "contacts",
        }
    }

    /// Looks up a namespace by its tag.
    pub fn from_tag(tag: &str) -> Option<Namespace> {
        Self::ALL.into_iter().find(|ns| ns.as_str() == tag)
    }

    /// Comma-separated list of accepted tags, for error messages.
    pub fn accepted_list() -> String {
        Self::ALL.map(Namespace::as_str).join(", ")
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Namespace {
    type Err = UrnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Namespace::from_tag(s).ok_or_else(|| {
            UrnError::InvalidFormat(FormatCause::UnknownNamespace {
                namespace: s.to_string(),
            })
        })
    }
}
