//! Namespaced URN identifiers.
//!
//! A URN addresses a user, group or other entity across the platform:
//!
//! ```text
//! urn:<namespace>:<entity type>:<entity id>
//! ```
//!
//! A [`Urn`] is either the zero value (the "absent" identifier, printed as
//! the empty string and encoded as JSON `null`) or fully populated with an
//! accepted namespace and non-empty entity type and ID. No other state can
//! be constructed.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Component, FormatCause, UrnError};
use crate::model::namespace::{DEFAULT_NAMESPACE, Namespace};

/// Scheme literal that starts every non-zero URN.
pub const SCHEME: &str = "urn";

/// Separator between URN components.
pub const DELIMITER: char = ':';

/// Number of components in the canonical text form.
pub const URN_PARTS: usize = 4;

/// Entity type for users.
pub const ENTITY_TYPE_USER: &str = "user";

/// Entity type for groups.
pub const ENTITY_TYPE_GROUP: &str = "group";

/// A validated, immutable URN.
///
/// `Urn::default()` is the zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Urn {
    parts: Option<Parts>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct Parts {
    namespace: Namespace,
    entity_type: String,
    entity_id: String,
}

impl Urn {
    /// Builds a URN from its three variable components.
    ///
    /// Fails if any component is empty or the namespace is not one of
    /// [`Namespace::ALL`].
    pub fn new(
        namespace: &str,
        entity_type: impl Into<String>,
        entity_id: impl Into<String>,
    ) -> Result<Urn, UrnError> {
        let entity_type = entity_type.into();
        let entity_id = entity_id.into();

        if namespace.is_empty() {
            return Err(UrnError::empty(Component::Namespace));
        }
        if entity_type.is_empty() {
            return Err(UrnError::empty(Component::EntityType));
        }
        if entity_id.is_empty() {
            return Err(UrnError::empty(Component::EntityId));
        }
        let namespace = namespace.parse::<Namespace>()?;

        Ok(Urn {
            parts: Some(Parts {
                namespace,
                entity_type,
                entity_id,
            }),
        })
    }

    /// Parses the text form.
    ///
    /// - `""` yields the zero value.
    /// - A token without any `:` is a legacy bare identifier and becomes
    ///   `urn:sm:user:<token>`.
    /// - Otherwise exactly four parts are required, the first being `urn`.
    pub fn parse(s: &str) -> Result<Urn, UrnError> {
        if s.is_empty() {
            return Ok(Urn::default());
        }

        let parts: Vec<&str> = s.split(DELIMITER).collect();
        match parts.as_slice() {
            [bare] => {
                tracing::debug!(entity_id = %bare, "migrating legacy bare identifier");
                Urn::new(DEFAULT_NAMESPACE.as_str(), ENTITY_TYPE_USER, *bare)
            }
            [scheme, namespace, entity_type, entity_id] => {
                if *scheme != SCHEME {
                    return Err(UrnError::InvalidFormat(FormatCause::InvalidScheme {
                        found: scheme.to_string(),
                        expected: SCHEME,
                    }));
                }
                Urn::new(namespace, *entity_type, *entity_id)
            }
            _ => Err(UrnError::InvalidFormat(FormatCause::PartCount {
                expected: URN_PARTS,
                found: parts.len(),
            })),
        }
    }

    /// Returns true for the zero ("absent") value.
    pub fn is_zero(&self) -> bool {
        self.parts.is_none()
    }

    /// Returns `"urn"`, or `""` for the zero value.
    pub fn scheme(&self) -> &'static str {
        if self.is_zero() { "" } else { SCHEME }
    }

    /// Returns the namespace, or `None` for the zero value.
    pub fn namespace(&self) -> Option<Namespace> {
        self.parts.as_ref().map(|p| p.namespace)
    }

    /// Returns the entity type (e.g. `"user"`), or `""` for the zero value.
    pub fn entity_type(&self) -> &str {
        self.parts.as_ref().map_or("", |p| p.entity_type.as_str())
    }

    /// Returns the entity ID, or `""` for the zero value.
    pub fn entity_id(&self) -> &str {
        self.parts.as_ref().map_or("", |p| p.entity_id.as_str())
    }
}

impl fmt::Display for Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parts {
            None => Ok(()),
            Some(p) => write!(
                f,
                "{SCHEME}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}",
                p.namespace, p.entity_type, p.entity_id
            ),
        }
    }
}

impl FromStr for Urn {
    type Err = UrnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Urn::parse(s)
    }
}

impl TryFrom<&str> for Urn {
    type Error = UrnError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Urn::parse(s)
    }
}

impl Serialize for Urn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_zero() {
            serializer.serialize_none()
        } else {
            serializer.collect_str(self)
        }
    }
}

impl<'de> Deserialize<'de> for Urn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(UrnVisitor)
    }
}

struct UrnVisitor;

impl<'de> Visitor<'de> for UrnVisitor {
    type Value = Urn;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a URN string or null")
    }

    fn visit_none<E: de::Error>(self) -> Result<Urn, E> {
        Ok(Urn::default())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Urn, E> {
        Ok(Urn::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Urn, D::Error> {
        deserializer.deserialize_str(self)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Urn, E> {
        Urn::parse(v).map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new_valid() {
        let u = Urn::new("sm", "user", "user-123").unwrap();
        assert_eq!(u.to_string(), "urn:sm:user:user-123");
        assert_eq!(u.scheme(), "urn");
        assert_eq!(u.namespace(), Some(Namespace::SecureMessaging));
        assert_eq!(u.entity_type(), "user");
        assert_eq!(u.entity_id(), "user-123");
        assert!(!u.is_zero());
    }

    #[test]
    fn test_new_empty_components() {
        let cases = [
            ("", "user", "x", Component::Namespace),
            ("sm", "", "x", Component::EntityType),
            ("sm", "user", "", Component::EntityId),
        ];
        for (ns, et, id, component) in cases {
            let err = Urn::new(ns, et, id).unwrap_err();
            assert_eq!(err.cause(), &FormatCause::EmptyComponent { component });
        }
    }

    #[test]
    fn test_new_rejects_unknown_namespace() {
        let err = Urn::new("unknown-ns", "user", "x").unwrap_err();
        assert!(matches!(
            err.cause(),
            FormatCause::UnknownNamespace { namespace } if namespace == "unknown-ns"
        ));
    }

    #[test]
    fn test_new_accepts_every_namespace() {
        for ns in Namespace::ALL {
            let u = Urn::new(ns.as_str(), ENTITY_TYPE_GROUP, "g-1").unwrap();
            assert_eq!(u.namespace(), Some(ns));
        }
    }

    #[test]
    fn test_zero_value() {
        let u = Urn::default();
        assert!(u.is_zero());
        assert_eq!(u.to_string(), "");
        assert_eq!(u.scheme(), "");
        assert_eq!(u.namespace(), None);
        assert_eq!(u.entity_type(), "");
        assert_eq!(u.entity_id(), "");
    }

    #[test]
    fn test_parse_valid() {
        let u = Urn::parse("urn:sm:user:recipient-bob").unwrap();
        assert_eq!(u.namespace(), Some(Namespace::SecureMessaging));
        assert_eq!(u.entity_type(), "user");
        assert_eq!(u.entity_id(), "recipient-bob");

        let u: Urn = "urn:contacts:device:uuid-abc-123".parse().unwrap();
        assert_eq!(u.to_string(), "urn:contacts:device:uuid-abc-123");
    }

    #[test]
    fn test_parse_empty_is_zero() {
        let u = Urn::parse("").unwrap();
        assert!(u.is_zero());
        assert_eq!(u, Urn::default());
    }

    #[test]
    fn test_parse_legacy_bare_identifier() {
        let u = Urn::parse("legacy-456").unwrap();
        assert_eq!(u, Urn::new("sm", "user", "legacy-456").unwrap());
        assert_eq!(u.to_string(), "urn:sm:user:legacy-456");
    }

    #[test]
    fn test_parse_rejections() {
        let err = Urn::parse("urn:sm:user").unwrap_err();
        assert_eq!(
            err.cause(),
            &FormatCause::PartCount {
                expected: 4,
                found: 3
            }
        );

        let err = Urn::parse("bad:sm:user:x").unwrap_err();
        assert_eq!(
            err.cause(),
            &FormatCause::InvalidScheme {
                found: "bad".to_string(),
                expected: "urn"
            }
        );

        // ":::" splits into four empty parts; the scheme check fires first.
        assert!(Urn::parse(":::").is_err());
        assert!(Urn::parse("urn::user:user-123").is_err());
        assert!(Urn::parse("urn:sm::user-123").is_err());
        assert!(Urn::parse("urn:sm:user:").is_err());
        assert!(Urn::parse("urn:sm:user:a:b").is_err());
        assert!(Urn::parse("urn:other:user:x").is_err());
    }

    #[test]
    fn test_json_encoding() {
        let u = Urn::new("sm", "user", "user-123").unwrap();
        assert_eq!(serde_json::to_string(&u).unwrap(), r#""urn:sm:user:user-123""#);
        assert_eq!(serde_json::to_string(&Urn::default()).unwrap(), "null");
    }

    #[test]
    fn test_json_decoding() {
        let u: Urn = serde_json::from_str(r#""urn:sm:user:user-123""#).unwrap();
        assert_eq!(u.to_string(), "urn:sm:user:user-123");

        let u: Urn = serde_json::from_str(r#""legacy-user-456""#).unwrap();
        assert_eq!(u.to_string(), "urn:sm:user:legacy-user-456");

        let u: Urn = serde_json::from_str("null").unwrap();
        assert!(u.is_zero());

        let u: Urn = serde_json::from_str(r#""""#).unwrap();
        assert!(u.is_zero());

        assert!(serde_json::from_str::<Urn>(r#""urn:sm:user""#).is_err());
        assert!(serde_json::from_str::<Urn>("42").is_err());
        assert!(serde_json::from_str::<Urn>(r#"{"id":"x"}"#).is_err());
    }

    #[test]
    fn test_json_decoding_error_mentions_cause() {
        let err = serde_json::from_str::<Urn>(r#""bad:sm:user:x""#).unwrap_err();
        assert!(err.to_string().contains("invalid scheme 'bad'"));
    }

    fn component() -> impl Strategy<Value = String> {
        "[A-Za-z0-9._-]{1,24}"
    }

    proptest! {
        #[test]
        fn prop_parse_inverts_display(
            ns in prop::sample::select(Namespace::ALL.to_vec()),
            et in component(),
            id in component(),
        ) {
            let u = Urn::new(ns.as_str(), et, id).unwrap();
            let parsed = Urn::parse(&u.to_string()).unwrap();
            prop_assert_eq!(parsed, u);
        }

        #[test]
        fn prop_json_roundtrip(
            ns in prop::sample::select(Namespace::ALL.to_vec()),
            et in component(),
            id in component(),
        ) {
            let u = Urn::new(ns.as_str(), et, id).unwrap();
            let json = serde_json::to_string(&u).unwrap();
            let back: Urn = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, u);
        }
    }
}
