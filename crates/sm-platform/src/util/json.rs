//! Serde helpers that give facade JSON the protobuf JSON mapping behavior.
//!
//! - [`base64_bytes`]: byte fields as standard padded base64, accepting the
//!   URL-safe alphabet and missing padding on input.
//! - [`nullable`]: `null` decodes to the field's default.

use serde::{Deserialize, Deserializer};

/// Deserializes `null` as `T::default()`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub mod base64_bytes {
    use base64::Engine;
    use base64::engine::GeneralPurpose;
    use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let Some(text) = Option::<String>::deserialize(deserializer)? else {
            return Ok(Vec::new());
        };
        decode(&text).map_err(D::Error::custom)
    }

    /// Decodes base64 in either alphabet, padded or not.
    pub fn decode(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
        let url_safe = text.contains(['-', '_']);
        let padded = text.ends_with('=');
        let engine: GeneralPurpose = match (url_safe, padded) {
            (false, true) => STANDARD,
            (false, false) => STANDARD_NO_PAD,
            (true, true) => URL_SAFE,
            (true, false) => URL_SAFE_NO_PAD,
        };
        engine.decode(text)
    }

}
