//! User profile facade.

use serde::{Deserialize, Serialize};

use crate::util::nullable;

/// Public profile of a platform user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub alias: String,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub email: String,
}
