//! Utility modules.

pub mod json;

pub use json::{base64_bytes, nullable};
