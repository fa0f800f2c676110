//! Coercion into `String` through `Display`.

use crate::error::NodeError;
use std::fmt::Display;

/// Renders the value with its `Display` implementation.
pub fn to_text<T: Display>(value: &T) -> Result<String, NodeError> {
  Ok(value.to_string())
}
