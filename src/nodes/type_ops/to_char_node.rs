//! Coercion into `char`.
//!
//! Accepts `char` values, `u8` bytes, and `u32` values that are valid Unicode
//! scalar values.

use crate::error::NodeError;
use std::any::Any;

/// Converts a `char`, `u8` or `u32` into `char`.
pub fn to_char<T: 'static>(value: &T) -> Result<char, NodeError> {
  let value = value as &dyn Any;
  if let Some(c) = value.downcast_ref::<char>() {
    return Ok(*c);
  }
  if let Some(byte) = value.downcast_ref::<u8>() {
    return Ok(char::from(*byte));
  }
  if let Some(code) = value.downcast_ref::<u32>() {
    return char::from_u32(*code).ok_or_else(|| {
      NodeError::coercion::<u32, char>(format!("{code:#x} is not a Unicode scalar value"))
    });
  }
  Err(NodeError::coercion::<T, char>("not a character"))
}
