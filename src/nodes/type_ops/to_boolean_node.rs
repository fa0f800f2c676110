//! Coercion into `bool`. Only `bool` values are accepted.

use crate::error::NodeError;
use std::any::Any;

/// Returns the value if it is a `bool`.
pub fn to_bool<T: 'static>(value: &T) -> Result<bool, NodeError> {
  (value as &dyn Any)
    .downcast_ref::<bool>()
    .copied()
    .ok_or_else(|| NodeError::coercion::<T, bool>("not a boolean"))
}
