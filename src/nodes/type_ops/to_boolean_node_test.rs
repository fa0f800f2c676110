//! Tests for the boolean coercion.

use crate::error::NodeError;
use crate::nodes::type_ops::to_boolean_node::to_bool;

#[test]
fn test_accepts_only_booleans() {
  assert!(to_bool(&true).unwrap());
  assert!(!to_bool(&false).unwrap());
  assert!(matches!(to_bool(&1u8), Err(NodeError::Coercion { from: "u8", .. })));
  assert!(to_bool(&"true").is_err());
}
