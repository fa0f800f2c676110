//! Configuration defaults and JSON round trips.

use crate::config::GraphConfig;
use crate::error::GraphError;

#[test]
fn test_defaults() {
  let config = GraphConfig::default();
  assert_eq!(config.name, "graph");
  assert!(config.reject_cycles);
  assert_eq!(config.defer_capacity, None);
}

#[test]
fn test_partial_json_keeps_defaults() {
  let config = GraphConfig::from_json(r#"{ "reject_cycles": false }"#).unwrap();
  assert_eq!(config, GraphConfig::default().with_reject_cycles(false));
}

#[test]
fn test_builder_setters_survive_json() {
  let config = GraphConfig::new("auth")
    .with_defer_capacity(Some(8))
    .with_reject_cycles(false);
  let json = config.to_json().unwrap();
  assert_eq!(GraphConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_invalid_json() {
  let result = GraphConfig::from_json(r#"{ "defer_capacity": "many" }"#);
  assert!(matches!(result, Err(GraphError::Config(_))));
}
