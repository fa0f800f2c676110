//! # Graph Configuration
//!
//! Per-graph settings. Every field has a default, so a configuration document
//! only needs to mention what it changes:
//!
//! ```rust
//! use pushweave::config::GraphConfig;
//!
//! let config = GraphConfig::from_json(r#"{ "name": "login", "defer_capacity": 16 }"#).unwrap();
//! assert_eq!(config.name, "login");
//! assert!(config.reject_cycles);
//! ```

use crate::error::GraphError;
use serde::{Deserialize, Serialize};

/// Settings for one [`Graph`](crate::graph::Graph).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
  /// Name reported in the `graph` field of every log event.
  pub name: String,
  /// Reject edges that would close a cycle. When disabled, acyclicity is the
  /// caller's responsibility: a cycle recurses until the stack is exhausted.
  pub reject_cycles: bool,
  /// Default bound for `defer()` nodes; `None` buffers without limit.
  pub defer_capacity: Option<usize>,
}

impl Default for GraphConfig {
  fn default() -> Self {
    Self {
      name: "graph".to_string(),
      reject_cycles: true,
      defer_capacity: None,
    }
  }
}

impl GraphConfig {
  /// Creates a default configuration with the given name.
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      ..Self::default()
    }
  }

  /// Sets the graph name.
  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = name.into();
    self
  }

  /// Enables or disables cycle rejection on attach.
  pub fn with_reject_cycles(mut self, reject: bool) -> Self {
    self.reject_cycles = reject;
    self
  }

  /// Sets the default bound used by `defer()`.
  pub fn with_defer_capacity(mut self, capacity: Option<usize>) -> Self {
    self.defer_capacity = capacity;
    self
  }

  /// Parses a configuration from JSON.
  pub fn from_json(json: &str) -> Result<Self, GraphError> {
    serde_json::from_str(json).map_err(|e| GraphError::Config(e.to_string()))
  }

  /// Serializes the configuration to JSON.
  pub fn to_json(&self) -> Result<String, GraphError> {
    serde_json::to_string(self).map_err(|e| GraphError::Config(e.to_string()))
  }
}
