//! # pushweave
//!
//! Typed, push-based dataflow graphs in pure Rust.
//!
//! pushweave wires small single-purpose nodes (filter, map, skip, take, repeat,
//! buffer, sum, zip, list sources and coercion terminals) into a directed
//! acyclic topology and drives values through it synchronously. Completion and
//! error signals travel along the same edges as values.
//!
//! ## Key Features
//!
//! - **Typed construction**: the fluent builder tracks the output type of the
//!   node under its cursor, so mismatched chains do not compile
//! - **Arena ownership**: the [`Graph`] owns every node; nodes refer to each
//!   other by [`NodeId`]
//! - **Tags**: any node can be re-entered with `find` to grow branches
//! - **Shared payloads**: fan-out clones an `Arc`, never the value
//!
//! ## Quick Start
//!
//! ```rust
//! use pushweave::graph::Graph;
//!
//! let mut graph = Graph::new();
//! let sink = graph
//!   .from_list(vec![5, 6, 7, 1, 8, 9, 2, 3])
//!   .skip_while(|x| *x > 3)
//!   .collect();
//! graph.emit().unwrap();
//! assert_eq!(graph.collected(sink).unwrap(), vec![1, 8, 9, 2, 3]);
//! ```

#![warn(missing_docs)]

/// Boundary nodes connecting a graph to external producers and executors.
pub mod adapters;
/// Per-graph settings.
pub mod config;
/// Node and graph error types.
pub mod error;
/// The node arena and synchronous dispatch.
pub mod graph;
/// Fluent, typed graph construction.
pub mod graph_builder;
/// The operator contract and node handles.
pub mod node;
/// Built-in operators.
pub mod nodes;
/// Tags for re-entering nodes.
pub mod tag;

pub use config::GraphConfig;
pub use error::{GraphError, NodeError};
pub use graph::Graph;
pub use graph_builder::GraphBuilder;
pub use node::{NodeId, NodeRef, Operator, Outlet, Payload};
pub use tag::Tag;

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod graph_builder_test;
#[cfg(test)]
mod test_support;
