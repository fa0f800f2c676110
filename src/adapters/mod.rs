//! # Boundary Adapters
//!
//! Nodes that connect a graph to the outside world.
//!
//! - [`SourceNode`]: a passive entry point. External code publishes into it
//!   through [`Graph::publish`](crate::graph::Graph::publish), or pumps a tokio
//!   channel into it with [`Graph::drain`](crate::graph::Graph::drain).
//! - [`RequestNode`]: hands every input to a [`RequestQueue`] served by an
//!   external executor, which reports back with
//!   [`Graph::respond`](crate::graph::Graph::respond).

pub mod request_node;
pub mod source_node;

pub use request_node::{RequestError, RequestNode, RequestQueue};
pub use source_node::SourceNode;
