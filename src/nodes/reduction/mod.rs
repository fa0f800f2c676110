//! # Reduction Nodes
//!
//! Nodes that fold a whole stream into one value, emitted on completion.

pub mod sum_node;
#[cfg(test)]
mod sum_node_test;

pub use sum_node::SumNode;
