//! # Node Library
//!
//! Built-in operators. Every node here is a plain struct implementing
//! [`Operator`](crate::node::Operator); the graph wraps it in its erased node
//! type, so built-ins and user operators are added, tagged and found the same
//! way.
//!
//! ## Node Categories
//!
//! - **Sources**: [`list_node::ListNode`]
//! - **Transforms**: [`filter_node::FilterNode`], [`map_node::MapNode`],
//!   [`for_each_node::ActionNode`]
//! - **Stream control**: [`stream`] (skip, take, repeat, buffer, defer, zip)
//! - **Reductions**: [`reduction`]
//! - **Sinks**: [`collect_node::CollectNode`] and the coercion terminals in
//!   [`type_ops`]

pub mod collect_node;
pub mod filter_node;
#[cfg(test)]
mod filter_node_test;
pub mod for_each_node;
pub mod list_node;
#[cfg(test)]
mod list_node_test;
pub mod map_node;

pub mod reduction;
pub mod stream;
pub mod type_ops;
