//! # Stream Control and Combination Nodes
//!
//! ## Stream Control
//! - **SkipNode**: drop the first N items
//! - **SkipWhileNode**: drop items while a predicate holds
//! - **TakeNode**: forward the first N items, then complete
//! - **RepeatNode**: forward every item K times
//! - **BufferNode**: pass-through that replays recent items to late subscribers
//! - **DeferNode**: hold items until a downstream node is attached
//!
//! ## Stream Combination
//! - **ZipNode**: join N ports, firing once every port has an item

pub mod buffer_node;
#[cfg(test)]
mod buffer_node_test;
pub mod defer_node;
#[cfg(test)]
mod defer_node_test;
pub mod repeat_node;
#[cfg(test)]
mod repeat_node_test;
pub mod skip_node;
#[cfg(test)]
mod skip_node_test;
pub mod skip_while_node;
pub mod take_node;
pub mod zip_node;

pub use buffer_node::BufferNode;
pub use defer_node::DeferNode;
pub use repeat_node::RepeatNode;
pub use skip_node::SkipNode;
pub use skip_while_node::SkipWhileNode;
pub use take_node::TakeNode;
pub use zip_node::{SlotEvent, Slotted, ZipNode, ZipPort, ZipPortRef};
