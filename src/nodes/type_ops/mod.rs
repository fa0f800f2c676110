//! # Type Coercion Terminals
//!
//! A [`ScalarNode`] converts every input into a scalar and remembers the latest
//! outcome. The builder's `to_*` operations attach one as a terminal, emit the
//! begin node and read the outcome back. A failed conversion is an error, never
//! a default value.
//!
//! The conversion functions live in one module per target family:
//!
//! - [`to_boolean_node`]: `bool`
//! - [`to_char_node`]: `char`
//! - [`to_number_node`]: `i8`, `i16`, `i32`, `i64`, `f32`, `f64`
//! - [`to_string_node`]: `String`

pub mod scalar_node;
pub mod to_boolean_node;
#[cfg(test)]
mod to_boolean_node_test;
pub mod to_char_node;
pub mod to_number_node;
pub mod to_string_node;

pub use scalar_node::ScalarNode;
