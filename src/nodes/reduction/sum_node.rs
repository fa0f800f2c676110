//! # Sum Node
//!
//! Keeps a running `f64` total of numeric inputs. Nothing is emitted per input;
//! when upstream completes the node emits the total and then completes.
//!
//! An input that has no `f64` representation raises a coercion error and is
//! not added.

use crate::error::NodeError;
use crate::node::{Operator, Outlet};
use num_traits::ToPrimitive;
use std::marker::PhantomData;
use std::sync::Arc;

/// Running total.
pub struct SumNode<T> {
  total: f64,
  _marker: PhantomData<fn(T)>,
}

impl<T> Default for SumNode<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> SumNode<T> {
  /// Creates a node with a zero total.
  pub fn new() -> Self {
    Self {
      total: 0.0,
      _marker: PhantomData,
    }
  }

  /// The total so far.
  pub fn total(&self) -> f64 {
    self.total
  }
}

impl<T: ToPrimitive + Send + Sync + 'static> Operator for SumNode<T> {
  type In = T;
  type Out = f64;

  fn name(&self) -> &'static str {
    "sum"
  }

  fn on_input(&mut self, input: Arc<T>, _out: &mut Outlet<'_, f64>) -> Result<(), NodeError> {
    let value = input
      .to_f64()
      .ok_or_else(|| NodeError::coercion::<T, f64>("no f64 representation"))?;
    self.total += value;
    Ok(())
  }

  fn on_completed(&mut self, out: &mut Outlet<'_, f64>) {
    out.emit(self.total);
    out.complete();
  }
}
