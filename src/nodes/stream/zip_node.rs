//! # Zip Node
//!
//! Joins N input ports into one output. Each port owns a FIFO slot in the join
//! node; an arriving value is queued in its slot and, as soon as every slot holds
//! at least one value, the oldest value of each slot is removed and the combine
//! function produces exactly one output.
//!
//! ## Ports
//!
//! A [`ZipPort`] is a thin node that tags its input with a slot index and
//! forwards it to the join node as a [`Slotted`] value. Anything that must
//! happen per input (`take`, `repeat`, ...) is chained in front of a port; the
//! joined output can be chained like any other node.
//!
//! ## Constructors
//!
//! - [`Graph::zip2`] to [`Graph::zip5`]: typed ports, typed combine.
//! - [`Graph::zip_n`]: any number of ports of one type.
//! - [`ZipNode::new`]: an untyped combine over `Vec<Payload>` for hand-wired
//!   topologies.
//!
//! ## Completion
//!
//! A port reports its completion to the join as a [`SlotEvent::Completed`]
//! for its slot. The join node completes once every slot has reported, no
//! matter how many upstreams feed a single port. A bare completion signal
//! pushed straight into the join carries no slot and is ignored.
//!
//! ```rust
//! use pushweave::graph::Graph;
//!
//! let mut graph = Graph::new();
//! let zip = graph.zip2(|letter: &char, digit: &u8| format!("{letter}{digit}"));
//! let sink = graph.find::<String>(zip.output).collect();
//!
//! graph.from_list(['A', 'B', 'C']).next_port(zip.input1);
//! graph.emit().unwrap();
//! for digit in 1u8..=3 {
//!   graph.push_to(zip.input2.port(), digit).unwrap();
//! }
//! assert_eq!(graph.collected(sink).unwrap(), vec!["A1", "B2", "C3"]);
//! ```

use crate::error::NodeError;
use crate::graph::Graph;
use crate::node::{NodeRef, Operator, Outlet, Payload};
use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// What a port reports for its slot.
#[derive(Clone)]
pub enum SlotEvent {
  /// A value to queue.
  Value(Payload),
  /// The port's upstream completed.
  Completed,
}

impl fmt::Debug for SlotEvent {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SlotEvent::Value(_) => f.write_str("Value(..)"),
      SlotEvent::Completed => f.write_str("Completed"),
    }
  }
}

/// An event on its way from a port to the join node.
#[derive(Clone, Debug)]
pub struct Slotted {
  /// Index of the port the event arrived on.
  pub slot: usize,
  /// The event itself.
  pub event: SlotEvent,
}

impl Slotted {
  /// A value for `slot`.
  pub fn value(slot: usize, value: Payload) -> Self {
    Self {
      slot,
      event: SlotEvent::Value(value),
    }
  }

  /// Completion of `slot`.
  pub fn completed(slot: usize) -> Self {
    Self {
      slot,
      event: SlotEvent::Completed,
    }
  }
}

/// Tags values of type `T` with a slot index.
pub struct ZipPort<T> {
  slot: usize,
  _marker: PhantomData<fn(T)>,
}

impl<T> ZipPort<T> {
  /// Creates the port feeding `slot`.
  pub fn new(slot: usize) -> Self {
    Self {
      slot,
      _marker: PhantomData,
    }
  }

  /// The slot this port feeds.
  pub fn slot(&self) -> usize {
    self.slot
  }
}

impl<T: Send + Sync + 'static> Operator for ZipPort<T> {
  type In = T;
  type Out = Slotted;

  fn name(&self) -> &'static str {
    "zip_port"
  }

  fn on_input(&mut self, input: Arc<T>, out: &mut Outlet<'_, Slotted>) -> Result<(), NodeError> {
    out.emit(Slotted::value(self.slot, input));
    Ok(())
  }

  fn on_completed(&mut self, out: &mut Outlet<'_, Slotted>) {
    out.emit(Slotted::completed(self.slot));
  }
}

type Combine<O> = Box<dyn FnMut(Vec<Payload>) -> Result<O, NodeError> + Send>;

/// The join node: one FIFO per slot and a combine function.
pub struct ZipNode<O> {
  slots: Vec<VecDeque<Payload>>,
  combine: Combine<O>,
  completed_slots: Vec<bool>,
  completed: bool,
}

impl<O> ZipNode<O> {
  /// Creates a join over `arity` slots. `combine` receives one value per slot,
  /// in slot order.
  pub fn new<F>(arity: usize, combine: F) -> Self
  where
    F: FnMut(Vec<Payload>) -> Result<O, NodeError> + Send + 'static,
  {
    Self {
      slots: (0..arity).map(|_| VecDeque::new()).collect(),
      combine: Box::new(combine),
      completed_slots: vec![false; arity],
      completed: false,
    }
  }

  /// Number of slots.
  pub fn arity(&self) -> usize {
    self.slots.len()
  }

  /// Values queued in `slot` and not yet combined.
  pub fn queued(&self, slot: usize) -> usize {
    self.slots.get(slot).map_or(0, VecDeque::len)
  }

  /// Whether the port feeding `slot` has completed.
  pub fn is_slot_completed(&self, slot: usize) -> bool {
    self.completed_slots.get(slot).copied().unwrap_or(false)
  }

  fn ready(&self) -> bool {
    !self.slots.is_empty() && self.slots.iter().all(|slot| !slot.is_empty())
  }
}

impl<O: Send + Sync + 'static> Operator for ZipNode<O> {
  type In = Slotted;
  type Out = O;

  fn name(&self) -> &'static str {
    "zip"
  }

  fn on_input(&mut self, input: Arc<Slotted>, out: &mut Outlet<'_, O>) -> Result<(), NodeError> {
    let arity = self.slots.len();
    if input.slot >= arity {
      return Err(NodeError::Transform(format!(
        "slot {} out of range for arity {arity}",
        input.slot
      )));
    }

    match &input.event {
      SlotEvent::Completed => {
        self.completed_slots[input.slot] = true;
        if !self.completed && self.completed_slots.iter().all(|done| *done) {
          self.completed = true;
          out.complete();
        }
      }
      SlotEvent::Value(_) if self.completed => {}
      SlotEvent::Value(value) => {
        self.slots[input.slot].push_back(Arc::clone(value));
        if self.ready() {
          let values = self
            .slots
            .iter_mut()
            .filter_map(VecDeque::pop_front)
            .collect();
          out.emit((self.combine)(values)?);
        }
      }
    }
    Ok(())
  }
}

/// One port of a join: the port node and the join node it feeds.
pub struct ZipPortRef<T, O> {
  port: NodeRef<T, Slotted>,
  zip: NodeRef<Slotted, O>,
}

impl<T, O> ZipPortRef<T, O> {
  /// The port node, accepting `T`.
  pub fn port(&self) -> NodeRef<T, Slotted> {
    self.port
  }

  /// The join node the port feeds.
  pub fn zip(&self) -> NodeRef<Slotted, O> {
    self.zip
  }
}

impl<T, O> Clone for ZipPortRef<T, O> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T, O> Copy for ZipPortRef<T, O> {}

impl<T, O> fmt::Debug for ZipPortRef<T, O> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ZipPortRef")
      .field("port", &self.port)
      .field("zip", &self.zip)
      .finish()
  }
}

fn take_slot<T: Send + Sync + 'static>(
  values: &mut impl Iterator<Item = Payload>,
) -> Result<Arc<T>, NodeError> {
  values
    .next()
    .and_then(|value| value.downcast::<T>().ok())
    .ok_or(NodeError::TypeMismatch {
      node: "zip",
      expected: std::any::type_name::<T>(),
    })
}

impl Graph {
  /// Adds a port for `slot` and wires it into `zip`.
  fn add_zip_port<T, O>(&mut self, slot: usize, zip: NodeRef<Slotted, O>) -> ZipPortRef<T, O>
  where
    T: Send + Sync + 'static,
  {
    let port = self.add(ZipPort::<T>::new(slot));
    if let Err(error) = self.attach(port, zip) {
      self.poison(error);
    }
    ZipPortRef { port, zip }
  }

  /// Joins `arity` ports of the same type.
  pub fn zip_n<T, O, F>(&mut self, arity: usize, mut combine: F) -> ZipAll<T, O>
  where
    T: Send + Sync + 'static,
    O: Send + Sync + 'static,
    F: FnMut(&[Arc<T>]) -> O + Send + 'static,
  {
    let output = self.add(ZipNode::new(arity, move |values: Vec<Payload>| {
      let mut values = values.into_iter();
      let typed = (0..arity)
        .map(|_| take_slot::<T>(&mut values))
        .collect::<Result<Vec<_>, _>>()?;
      Ok(combine(&typed))
    }));
    let ports = (0..arity).map(|slot| self.add_zip_port(slot, output)).collect();
    ZipAll { ports, output }
  }
}

/// Handles returned by [`Graph::zip_n`].
#[derive(Debug)]
pub struct ZipAll<T, O> {
  /// Ports in slot order.
  pub ports: Vec<ZipPortRef<T, O>>,
  /// The join node.
  pub output: NodeRef<Slotted, O>,
}

macro_rules! typed_zip {
  (
    $(#[$doc:meta])*
    $name:ident => $handles:ident { $($port:ident: $ty:ident => $slot:literal),+ }
  ) => {
    #[doc = concat!("Handles returned by [`Graph::", stringify!($name), "`].")]
    #[derive(Debug)]
    pub struct $handles<$($ty,)+ O> {
      $(
        #[doc = concat!("Port for slot ", stringify!($slot), ".")]
        pub $port: ZipPortRef<$ty, O>,
      )+
      /// The join node.
      pub output: NodeRef<Slotted, O>,
    }

    impl Graph {
      $(#[$doc])*
      pub fn $name<$($ty,)+ O, F>(&mut self, mut combine: F) -> $handles<$($ty,)+ O>
      where
        $($ty: Send + Sync + 'static,)+
        O: Send + Sync + 'static,
        F: FnMut($(&$ty),+) -> O + Send + 'static,
      {
        let arity = [$($slot),+].len();
        let output = self.add(ZipNode::new(arity, move |values: Vec<Payload>| {
          let mut values = values.into_iter();
          $(let $port = take_slot::<$ty>(&mut values)?;)+
          Ok(combine($(&*$port),+))
        }));
        $handles {
          $($port: self.add_zip_port($slot, output),)+
          output,
        }
      }
    }
  };
}

typed_zip! {
  /// Joins two typed ports.
  zip2 => Zip2 { input1: A => 0, input2: B => 1 }
}

typed_zip! {
  /// Joins three typed ports.
  zip3 => Zip3 { input1: A => 0, input2: B => 1, input3: C => 2 }
}

typed_zip! {
  /// Joins four typed ports.
  zip4 => Zip4 { input1: A => 0, input2: B => 1, input3: C => 2, input4: D => 3 }
}

typed_zip! {
  /// Joins five typed ports.
  zip5 => Zip5 { input1: A => 0, input2: B => 1, input3: C => 2, input4: D => 3, input5: E => 4 }
}
