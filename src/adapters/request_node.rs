//! # Request Node
//!
//! Hands each input to an external executor and feeds the response back into
//! the graph.
//!
//! [`RequestNode::new`] returns the node together with the [`RequestQueue`]
//! the executor reads from. The executor answers with [`Graph::respond`]: a
//! success is published to the node's downstream set, a failure is multicast
//! as [`NodeError::Request`].
//!
//! ```rust
//! use pushweave::adapters::RequestNode;
//! use pushweave::graph::Graph;
//!
//! let mut graph = Graph::new();
//! let (node, mut queue) = RequestNode::<String, usize>::new();
//! let request = graph.add(node);
//! let sink = graph.find::<usize>(request).collect();
//! graph.push_to(request, "hello".to_string()).unwrap();
//!
//! let pending = queue.try_next().unwrap();
//! graph.respond(request, Ok(pending.len())).unwrap();
//! assert_eq!(graph.collected(sink).unwrap(), vec![5]);
//! ```

use crate::error::{GraphError, NodeError};
use crate::graph::Graph;
use crate::node::{NodeRef, Operator, Outlet};
use http::{HeaderMap, StatusCode};
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// A failed external request.
#[derive(Error, Debug, Clone)]
#[error("request failed with status {status}: {message}")]
pub struct RequestError {
  /// Response status.
  pub status: StatusCode,
  /// Human readable failure description.
  pub message: String,
  /// Response headers.
  pub headers: HeaderMap,
  /// Time spent waiting on the network.
  pub network_time: Duration,
}

impl RequestError {
  /// Creates an error with empty headers and zero network time.
  pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status,
      message: message.into(),
      headers: HeaderMap::new(),
      network_time: Duration::ZERO,
    }
  }

  /// Attaches response headers.
  pub fn with_headers(mut self, headers: HeaderMap) -> Self {
    self.headers = headers;
    self
  }

  /// Attaches the measured network time.
  pub fn with_network_time(mut self, network_time: Duration) -> Self {
    self.network_time = network_time;
    self
  }
}

/// Forwards inputs to a [`RequestQueue`].
pub struct RequestNode<I, O> {
  sender: UnboundedSender<Arc<I>>,
  _marker: PhantomData<fn() -> O>,
}

/// The executor side of a [`RequestNode`].
pub struct RequestQueue<I> {
  receiver: UnboundedReceiver<Arc<I>>,
}

impl<I, O> RequestNode<I, O> {
  /// Creates a request node and the queue its inputs are delivered to.
  pub fn new() -> (Self, RequestQueue<I>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (
      Self {
        sender,
        _marker: PhantomData,
      },
      RequestQueue { receiver },
    )
  }
}

impl<I> RequestQueue<I> {
  /// Waits for the next pending request. `None` once the node is dropped.
  pub async fn next(&mut self) -> Option<Arc<I>> {
    self.receiver.recv().await
  }

  /// Takes a pending request without waiting.
  pub fn try_next(&mut self) -> Option<Arc<I>> {
    self.receiver.try_recv().ok()
  }

  /// Closes the queue; later inputs to the node fail with
  /// [`NodeError::Disconnected`].
  pub fn close(&mut self) {
    self.receiver.close();
  }
}

impl<I, O> Operator for RequestNode<I, O>
where
  I: Send + Sync + 'static,
  O: Send + Sync + 'static,
{
  type In = I;
  type Out = O;

  fn name(&self) -> &'static str {
    "request"
  }

  fn on_input(&mut self, input: Arc<I>, _out: &mut Outlet<'_, O>) -> Result<(), NodeError> {
    self
      .sender
      .send(input)
      .map_err(|_| NodeError::Disconnected("request queue closed".to_string()))
  }
}

impl Graph {
  /// Reports the outcome of a request issued by `node`.
  pub fn respond<I, O>(
    &mut self,
    node: NodeRef<I, O>,
    response: Result<O, RequestError>,
  ) -> Result<(), GraphError>
  where
    O: Send + Sync + 'static,
  {
    match response {
      Ok(value) => self.publish(node, value),
      Err(error) => self.fail(node, NodeError::Request(error)),
    }
  }
}
