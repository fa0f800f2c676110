//! Tests for [`SumNode`].

use crate::adapters::SourceNode;
use crate::error::NodeError;
use crate::graph::Graph;
use crate::nodes::collect_node::CollectNode;
use crate::nodes::reduction::SumNode;

#[test]
fn test_emits_total_then_completes() {
  let mut graph = Graph::new();
  let sink = graph.from_list(vec![1.5f32, 2.5, 3.0]).sum().collect();
  graph.emit().unwrap();
  let collected = graph.operator::<CollectNode<f64>>(sink.id()).unwrap();
  assert_eq!(collected.values().copied().collect::<Vec<_>>(), vec![7.0]);
  assert!(collected.is_completed());
}

#[test]
fn test_nothing_emitted_before_completion() {
  let mut graph = Graph::new();
  let source = graph.add(SourceNode::<u64>::new());
  let sum = graph.add(SumNode::<u64>::new());
  let sink = graph.add(CollectNode::new());
  graph.attach(source, sum).unwrap();
  graph.attach(sum, sink).unwrap();

  graph.publish(source, 40).unwrap();
  graph.publish(source, 2).unwrap();
  assert!(graph.collected(sink).unwrap().is_empty());
  assert_eq!(graph.operator::<SumNode<u64>>(sum.id()).unwrap().total(), 42.0);

  graph.complete(source).unwrap();
  assert_eq!(graph.collected(sink).unwrap(), vec![42.0]);
}

#[test]
fn test_empty_stream_sums_to_zero() {
  let mut graph = Graph::new();
  let sink = graph.from_list(Vec::<i32>::new()).sum().collect();
  graph.emit().unwrap();
  assert_eq!(graph.collected(sink).unwrap(), vec![0.0]);
}

#[test]
fn test_unrepresentable_input_is_coercion_error() {
  #[derive(Debug)]
  struct Opaque;

  impl num_traits::ToPrimitive for Opaque {
    fn to_i64(&self) -> Option<i64> {
      None
    }
    fn to_u64(&self) -> Option<u64> {
      None
    }
    fn to_f64(&self) -> Option<f64> {
      None
    }
  }

  let mut graph = Graph::new();
  let sum = graph.add(SumNode::<Opaque>::new());
  let sink = graph.add(CollectNode::new());
  graph.attach(sum, sink).unwrap();
  graph.push_to(sum, Opaque).unwrap();

  let collected = graph.operator::<CollectNode<f64>>(sink.id()).unwrap();
  assert!(matches!(collected.errors(), [NodeError::Coercion { into: "f64", .. }]));
}
