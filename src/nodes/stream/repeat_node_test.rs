//! Tests for [`RepeatNode`].

use crate::graph::Graph;
use crate::nodes::collect_node::CollectNode;

#[test]
fn test_repeats_consecutively() {
  let mut graph = Graph::new();
  let sink = graph.from_list(vec![1, 2]).repeat(3).collect();
  graph.emit().unwrap();
  assert_eq!(graph.collected(sink).unwrap(), vec![1, 1, 1, 2, 2, 2]);
}

#[test]
fn test_repeat_zero_forwards_only_completion() {
  let mut graph = Graph::new();
  let sink = graph.from_list(vec![1, 2]).repeat(0).collect();
  graph.emit().unwrap();
  let collected = graph.operator::<CollectNode<i32>>(sink.id()).unwrap();
  assert_eq!(collected.values().count(), 0);
  assert!(collected.is_completed());
}
