//! Tests for [`SkipNode`].

use crate::graph::Graph;
use crate::nodes::collect_node::CollectNode;
use crate::nodes::stream::SkipNode;

#[test]
fn test_skip_more_than_available() {
  let mut graph = Graph::new();
  let sink = graph.from_list(0..3).skip(5).collect();
  graph.emit().unwrap();
  let collected = graph.operator::<CollectNode<i32>>(sink.id()).unwrap();
  assert_eq!(collected.values().count(), 0);
  assert!(collected.is_completed());
}

#[test]
fn test_skip_zero_is_identity() {
  let mut graph = Graph::new();
  let sink = graph.from_list(0..3).skip(0).collect();
  graph.emit().unwrap();
  assert_eq!(graph.collected(sink).unwrap(), vec![0, 1, 2]);
}

#[test]
fn test_remaining_counts_down() {
  let mut graph = Graph::new();
  let skip = graph.add(SkipNode::<i32>::new(2));
  graph.push_to(skip, 1).unwrap();
  assert_eq!(graph.operator::<SkipNode<i32>>(skip.id()).unwrap().remaining(), 1);
}
