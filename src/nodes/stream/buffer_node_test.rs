//! Tests for [`BufferNode`].

use crate::graph::Graph;
use crate::nodes::collect_node::CollectNode;
use crate::nodes::stream::BufferNode;

#[test]
fn test_capacity_is_never_exceeded() {
  let mut graph = Graph::new();
  let buffer = graph.add(BufferNode::<i32>::new(3));
  for x in 0..10 {
    graph.push_to(buffer, x).unwrap();
  }
  let node = graph.operator::<BufferNode<i32>>(buffer.id()).unwrap();
  assert_eq!(node.len(), 3);
  assert_eq!(node.retained().copied().collect::<Vec<_>>(), vec![7, 8, 9]);
}

#[test]
fn test_passes_through_and_replays_to_each_new_node() {
  let mut graph = Graph::new();
  let buffer = graph.add(BufferNode::<i32>::new(2));
  let early = graph.add(CollectNode::new());
  graph.attach(buffer, early).unwrap();
  for x in 1..=3 {
    graph.push_to(buffer, x).unwrap();
  }
  let late = graph.add(CollectNode::new());
  graph.attach(buffer, late).unwrap();

  assert_eq!(graph.collected(early).unwrap(), vec![1, 2, 3]);
  assert_eq!(graph.collected(late).unwrap(), vec![2, 3]);
}

#[test]
fn test_zero_capacity_retains_nothing() {
  let mut graph = Graph::new();
  let buffer = graph.add(BufferNode::<i32>::new(0));
  graph.push_to(buffer, 1).unwrap();
  let late = graph.add(CollectNode::new());
  graph.attach(buffer, late).unwrap();
  assert!(graph.operator::<BufferNode<i32>>(buffer.id()).unwrap().is_empty());
  assert!(graph.collected(late).unwrap().is_empty());
}
