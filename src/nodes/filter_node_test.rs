//! Tests for [`FilterNode`].

use crate::graph::Graph;
use crate::nodes::collect_node::CollectNode;
use crate::nodes::filter_node::FilterNode;

#[test]
fn test_keeps_matching_values_in_order() {
  let mut graph = Graph::new();
  let sink = graph.from_list(1..=10).filter(|x| x % 3 == 0).collect();
  graph.emit().unwrap();
  assert_eq!(graph.collected(sink).unwrap(), vec![3, 6, 9]);
}

#[test]
fn test_forwards_completion() {
  let mut graph = Graph::new();
  let sink = graph.from_list(vec![1]).next(FilterNode::new(|_: &i32| false)).collect();
  graph.emit().unwrap();
  let collected = graph.operator::<CollectNode<i32>>(sink.id()).unwrap();
  assert_eq!(collected.values().count(), 0);
  assert!(collected.is_completed());
}
