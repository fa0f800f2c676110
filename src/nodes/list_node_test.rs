//! Tests for [`ListNode`].

use crate::graph::Graph;
use crate::nodes::collect_node::CollectNode;
use crate::nodes::list_node::ListNode;

#[test]
fn test_emit_pushes_items_then_completes() {
  let mut graph = Graph::new();
  let sink = graph.from_list(vec!["a", "b", "c"]).collect();
  graph.emit().unwrap();
  let collected = graph.operator::<CollectNode<&str>>(sink.id()).unwrap();
  assert_eq!(collected.values().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
  assert!(collected.is_completed());
}

#[test]
fn test_emit_twice_replays() {
  let mut graph = Graph::new();
  let sink = graph.from_list(vec![1, 2]).collect();
  graph.emit().unwrap();
  graph.emit().unwrap();
  assert_eq!(graph.collected(sink).unwrap(), vec![1, 2, 1, 2]);
}

#[test]
fn test_vec_input_is_expanded() {
  let mut graph = Graph::new();
  let list = graph.add(ListNode::<u8>::new(Vec::new()));
  let sink = graph.add(CollectNode::new());
  graph.attach(list, sink).unwrap();
  graph.push_to(list, vec![4, 5]).unwrap();
  assert_eq!(graph.collected(sink).unwrap(), vec![4, 5]);
  assert!(graph.operator::<ListNode<u8>>(list.id()).unwrap().is_empty());
}
