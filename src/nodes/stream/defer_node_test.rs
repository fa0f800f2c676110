//! Tests for [`DeferNode`].

use crate::graph::Graph;
use crate::nodes::collect_node::CollectNode;
use crate::nodes::stream::DeferNode;

#[test]
fn test_holds_until_attached_then_passes_through() {
  let mut graph = Graph::new();
  let defer = graph.add(DeferNode::<&str>::new(None));
  graph.push_to(defer, "a").unwrap();
  graph.push_to(defer, "b").unwrap();
  assert_eq!(graph.operator::<DeferNode<&str>>(defer.id()).unwrap().held(), 2);

  let sink = graph.add(CollectNode::new());
  graph.attach(defer, sink).unwrap();
  graph.push_to(defer, "c").unwrap();

  assert_eq!(graph.collected(sink).unwrap(), vec!["a", "b", "c"]);
  assert_eq!(graph.operator::<DeferNode<&str>>(defer.id()).unwrap().held(), 0);
}

#[test]
fn test_second_attach_gets_no_replay() {
  let mut graph = Graph::new();
  let defer = graph.add(DeferNode::<u8>::new(Some(4)));
  graph.push_to(defer, 1).unwrap();
  let first = graph.add(CollectNode::new());
  let second = graph.add(CollectNode::new());
  graph.attach(defer, first).unwrap();
  graph.attach(defer, second).unwrap();
  graph.push_to(defer, 2).unwrap();

  assert_eq!(graph.collected(first).unwrap(), vec![1, 2]);
  assert_eq!(graph.collected(second).unwrap(), vec![2]);
}

#[test]
fn test_zero_bound_drops_everything() {
  let mut graph = Graph::new();
  let defer = graph.add(DeferNode::<u8>::new(Some(0)));
  graph.push_to(defer, 1).unwrap();
  assert_eq!(graph.operator::<DeferNode<u8>>(defer.id()).unwrap().held(), 0);
}
