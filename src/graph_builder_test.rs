//! # GraphBuilder Test Suite
//!
//! Fluent construction: begin nodes, tags and `find`, sticky construction
//! errors, terminals and the `to_*` coercions.

use crate::config::GraphConfig;
use crate::error::{GraphError, NodeError};
use crate::graph::Graph;
use crate::nodes::collect_node::CollectNode;
use crate::nodes::filter_node::FilterNode;
use crate::nodes::list_node::ListNode;
use crate::tag::Tag;
use crate::test_support::init_tracing;
use std::sync::{Arc, Mutex};

// ============================================================================
// Chains
// ============================================================================

#[test]
fn test_from_list_skip() {
  let mut graph = Graph::new();
  let sink = graph.from_list(0..10).skip(7).collect();
  graph.emit().unwrap();
  assert_eq!(graph.collected(sink).unwrap(), vec![7, 8, 9]);
}

#[test]
fn test_from_list_take_completes_once() {
  let mut graph = Graph::new();
  let sink = graph.from_list(0..10).take(3).collect();
  graph.emit().unwrap();

  let collected = graph.operator::<CollectNode<i32>>(sink.id()).unwrap();
  assert_eq!(collected.values().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
  assert_eq!(collected.completions(), 1);
}

#[test]
fn test_begin_installs_first_node() {
  let mut graph = Graph::new();
  let sink = graph.begin::<i32>().map(|x| x * 3).eval(|x| x + 1).collect();
  let begin = graph.begin_node().unwrap();
  assert_eq!(graph.name_of(begin).unwrap(), "map");

  graph.push(1).unwrap();
  graph.push(2).unwrap();
  assert_eq!(graph.collected(sink).unwrap(), vec![4, 7]);
}

#[test]
fn test_action_and_exec_see_every_value() {
  let seen = Arc::new(Mutex::new(Vec::new()));
  let first = Arc::clone(&seen);
  let second = Arc::clone(&seen);

  let mut graph = Graph::new();
  let sink = graph
    .from_list(vec!["a", "b"])
    .action(move |s| first.lock().unwrap().push(format!("action:{s}")))
    .exec(move |s| second.lock().unwrap().push(format!("exec:{s}")))
    .collect();
  graph.emit().unwrap();

  assert_eq!(graph.collected(sink).unwrap(), vec!["a", "b"]);
  assert_eq!(
    *seen.lock().unwrap(),
    vec!["action:a", "exec:a", "action:b", "exec:b"]
  );
}

#[test]
fn test_try_map_error_reaches_collect() {
  let mut graph = Graph::new();
  let sink = graph
    .from_list(vec!["1", "x", "3"])
    .try_map(|s| {
      s.parse::<i32>()
        .map_err(|e| NodeError::Transform(e.to_string()))
    })
    .collect();
  graph.emit().unwrap();

  let collected = graph.operator::<CollectNode<i32>>(sink.id()).unwrap();
  assert_eq!(collected.values().copied().collect::<Vec<_>>(), vec![1]);
  assert_eq!(collected.errors().len(), 1);
  assert!(!collected.is_completed());
}

// ============================================================================
// Tags and find
// ============================================================================

#[test]
fn test_find_creates_fan_out() {
  init_tracing();
  let mut graph = Graph::new();
  graph.begin::<i32>().tag("input").filter(|_| true);
  let doubled = graph.find::<i32>("input").map(|x| x * 2).collect();
  let negated = graph.find::<i32>("input").map(|x| -x).collect();

  graph.push(1).unwrap();
  graph.push(2).unwrap();

  assert_eq!(graph.collected(doubled).unwrap(), vec![2, 4]);
  assert_eq!(graph.collected(negated).unwrap(), vec![-1, -2]);
}

#[test]
fn test_find_by_node_identity() {
  let mut graph = Graph::new();
  let builder = graph.from_list(vec![1, 2, 3]).filter(|x| x % 2 == 1);
  let odd = builder.node().unwrap();
  let sink = graph.find::<i32>(Tag::Node(odd)).collect();
  graph.emit().unwrap();
  assert_eq!(graph.collected(sink).unwrap(), vec![1, 3]);
}

#[test]
fn test_tag_binds_to_terminal() {
  let mut graph = Graph::new();
  let sink = graph.from_list(vec![1]).tag("out").collect();
  assert_eq!(graph.lookup("out"), Some(sink.id()));
}

#[test]
fn test_find_unknown_tag_fails_next() {
  init_tracing();
  let mut graph = Graph::new();
  graph.from_list(vec![1, 2]).collect();
  graph.find::<i32>("missing").filter(|_| true);

  let expected = Tag::from("missing");
  assert!(matches!(graph.check(), Err(GraphError::UnknownTag(tag)) if tag == expected));
  assert!(matches!(graph.emit(), Err(GraphError::UnknownTag(_))));
  assert!(matches!(graph.push(1), Err(GraphError::UnknownTag(_))));
}

#[test]
fn test_find_wrong_type_poisons() {
  let mut graph = Graph::new();
  graph.from_list(vec![1, 2]).tag("numbers").filter(|_| true);
  graph.find::<String>("numbers").collect();
  assert!(matches!(graph.check(), Err(GraphError::TypeMismatch { .. })));
}

#[test]
fn test_errors_are_sticky() {
  let mut graph = Graph::new();
  graph.find::<i32>("missing").skip(1);
  let before = graph.len();
  graph.begin::<i32>().skip(1).take(2);
  assert_eq!(graph.len(), before);
  assert!(matches!(graph.check(), Err(GraphError::UnknownTag(_))));
}

#[test]
fn test_try_next_reports_immediately() {
  let mut graph = Graph::new();
  let result = graph
    .find::<i32>("missing")
    .try_next(FilterNode::new(|_: &i32| true));
  assert!(matches!(result, Err(GraphError::UnknownTag(_))));
  assert!(graph.check().is_ok());
}

#[test]
fn test_second_begin_rejected() {
  let mut graph = Graph::new();
  graph.from_list(vec![1]).collect();
  graph.from_list(vec![2]).collect();
  assert!(matches!(graph.check(), Err(GraphError::BeginExists(_))));

  let mut graph = Graph::new();
  graph.begin::<i32>().skip(1);
  graph.begin::<i32>().skip(2);
  assert!(matches!(graph.check(), Err(GraphError::BeginExists(_))));
}

#[test]
fn test_from_custom_source() {
  let mut graph = Graph::new();
  let sink = graph
    .from(ListNode::new(vec!['x', 'y']))
    .repeat(2)
    .collect();
  graph.emit().unwrap();
  assert_eq!(graph.collected(sink).unwrap(), vec!['x', 'x', 'y', 'y']);
}

#[test]
fn test_end_keeps_cursor() {
  let mut graph = Graph::new();
  let builder = graph.begin::<i32>().map(|x| x + 1);
  let map = builder.node();
  let sink = builder.end(CollectNode::new());
  assert_eq!(graph.current_node(), map);
  graph.push(1).unwrap();
  assert_eq!(graph.collected(sink).unwrap(), vec![2]);
}

#[test]
fn test_end_action_keeps_cursor() {
  let seen = Arc::new(Mutex::new(Vec::new()));
  let recorder = Arc::clone(&seen);

  let mut graph = Graph::new();
  let builder = graph.from_list(vec![1, 2, 3]).map(|x| x * 10);
  let map = builder.node();
  builder.end_action(move |x| recorder.lock().unwrap().push(*x));
  assert_eq!(graph.current_node(), map);

  let sink = graph.find::<i32>(map.unwrap()).collect();
  graph.emit().unwrap();
  assert_eq!(*seen.lock().unwrap(), vec![10, 20, 30]);
  assert_eq!(graph.collected(sink).unwrap(), vec![10, 20, 30]);
}

#[test]
fn test_string_renders_mid_chain() {
  let mut graph = Graph::new();
  let sink = graph
    .from_list(vec![1.5f64, 2.0, -3.25])
    .string()
    .map(|text| text.len())
    .collect();
  graph.emit().unwrap();
  assert_eq!(graph.collected(sink).unwrap(), vec![3, 1, 5]);
}

#[test]
fn test_end_without_cursor() {
  let mut graph = Graph::new();
  graph.begin::<i32>().collect();
  assert!(matches!(graph.check(), Err(GraphError::NoCurrentNode)));
}

// ============================================================================
// Stream sugar
// ============================================================================

#[test]
fn test_buffer_replays_to_late_branch() {
  let mut graph = Graph::new();
  graph.from_list(0..5).tag("recent").buffer(2);
  graph.emit().unwrap();
  let late = graph.find::<i32>("recent").collect();
  assert_eq!(graph.collected(late).unwrap(), vec![3, 4]);
}

#[test]
fn test_defer_uses_configured_capacity() {
  let config = GraphConfig::default().with_defer_capacity(Some(1));
  let mut graph = Graph::with_config(config);
  graph.begin::<i32>().tag("held").defer();
  for x in 1..=3 {
    graph.push(x).unwrap();
  }
  let sink = graph.find::<i32>("held").collect();
  graph.push(4).unwrap();
  assert_eq!(graph.collected(sink).unwrap(), vec![3, 4]);
}

#[test]
fn test_defer_bounded() {
  let mut graph = Graph::new();
  graph.begin::<i32>().tag("held").defer_bounded(2);
  for x in 1..=3 {
    graph.push(x).unwrap();
  }
  let sink = graph.find::<i32>("held").collect();
  assert_eq!(graph.collected(sink).unwrap(), vec![2, 3]);
}

#[test]
fn test_next_port_moves_cursor_to_join() {
  let mut graph = Graph::new();
  let zip = graph.zip2(|a: &i32, b: &i32| a + b);
  let sink = graph
    .from_list(vec![1, 2, 3])
    .next_port(zip.input1)
    .map(|sum| sum * 10)
    .collect();
  graph.emit().unwrap();
  graph.push_to(zip.input2.port(), 10).unwrap();
  graph.push_to(zip.input2.port(), 20).unwrap();
  assert_eq!(graph.collected(sink).unwrap(), vec![110, 220]);
  assert_eq!(graph.downstream_of(zip.output.id()).unwrap().len(), 1);
}

// ============================================================================
// Coercion terminals
// ============================================================================

#[test]
fn test_to_numbers() {
  assert_eq!(Graph::new().from_list(vec![1.0, 2.0]).to_i32().unwrap(), 2);
  assert_eq!(Graph::new().from_list(vec![7u64]).to_i64().unwrap(), 7);
  assert_eq!(Graph::new().from_list(vec![-3]).to_i16().unwrap(), -3);
  assert_eq!(Graph::new().from_list(vec![0.5f64]).to_f32().unwrap(), 0.5);
  assert_eq!(Graph::new().from_list(vec![3u8]).to_f64().unwrap(), 3.0);
}

#[test]
fn test_to_i8_out_of_range() {
  let mut graph = Graph::new();
  let result = graph.from_list(vec![300]).to_i8();
  assert!(matches!(
    result,
    Err(GraphError::Node {
      source: NodeError::Coercion { into: "i8", .. },
      ..
    })
  ));
}

#[test]
fn test_to_bool_char_text() {
  assert!(Graph::new().from_list(vec![false, true]).to_bool().unwrap());
  assert_eq!(Graph::new().from_list(vec![b'A']).to_char().unwrap(), 'A');
  assert_eq!(Graph::new().from_list(vec![42]).to_text().unwrap(), "42");
  assert!(Graph::new().from_list(vec![1]).to_bool().is_err());
}

#[test]
fn test_to_scalar_without_value() {
  let mut graph = Graph::new();
  let result = graph.from_list(Vec::<i32>::new()).to_f64();
  assert!(matches!(result, Err(GraphError::NoValue(_))));
}

#[test]
fn test_sum_to_f64() {
  let mut graph = Graph::new();
  assert_eq!(graph.from_list(vec![1, 2, 3, 4]).sum().to_f64().unwrap(), 10.0);
}

#[test]
fn test_builder_exposes_graph() {
  let mut graph = Graph::new();
  let mut builder = graph.begin::<u8>().skip(1);
  assert_eq!(builder.graph().len(), 1);
  let skip = builder.node().unwrap();
  assert_eq!(builder.graph().name_of(skip).unwrap(), "skip");
}
