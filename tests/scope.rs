//! Tests for the reachability-based scoping analyzer.
mod common;
use common::*;
use flowscope::prelude::*;

#[test]
fn test_scope_at_end_sees_upstream_variables() {
    let graph = linear_flow();
    let scope = variables_in_scope(&graph, "end");
    let names: Vec<&str> = scope.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["user_name", "age"]);
}

#[test]
fn test_scope_excludes_targets_own_variables() {
    let graph = linear_flow();
    // greet declares user_name itself and nothing runs before it.
    assert!(variables_in_scope(&graph, "greet").is_empty());
}

#[test]
fn test_scope_at_entry_is_empty() {
    let graph = linear_flow();
    assert!(variables_in_scope(&graph, "start").is_empty());
}

#[test]
fn test_scope_on_empty_flow_is_empty() {
    let graph = FlowGraph::default();
    assert!(variables_in_scope(&graph, "anything").is_empty());
}

#[test]
fn test_scope_terminates_on_cycles() {
    let graph = looping_flow();
    let scope = variables_in_scope(&graph, "end");
    let names: Vec<&str> = scope.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["user_name", "age"]);
}

#[test]
fn test_scope_stops_expanding_at_the_target() {
    let graph = looping_flow();
    // The walk records ask_age without continuing through it: nothing
    // downstream is visited and ask_age's own declaration is excluded.
    let scope = variables_in_scope(&graph, "ask_age");
    let names: Vec<&str> = scope.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["user_name"]);
}

#[test]
fn test_duplicate_names_attributed_to_first_reached_node() {
    let graph = branching_flow();
    let scope = variables_in_scope(&graph, "join");
    let names: Vec<&str> = scope.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["email", "phone"]);
    // Breadth-first order reaches "left" before "right", so its
    // declaration of email wins.
    assert_eq!(scope[0].source_node_id, "left");
    assert_eq!(scope[1].source_node_id, "right");
}

#[test]
fn test_disconnected_nodes_contribute_nothing() {
    let mut graph = linear_flow();
    let mut orphan = node("orphan", NodeKind::Extraction);
    orphan.extract_vars.push(var("ghost"));
    graph.nodes.push(orphan);

    let scope = variables_in_scope(&graph, "end");
    assert!(scope.iter().all(|v| v.name != "ghost"));
    assert_eq!(scope.len(), 2);
}

#[test]
fn test_unknown_target_returns_reachable_superset() {
    let graph = linear_flow();
    // Queries for just-deleted nodes must stay harmless: every reachable
    // declaration is offered instead of an error.
    let scope = variables_in_scope(&graph, "deleted_node");
    let names: Vec<&str> = scope.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["user_name", "age"]);
}

#[test]
fn test_any_path_semantics_offer_both_branches() {
    // Strict all-paths scoping would exclude phone at join whenever only
    // the left branch runs; the analyzer deliberately offers every
    // declaration on any path that can reach the target.
    let graph = branching_flow();
    let scope = variables_in_scope(&graph, "join");
    assert!(scope.iter().any(|v| v.name == "phone"));
}

#[test]
fn test_scope_grows_monotonically_along_forward_paths() {
    let graph = linear_flow();
    let at_ask_age: Vec<String> = variables_in_scope(&graph, "ask_age")
        .into_iter()
        .map(|v| v.name)
        .collect();
    let at_end: Vec<String> = variables_in_scope(&graph, "end")
        .into_iter()
        .map(|v| v.name)
        .collect();
    for name in &at_ask_age {
        assert!(
            at_end.contains(name),
            "'{}' available at ask_age but missing at end",
            name
        );
    }
}

#[test]
fn test_analyzer_reuse_is_idempotent() {
    let graph = looping_flow();
    let analyzer = ScopeAnalyzer::new(&graph);
    let first = analyzer.available_at("end");
    let second = analyzer.available_at("end");
    assert_eq!(first, second);
}

#[test]
fn test_entry_inferred_from_indegree_when_no_flag_is_set() {
    let mut graph = linear_flow();
    graph.nodes[0].is_start = false;
    let scope = variables_in_scope(&graph, "end");
    assert_eq!(scope.len(), 2);
    assert!(variables_in_scope(&graph, "start").is_empty());
}

#[test]
fn test_back_edges_count_for_reachability() {
    // greet is reachable from ask_age only through the retry edge; a query
    // behind that edge still sees everything the walk can touch.
    let mut graph = linear_flow();
    let mut retry = edge("e4", "ask_age", "greet");
    retry.else_option = true;
    graph.edges.push(retry);
    let mut extra = node("after_retry", NodeKind::Message);
    extra.extract_vars.push(var("retry_note"));
    graph.nodes.push(extra);
    graph.edges.push(edge("e5", "greet", "after_retry"));

    let scope = variables_in_scope(&graph, "end");
    let names: Vec<&str> = scope.iter().map(|v| v.name.as_str()).collect();
    assert!(names.contains(&"retry_note"));
}
