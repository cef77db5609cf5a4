//! Tests for the flat variable catalog.
mod common;
use common::*;
use flowscope::prelude::*;

#[test]
fn test_all_variables_preserves_node_order_and_duplicates() {
    let graph = branching_flow();
    let variables = graph.all_variables();
    let names: Vec<&str> = variables.iter().map(|v| v.name.as_str()).collect();
    // Node order, duplicates kept; dedup is the scoping analyzer's job.
    assert_eq!(names, vec!["email", "email", "phone"]);
    assert_eq!(variables[0].source_node_id, "left");
    assert_eq!(variables[1].source_node_id, "right");
}

#[test]
fn test_all_variables_carries_node_attribution() {
    let graph = linear_flow();
    let variables = graph.all_variables();
    assert_eq!(variables.len(), 2);
    assert_eq!(variables[0].name, "user_name");
    assert_eq!(variables[0].source_node_id, "greet");
    assert_eq!(variables[0].source_node_name, "greet");
    assert_eq!(variables[1].name, "age");
    assert_eq!(variables[1].source_node_id, "ask_age");
}

#[test]
fn test_attribution_prefers_display_name_over_id() {
    let mut graph = linear_flow();
    graph.nodes[1].name = Some("Greeting".to_string());
    let variables = graph.all_variables();
    assert_eq!(variables[0].source_node_id, "greet");
    assert_eq!(variables[0].source_node_name, "Greeting");
}

#[test]
fn test_variable_source_returns_first_declaring_node() {
    let graph = branching_flow();
    let source = graph.variable_source("email").expect("email is declared");
    assert_eq!(source.id, "left");
    assert!(graph.variable_source("nope").is_none());
}

#[test]
fn test_catalog_keeps_declared_kind_and_required_flag() {
    let mut graph = linear_flow();
    graph.nodes[2].extract_vars[0].kind = VarKind::Int;
    graph.nodes[2].extract_vars[0].required = true;
    let variables = graph.all_variables();
    assert_eq!(variables[1].kind, VarKind::Int);
    assert!(variables[1].required);
    assert_eq!(variables[0].kind, VarKind::String);
    assert!(!variables[0].required);
}

#[test]
fn test_empty_flow_has_no_variables() {
    let graph = FlowGraph::default();
    assert!(graph.all_variables().is_empty());
    assert!(graph.variable_source("x").is_none());
}
