//! Editor-to-engine conversion.

use super::editor::EditorFlow;
use super::engine::{EngineConnection, EngineFlow, EngineNode};
use super::ToGraph;
use crate::flow::{FlowEdge, FlowGraph, FlowNode, ModelOptions, NodeKind, VarDecl};

impl ToGraph for EditorFlow {
    fn to_graph(&self) -> FlowGraph {
        let nodes = self
            .nodes
            .iter()
            .map(|node| FlowNode {
                id: node.id.clone(),
                kind: node.kind,
                name: node.data.name.clone(),
                prompt: node.data.prompt.clone(),
                extract_vars: node.data.extract_vars.iter().map(VarDecl::from).collect(),
                condition: node.data.condition.clone(),
                is_start: node.data.is_start,
                is_global: node.data.is_global,
                auto_return_to_previous: node.data.auto_return_to_previous,
                loop_enabled: node.data.loop_enabled,
                overrides_global_pathway: node.data.overrides_global_pathway,
                node_description: node.data.node_description.clone(),
                model_options: ModelOptions::from(&node.data.model_options),
            })
            .collect();
        let edges = self
            .edges
            .iter()
            .map(|edge| FlowEdge {
                id: edge.id.clone(),
                source: edge.source.clone(),
                target: edge.target.clone(),
                label: edge.label.clone(),
                description: edge.data.description.clone(),
                else_option: edge.data.else_option,
            })
            .collect();
        FlowGraph::new(nodes, edges)
    }
}

/// Converts a canvas document into an engine document.
///
/// `first_node_id` is the flagged start node, else the first node in the
/// list. `is_end` is derived from the end kind or a node named exactly
/// `"End"`; the name check keeps documents whose terminal node predates
/// the end kind exporting correctly. `use_llm` is false for start and end
/// markers, including ends recognized by name.
pub fn editor_to_engine(flow: &EditorFlow) -> EngineFlow {
    let graph = flow.to_graph();

    let first_node_id = graph
        .nodes
        .iter()
        .find(|node| node.is_start)
        .or_else(|| graph.nodes.first())
        .map(|node| node.id.clone())
        .unwrap_or_default();

    let nodes = graph.nodes.iter().map(node_to_engine).collect();
    let connections = graph
        .edges
        .iter()
        .map(|edge| EngineConnection {
            id: edge.id.clone(),
            label: edge.label.clone(),
            description: edge.description.clone(),
            else_option: edge.else_option,
            source: edge.source.clone(),
            target: edge.target.clone(),
        })
        .collect();

    tracing::debug!(
        "Exported engine flow: {} nodes, {} connections, entry '{}'",
        graph.node_count(),
        graph.edge_count(),
        first_node_id
    );

    EngineFlow {
        first_node_id,
        nodes,
        connections,
        global_objective: flow.global_config.role_and_objective.clone(),
        global_tone: flow.global_config.tone_and_style.clone(),
        global_language: flow.global_config.language_and_format_rules.clone(),
        global_behaviour: flow.global_config.behavior_and_fallbacks.clone(),
        global_values: flow.global_config.placeholders_and_variables.clone(),
    }
}

fn node_to_engine(node: &FlowNode) -> EngineNode {
    let is_end = node.kind == NodeKind::End || node.display_name() == "End";
    EngineNode {
        id: node.id.clone(),
        node_type: node.kind,
        prompt: node.prompt.clone(),
        is_start: node.is_start,
        is_end,
        use_llm: !(node.kind.is_terminal() || is_end),
        is_global: node.is_global,
        node_description: node.node_description.clone(),
        auto_return_to_previous: node.auto_return_to_previous,
        extract_vars: node.extract_vars.clone(),
        temperature: node.model_options.temperature,
        skip_user_response: node.model_options.skip_user_response,
        loop_enabled: node.loop_enabled,
        overrides_global_pathway: node.overrides_global_pathway,
        loop_condition: node.condition.clone(),
        extra: node.model_options.extra.clone(),
    }
}
