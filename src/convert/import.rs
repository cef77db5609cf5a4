//! Engine-to-editor conversion.

use super::editor::{
    EditorEdge, EditorEdgeData, EditorExtractVar, EditorFlow, EditorModelOptions, EditorNode,
    EditorNodeData, GlobalConfig,
};
use super::engine::{EngineFlow, EngineNode};
use super::{FlowFormat, ToGraph, detect_format};
use crate::error::ConvertError;
use crate::flow::{FlowEdge, FlowGraph, FlowNode, ModelOptions};
use crate::layout::{LayoutConfig, compute_layout};

/// Display names longer than this are cut and given an ellipsis.
const MAX_NAME_LEN: usize = 50;

/// Rendering type assigned to loop-back edges on the canvas.
const LOOPBACK_EDGE_TYPE: &str = "loopback";

impl ToGraph for EngineFlow {
    fn to_graph(&self) -> FlowGraph {
        let nodes = self.nodes.iter().map(node_from_engine).collect();
        let edges = self
            .connections
            .iter()
            .map(|connection| FlowEdge {
                id: connection.id.clone(),
                source: connection.source.clone(),
                target: connection.target.clone(),
                label: connection.label.clone(),
                description: connection.description.clone(),
                else_option: connection.else_option,
            })
            .collect();
        FlowGraph::new(nodes, edges)
    }
}

/// Converts an engine document into a canvas document.
///
/// Display names are derived (the engine schema has none), unknown node
/// types collapse to `normal`, loop-back edges get their rendering style,
/// and every node receives a freshly computed position. Stale coordinates
/// are never inherited from the input.
pub fn engine_to_editor(flow: &EngineFlow) -> EditorFlow {
    let graph = flow.to_graph();
    let positions = compute_layout(&graph, &LayoutConfig::default());

    let nodes = graph
        .nodes
        .iter()
        .map(|node| EditorNode {
            id: node.id.clone(),
            kind: node.kind,
            position: positions.get(&node.id).copied().unwrap_or_default(),
            data: EditorNodeData {
                name: node.name.clone(),
                prompt: node.prompt.clone(),
                is_start: node.is_start,
                is_global: node.is_global,
                node_description: node.node_description.clone(),
                auto_return_to_previous: node.auto_return_to_previous,
                overrides_global_pathway: node.overrides_global_pathway,
                model_options: EditorModelOptions::from(&node.model_options),
                extract_vars: node.extract_vars.iter().map(EditorExtractVar::from).collect(),
                loop_enabled: node.loop_enabled,
                condition: node.condition.clone(),
            },
        })
        .collect();

    let edges = graph
        .edges
        .iter()
        .map(|edge| {
            let back = edge.is_back_edge();
            EditorEdge {
                id: edge.id.clone(),
                source: edge.source.clone(),
                target: edge.target.clone(),
                label: edge.label.clone(),
                data: EditorEdgeData {
                    description: edge.description.clone(),
                    else_option: edge.else_option,
                },
                edge_type: back.then(|| LOOPBACK_EDGE_TYPE.to_string()),
                animated: back,
            }
        })
        .collect();

    tracing::debug!(
        "Imported engine flow: {} nodes, {} connections",
        graph.node_count(),
        graph.edge_count()
    );

    EditorFlow {
        nodes,
        edges,
        global_config: GlobalConfig {
            global_prompt: String::new(),
            role_and_objective: flow.global_objective.clone(),
            tone_and_style: flow.global_tone.clone(),
            language_and_format_rules: flow.global_language.clone(),
            behavior_and_fallbacks: flow.global_behaviour.clone(),
            placeholders_and_variables: flow.global_values.clone(),
        },
    }
}

/// Parses a JSON document in either wire format into a canvas document.
///
/// Engine input is converted (and therefore laid out); editor input is
/// returned as stored, keeping positions the user arranged by hand.
pub fn import_flow(json: &str) -> Result<EditorFlow, ConvertError> {
    let document: serde_json::Value = serde_json::from_str(json)?;
    match detect_format(&document)? {
        FlowFormat::Engine => {
            let flow: EngineFlow = serde_json::from_value(document)?;
            Ok(engine_to_editor(&flow))
        }
        FlowFormat::Editor => Ok(serde_json::from_value(document)?),
    }
}

fn node_from_engine(node: &EngineNode) -> FlowNode {
    FlowNode {
        id: node.id.clone(),
        kind: node.node_type,
        name: Some(derive_name(node)),
        prompt: node.prompt.clone(),
        extract_vars: node.extract_vars.clone(),
        condition: node.loop_condition.clone(),
        is_start: node.is_start,
        is_global: node.is_global,
        auto_return_to_previous: node.auto_return_to_previous,
        loop_enabled: node.loop_enabled,
        overrides_global_pathway: node.overrides_global_pathway,
        node_description: node.node_description.clone(),
        model_options: ModelOptions {
            temperature: node.temperature,
            skip_user_response: node.skip_user_response,
            extra: node.extra.clone(),
        },
    }
}

/// Derives a canvas display name for an engine node: terminal markers by
/// flag, then the objective, then the context, then the raw id.
fn derive_name(node: &EngineNode) -> String {
    if node.is_start {
        return "Start".to_string();
    }
    if node.is_end {
        return "End".to_string();
    }
    let source = if !node.prompt.objective.trim().is_empty() {
        &node.prompt.objective
    } else if !node.prompt.context.trim().is_empty() {
        &node.prompt.context
    } else {
        &node.id
    };
    truncate_name(source)
}

fn truncate_name(text: &str) -> String {
    let text = text.trim();
    if text.chars().count() <= MAX_NAME_LEN {
        text.to_string()
    } else {
        let cut: String = text.chars().take(MAX_NAME_LEN).collect();
        format!("{cut}...")
    }
}
