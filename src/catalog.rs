//! Flat variable lookups across a whole flow.

use serde::Serialize;

use crate::flow::{FlowGraph, FlowNode, VarDecl, VarKind};

/// A variable declaration joined with the node that declares it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableInfo {
    pub name: String,
    pub kind: VarKind,
    pub description: String,
    pub required: bool,
    pub source_node_id: String,
    pub source_node_name: String,
}

impl VariableInfo {
    pub(crate) fn from_decl(decl: &VarDecl, node: &FlowNode) -> Self {
        Self {
            name: decl.name.clone(),
            kind: decl.kind,
            description: decl.description.clone(),
            required: decl.required,
            source_node_id: node.id.clone(),
            source_node_name: node.display_name().to_string(),
        }
    }
}

impl FlowGraph {
    /// Every variable declaration in the flow, in node order.
    ///
    /// Duplicate names across nodes are preserved; deduplication is the
    /// scoping analyzer's concern, not the catalog's.
    pub fn all_variables(&self) -> Vec<VariableInfo> {
        self.nodes
            .iter()
            .flat_map(|node| {
                node.extract_vars
                    .iter()
                    .map(move |decl| VariableInfo::from_decl(decl, node))
            })
            .collect()
    }

    /// The first node (in iteration order) declaring a variable with this
    /// name, or `None` if it is undeclared anywhere in the flow.
    pub fn variable_source(&self, name: &str) -> Option<&FlowNode> {
        self.nodes
            .iter()
            .find(|node| node.extract_vars.iter().any(|decl| decl.name == name))
    }
}
