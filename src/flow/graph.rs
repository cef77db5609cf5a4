use ahash::AHashSet;

use super::edge::FlowEdge;
use super::node::FlowNode;
use crate::error::FlowError;

/// An immutable snapshot of a flow: the input to every analysis pass.
///
/// Analyses read a snapshot and return derived values; they never mutate
/// it. The editor applies returned values to its own state, so concurrent
/// edits cannot corrupt a computation in progress.
#[derive(Debug, Clone, Default)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl FlowGraph {
    pub fn new(nodes: Vec<FlowNode>, edges: Vec<FlowEdge>) -> Self {
        Self { nodes, edges }
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node traversal starts from.
    ///
    /// Resolution order: the node flagged as start, then the first node
    /// without incoming edges, then the first node in the list. Only an
    /// empty flow has no entry.
    pub fn entry_node(&self) -> Option<&FlowNode> {
        if let Some(flagged) = self.nodes.iter().find(|node| node.is_start) {
            return Some(flagged);
        }
        let mut targeted: AHashSet<&str> = AHashSet::with_capacity(self.edges.len());
        for edge in &self.edges {
            targeted.insert(edge.target.as_str());
        }
        self.nodes
            .iter()
            .find(|node| !targeted.contains(node.id.as_str()))
            .or_else(|| self.nodes.first())
    }

    /// Edges that advance the flow: not classified as loop-backs and not
    /// self-referential. Layout ranks only these.
    pub fn forward_edges(&self) -> impl Iterator<Item = &FlowEdge> {
        self.edges
            .iter()
            .filter(|edge| !edge.is_back_edge() && edge.source != edge.target)
    }

    /// Structural diagnostics: duplicate node ids and dangling edge
    /// endpoints.
    ///
    /// The analyses themselves tolerate whatever they are given; this is
    /// for surfacing problems to the user before they compound.
    pub fn validate(&self) -> Result<(), FlowError> {
        let mut seen: AHashSet<&str> = AHashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(FlowError::DuplicateNodeId {
                    node_id: node.id.clone(),
                });
            }
        }
        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !seen.contains(endpoint.as_str()) {
                    return Err(FlowError::DanglingEdge {
                        edge_id: edge.id.clone(),
                        missing_node_id: endpoint.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
