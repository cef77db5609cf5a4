//! Which variables a node can reference.
//!
//! The answer is computed by reachability from the entry node: a variable
//! is offered at a node when some path from the entry reaches a declaration
//! before arriving there. This is deliberately a superset of strict scoping
//! (which would intersect declarations across every path): autocomplete
//! should offer more rather than fewer names, and the execution engine
//! re-checks references at runtime anyway.

use std::collections::VecDeque;

use ahash::{AHashMap, AHashSet};

use crate::catalog::VariableInfo;
use crate::flow::{FlowGraph, FlowNode};

/// Reachability-based scope queries over one flow snapshot.
///
/// Construction indexes the flow once; each query owns its queue and
/// visited set, so repeated calls on the same analyzer are independent and
/// idempotent.
pub struct ScopeAnalyzer<'a> {
    nodes: AHashMap<&'a str, &'a FlowNode>,
    adjacency: AHashMap<&'a str, Vec<&'a str>>,
    entry_id: Option<&'a str>,
}

impl<'a> ScopeAnalyzer<'a> {
    pub fn new(graph: &'a FlowGraph) -> Self {
        let mut nodes = AHashMap::with_capacity(graph.nodes.len());
        for node in &graph.nodes {
            nodes.entry(node.id.as_str()).or_insert(node);
        }
        // Loop and else edges stay traversable here: a variable extracted
        // before a retry hop is still usable after it.
        let mut adjacency: AHashMap<&str, Vec<&str>> =
            AHashMap::with_capacity(graph.nodes.len());
        for edge in &graph.edges {
            adjacency
                .entry(edge.source.as_str())
                .or_default()
                .push(edge.target.as_str());
        }
        let entry_id = graph.entry_node().map(|node| node.id.as_str());
        Self {
            nodes,
            adjacency,
            entry_id,
        }
    }

    /// Variables declared on some path from the entry to `target_id`,
    /// deduplicated by name.
    ///
    /// The first node in breadth-first order to declare a name wins. The
    /// target's own declarations never count (a node cannot reference what
    /// it is about to extract), and both the entry node and an empty flow
    /// yield an empty list. A target id that does not occur in the flow is
    /// treated as unreachable: the result is every reachable declaration,
    /// which keeps queries for just-deleted nodes harmless.
    pub fn available_at(&self, target_id: &str) -> Vec<VariableInfo> {
        let Some(entry_id) = self.entry_id else {
            return Vec::new();
        };
        if entry_id == target_id {
            return Vec::new();
        }

        let mut reached: Vec<&str> = Vec::with_capacity(self.nodes.len());
        let mut visited: AHashSet<&str> = AHashSet::with_capacity(self.nodes.len());
        let mut queue: VecDeque<&str> = VecDeque::new();
        visited.insert(entry_id);
        queue.push_back(entry_id);

        while let Some(current) = queue.pop_front() {
            reached.push(current);
            // The target is recorded but never expanded; nodes behind it
            // contribute only via paths that bypass it.
            if current == target_id {
                continue;
            }
            if let Some(neighbors) = self.adjacency.get(current) {
                for &next in neighbors {
                    if visited.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        let mut taken: AHashSet<&str> = AHashSet::new();
        let mut variables = Vec::new();
        for id in reached {
            if id == target_id {
                continue;
            }
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            for decl in &node.extract_vars {
                if taken.insert(decl.name.as_str()) {
                    variables.push(VariableInfo::from_decl(decl, node));
                }
            }
        }
        variables
    }
}

/// One-shot convenience over [`ScopeAnalyzer`] for single queries.
pub fn variables_in_scope(graph: &FlowGraph, target_id: &str) -> Vec<VariableInfo> {
    ScopeAnalyzer::new(graph).available_at(target_id)
}
