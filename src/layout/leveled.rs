//! The fallback layout.

use std::collections::VecDeque;

use ahash::AHashMap;

use super::{LayoutConfig, LayoutStrategy, Position};
use crate::error::LayoutError;
use crate::flow::FlowGraph;

/// Breadth-first leveling from the entry node.
///
/// Coarser than ranking (uniform row step, no ordering pass) but total:
/// every node of any well-formed graph gets a position. Nodes unreachable
/// from the entry land on level 0.
pub struct LeveledBfsLayout;

impl LayoutStrategy for LeveledBfsLayout {
    fn name(&self) -> &'static str {
        "leveled-bfs"
    }

    fn compute(
        &self,
        graph: &FlowGraph,
        config: &LayoutConfig,
    ) -> Result<AHashMap<String, Position>, LayoutError> {
        let count = graph.nodes.len();
        if count == 0 {
            return Ok(AHashMap::new());
        }

        let index_of: AHashMap<&str, usize> = graph
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (node.id.as_str(), index))
            .collect();

        let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); count];
        for edge in graph.forward_edges() {
            let (Some(&source), Some(&target)) = (
                index_of.get(edge.source.as_str()),
                index_of.get(edge.target.as_str()),
            ) else {
                continue;
            };
            neighbors[source].push(target);
        }

        let mut level = vec![0usize; count];
        let mut visited = vec![false; count];
        if let Some(entry) = graph.entry_node() {
            if let Some(&start) = index_of.get(entry.id.as_str()) {
                let mut queue = VecDeque::new();
                visited[start] = true;
                queue.push_back(start);
                while let Some(index) = queue.pop_front() {
                    for &next in &neighbors[index] {
                        if !visited[next] {
                            visited[next] = true;
                            level[next] = level[index] + 1;
                            queue.push_back(next);
                        }
                    }
                }
            }
        }

        // Rows in node input order, levels stacked with a fixed step.
        let mut rows: Vec<Vec<usize>> = Vec::new();
        for index in 0..count {
            let depth = level[index];
            if rows.len() <= depth {
                rows.resize_with(depth + 1, Vec::new);
            }
            rows[depth].push(index);
        }

        let step_x = config.content_size.width + config.node_spacing;
        let step_y = config.content_size.height + config.rank_spacing;

        let mut positions = AHashMap::with_capacity(count);
        for (depth, row) in rows.iter().enumerate() {
            for (slot, &index) in row.iter().enumerate() {
                let node = &graph.nodes[index];
                let size = config.footprint(node.kind);
                let center_x = (slot as f64 - (row.len() as f64 - 1.0) / 2.0) * step_x;
                let top = depth as f64 * step_y;
                positions.insert(
                    node.id.clone(),
                    Position::new(center_x - size.width / 2.0, top),
                );
            }
        }
        Ok(positions)
    }
}
