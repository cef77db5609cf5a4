//! The layered layout used in normal operation.

use std::cmp::Ordering;
use std::collections::VecDeque;

use ahash::AHashMap;
use itertools::Itertools;

use super::{LayoutConfig, LayoutStrategy, NodeSize, Position};
use crate::error::LayoutError;
use crate::flow::FlowGraph;

/// Layered ranking over the forward-edge subgraph.
///
/// Loop-back edges are excluded from ranking entirely and drawn over the
/// finished layout by the renderer. The pipeline: topological order,
/// longest-path ranks, predecessor-barycenter ordering within each rank,
/// then centered packing with per-kind footprints and a final conversion
/// from center coordinates to top-left anchors.
pub struct RankedLayout;

impl LayoutStrategy for RankedLayout {
    fn name(&self) -> &'static str {
        "ranked"
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

        // Forward subgraph as index lists. Edges naming unknown nodes are
        // skipped rather than rejected.
        let mut successors: Vec<Vec<usize>> = vec![Vec::new(); count];
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); count];
        let mut indegree: Vec<usize> = vec![0; count];
        for edge in graph.forward_edges() {
            let (Some(&source), Some(&target)) = (
                index_of.get(edge.source.as_str()),
                index_of.get(edge.target.as_str()),
            ) else {
                continue;
            };
            successors[source].push(target);
            predecessors[target].push(source);
            indegree[target] += 1;
        }

        let order = toposort(&successors, &indegree).map_err(|stuck| {
            LayoutError::CycleDetected {
                node_id: graph.nodes[stuck].id.clone(),
            }
        })?;

        // Longest path from any root fixes the vertical level; with the
        // ranks in hand, group rows and place them top to bottom.
        let mut rank = vec![0usize; count];
        for &index in &order {
            for &next in &successors[index] {
                rank[next] = rank[next].max(rank[index] + 1);
            }
        }
        let max_rank = rank.iter().copied().max().unwrap_or(0);
        let rows = (0..count).map(|index| (rank[index], index)).into_group_map();

        let mut center: Vec<Position> = vec![Position::default(); count];
        let mut row_top = 0.0f64;
        for row_rank in 0..=max_rank {
            let Some(members) = rows.get(&row_rank) else {
                continue;
            };
            let ordered = order_row(members, &predecessors, &center);

            let sizes: Vec<NodeSize> = ordered
                .iter()
                .map(|&index| config.footprint(graph.nodes[index].kind))
                .collect();
            let row_width: f64 = sizes.iter().map(|size| size.width).sum::<f64>()
                + config.node_spacing * ordered.len().saturating_sub(1) as f64;
            let row_height = sizes
                .iter()
                .map(|size| size.height)
                .fold(0.0f64, f64::max);

            let mut cursor = -row_width / 2.0;
            for (&index, size) in ordered.iter().zip(&sizes) {
                center[index] =
                    Position::new(cursor + size.width / 2.0, row_top + row_height / 2.0);
                cursor += size.width + config.node_spacing;
            }
            row_top += row_height + config.rank_spacing;
        }

        let mut positions = AHashMap::with_capacity(count);
        for (index, node) in graph.nodes.iter().enumerate() {
            let size = config.footprint(node.kind);
            let Position { x, y } = center[index];
            positions.insert(
                node.id.clone(),
                Position::new(x - size.width / 2.0, y - size.height / 2.0),
            );
        }
        Ok(positions)
    }
}

/// Kahn's algorithm over the forward subgraph. On a cycle, returns the
/// first blocked node index so the caller can name it.
fn toposort(successors: &[Vec<usize>], indegree: &[usize]) -> Result<Vec<usize>, usize> {
    let count = successors.len();
    let mut remaining = indegree.to_vec();
    let mut queue: VecDeque<usize> = (0..count).filter(|&index| remaining[index] == 0).collect();
    let mut order = Vec::with_capacity(count);
    while let Some(index) = queue.pop_front() {
        order.push(index);
        for &next in &successors[index] {
            remaining[next] -= 1;
            if remaining[next] == 0 {
                queue.push_back(next);
            }
        }
    }
    if order.len() == count {
        Ok(order)
    } else {
        let stuck = (0..count).find(|&index| remaining[index] > 0).unwrap_or(0);
        Err(stuck)
    }
}

/// Orders one row by the mean center-x of each node's already placed
/// predecessors, which keeps children under their parents. Rank 0 has no
/// predecessors and keeps input order; ties keep input order too, so the
/// result is stable across runs.
fn order_row(members: &[usize], predecessors: &[Vec<usize>], center: &[Position]) -> Vec<usize> {
    members
        .iter()
        .enumerate()
        .map(|(slot, &index)| {
            let preds = &predecessors[index];
            let key = if preds.is_empty() {
                slot as f64
            } else {
                preds.iter().map(|&pred| center[pred].x).sum::<f64>() / preds.len() as f64
            };
            (key, slot, index)
        })
        .sorted_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(Ordering::Equal)
                .then(a.1.cmp(&b.1))
        })
        .map(|(_, _, index)| index)
        .collect()
}
