use thiserror::Error;

/// Errors reported by structural validation of a flow graph.
#[derive(Error, Debug, Clone)]
pub enum FlowError {
    #[error("Node id '{node_id}' is declared more than once")]
    DuplicateNodeId { node_id: String },

    #[error("Edge '{edge_id}' references node '{missing_node_id}', which does not exist in the flow")]
    DanglingEdge {
        edge_id: String,
        missing_node_id: String,
    },
}

/// Errors that can occur while computing node positions.
///
/// These never escape [`compute_layout`](crate::layout::compute_layout),
/// which falls back to the leveled strategy instead; they are only visible
/// when a [`LayoutStrategy`](crate::layout::LayoutStrategy) is driven directly.
#[derive(Error, Debug, Clone)]
pub enum LayoutError {
    #[error(
        "Cycle detected among forward edges involving node '{node_id}'; a loop edge is missing its else marker"
    )]
    CycleDetected { node_id: String },
}

/// Errors that can occur while converting between wire formats.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Document matches neither the engine schema nor the editor schema")]
    UnrecognizedFormat,

    #[error("Failed to parse flow JSON: {0}")]
    Json(#[from] serde_json::Error),
}
