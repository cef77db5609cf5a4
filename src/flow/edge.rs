/// Substrings that mark an edge as a loop-back when the explicit flag is
/// absent. Documents written before `else_option` existed encode retry
/// transitions only through their labels.
const LOOPBACK_HINTS: &[&str] = &["missing"];

/// A directed transition between two nodes.
#[derive(Debug, Clone, Default)]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    /// Short transition name shown on the canvas.
    pub label: String,
    /// Longer text the execution engine uses to pick an edge at runtime.
    pub description: String,
    /// True for fallback and loop-back transitions.
    pub else_option: bool,
}

impl FlowEdge {
    /// Whether this edge loops back instead of advancing the flow.
    ///
    /// The `else_option` flag is authoritative. The label and description
    /// substring check exists only for legacy documents that predate the
    /// flag and is intentionally narrow.
    pub fn is_back_edge(&self) -> bool {
        if self.else_option {
            return true;
        }
        let label = self.label.to_lowercase();
        let description = self.description.to_lowercase();
        LOOPBACK_HINTS
            .iter()
            .any(|hint| label.contains(hint) || description.contains(hint))
    }
}
