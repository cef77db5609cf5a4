//! The execution-engine wire schema.
//!
//! Uniformly snake_case, with model settings flattened onto the node
//! rather than nested. Every field except the node id is defaulted so that
//! sparse documents load cleanly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::flow::{DEFAULT_TEMPERATURE, NodeKind, PromptSpec, VarDecl};

/// A complete engine document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineFlow {
    #[serde(default)]
    pub first_node_id: String,
    #[serde(default)]
    pub nodes: Vec<EngineNode>,
    #[serde(default)]
    pub connections: Vec<EngineConnection>,
    #[serde(default)]
    pub global_objective: String,
    #[serde(default)]
    pub global_tone: String,
    #[serde(default)]
    pub global_language: String,
    #[serde(default)]
    pub global_behaviour: String,
    #[serde(default)]
    pub global_values: String,
}

/// A node as the execution engine consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineNode {
    pub id: String,
    #[serde(default)]
    pub node_type: NodeKind,
    #[serde(default)]
    pub prompt: PromptSpec,
    #[serde(default)]
    pub is_start: bool,
    #[serde(default)]
    pub is_end: bool,
    #[serde(default)]
    pub use_llm: bool,
    #[serde(default)]
    pub is_global: bool,
    #[serde(default)]
    pub node_description: String,
    #[serde(default)]
    pub auto_return_to_previous: bool,
    #[serde(default)]
    pub extract_vars: Vec<VarDecl>,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default)]
    pub skip_user_response: bool,
    #[serde(default)]
    pub loop_enabled: bool,
    #[serde(default)]
    pub overrides_global_pathway: bool,
    #[serde(default)]
    pub loop_condition: String,
    /// Engine options this crate does not model, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

/// A transition as the execution engine consumes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConnection {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub else_option: bool,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub target: String,
}
