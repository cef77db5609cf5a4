//! Conversion between the editor canvas schema and the engine schema.
//!
//! The two wire formats never talk to each other directly: both convert
//! through the canonical [`FlowGraph`], which is also what the analysis
//! passes consume. This module is the only part of the crate that speaks
//! engine format.

pub mod editor;
pub mod engine;
pub mod export;
pub mod import;

pub use editor::*;
pub use engine::*;
pub use export::*;
pub use import::*;

use crate::error::ConvertError;
use crate::flow::FlowGraph;

/// Conversion into the canonical analysis model.
///
/// Both wire schemas implement this. Custom sources can too, which makes
/// every analysis in the crate available to them unchanged.
pub trait ToGraph {
    fn to_graph(&self) -> FlowGraph;
}

/// The two wire formats the converter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowFormat {
    /// Execution-engine schema: `nodes` plus `connections`, `first_node_id`
    /// and `global_objective`.
    Engine,
    /// Canvas schema: `nodes` plus `edges` and `globalConfig`.
    Editor,
}

/// Structural format probe.
///
/// Checks shape, not validity: a document matching one probe may still
/// carry defaulted fields everywhere. A document matching neither is
/// rejected before any conversion is attempted.
pub fn detect_format(document: &serde_json::Value) -> Result<FlowFormat, ConvertError> {
    let Some(root) = document.as_object() else {
        return Err(ConvertError::UnrecognizedFormat);
    };
    let defined = |key: &str| root.get(key).is_some_and(|value| !value.is_null());

    if root.contains_key("nodes")
        && root.contains_key("connections")
        && defined("first_node_id")
        && defined("global_objective")
    {
        return Ok(FlowFormat::Engine);
    }
    if root.contains_key("nodes") && defined("edges") && defined("globalConfig") {
        return Ok(FlowFormat::Editor);
    }
    Err(ConvertError::UnrecognizedFormat)
}
