//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from
//! the flowscope crate. Import this module to get access to the core
//! functionality without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowscope::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Import a flow in either wire format
//! let json = std::fs::read_to_string("path/to/flow.json")?;
//! let editor_flow = import_flow(&json)?;
//!
//! // Analyze the canonical graph
//! let graph = editor_flow.to_graph();
//! for variable in graph.all_variables() {
//!     println!("{} (from node '{}')", variable.name, variable.source_node_name);
//! }
//! # Ok(())
//! # }
//! ```

// Core graph model
pub use crate::flow::{
    FlowEdge, FlowGraph, FlowNode, ModelOptions, NodeKind, PromptSpec, VarDecl, VarKind, VarValue,
};

// Variable queries
pub use crate::catalog::VariableInfo;
pub use crate::scope::{ScopeAnalyzer, variables_in_scope};

// Layout
pub use crate::layout::{
    LayoutChoice, LayoutConfig, LayoutStrategy, LeveledBfsLayout, NodeSize, Position,
    RankedLayout, compute_layout,
};

// Format conversion
pub use crate::convert::{
    EditorFlow, EngineFlow, FlowFormat, ToGraph, detect_format, editor_to_engine,
    engine_to_editor, import_flow,
};

// Error types
pub use crate::error::{ConvertError, FlowError, LayoutError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
