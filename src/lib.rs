//! # Flowscope - Flow-Graph Analysis Engine
//!
//! **Flowscope** is the analysis core of a conversational-flow editor. A flow
//! is a directed graph of typed steps (message, extraction, validation, ...)
//! connected by labeled, sometimes cyclic, transitions. This crate answers
//! the questions the editor asks about such a graph: which variables a node
//! may reference, where every node should sit on the canvas, and how to
//! translate between the canvas document and the JSON the execution engine
//! consumes.
//!
//! ## Core Workflow
//!
//! Everything operates on a snapshot of the canonical model, a
//! [`FlowGraph`](flow::FlowGraph). The usual path is:
//!
//! 1.  **Load**: parse a document in either wire format with
//!     [`import_flow`](convert::import_flow), or build a
//!     [`FlowGraph`](flow::FlowGraph) directly.
//! 2.  **Analyze**: query variables with
//!     [`all_variables`](flow::FlowGraph::all_variables) and
//!     [`variables_in_scope`](scope::variables_in_scope), and position nodes
//!     with [`compute_layout`](layout::compute_layout).
//! 3.  **Export**: hand the finished flow to the execution engine with
//!     [`editor_to_engine`](convert::editor_to_engine).
//!
//! Every analysis is a pure function over its snapshot: no background work,
//! no shared state, and no failure mode that takes the editor down. Layout
//! falls back to a simpler strategy instead of erroring; scope queries on
//! odd inputs return empty or over-approximate rather than refuse.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowscope::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let nodes = vec![
//!         FlowNode {
//!             id: "start".to_string(),
//!             kind: NodeKind::Start,
//!             is_start: true,
//!             ..Default::default()
//!         },
//!         FlowNode {
//!             id: "greet".to_string(),
//!             extract_vars: vec![VarDecl {
//!                 name: "user_name".to_string(),
//!                 ..Default::default()
//!             }],
//!             ..Default::default()
//!         },
//!     ];
//!     let edges = vec![FlowEdge {
//!         id: "e1".to_string(),
//!         source: "start".to_string(),
//!         target: "greet".to_string(),
//!         ..Default::default()
//!     }];
//!     let graph = FlowGraph::new(nodes, edges);
//!
//!     // Nothing is in scope at "greet": its own variables never count.
//!     let scope = variables_in_scope(&graph, "greet");
//!     assert!(scope.is_empty());
//!
//!     // Canvas positions, keyed by node id.
//!     let positions = compute_layout(&graph, &LayoutConfig::default());
//!     assert_eq!(positions.len(), 2);
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod convert;
pub mod error;
pub mod flow;
pub mod layout;
pub mod prelude;
pub mod scope;
