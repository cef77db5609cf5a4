//! The canonical in-memory flow model.
//!
//! Every analysis pass consumes [`FlowGraph`]; both wire schemas convert
//! through it (see [`crate::convert`]). The model itself has no behavior
//! beyond lookups and classification; shape and invariants live here,
//! algorithms live in the analysis modules.

pub mod edge;
pub mod graph;
pub mod node;
pub mod value;

pub use edge::*;
pub use graph::*;
pub use node::*;
pub use value::*;
