//! Base types for vertex identity and state.
//!
//! This module provides the foundational value types used by the graph
//! model and the process runner: the identity bound for addressing
//! vertices and the generic state container.

mod identity;
mod state;

pub use identity::VertexId;
pub use state::{StateContainer, StateValue, VertexState};
