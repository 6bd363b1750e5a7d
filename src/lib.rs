//! # graphmoran
//!
//! Moran-process simulations of trait spread on arbitrary graphs.
//!
//! A single mutant trait spreads through a population of vertices via
//! repeated birth-death events: each step one vertex reproduces and its
//! state overwrites one of its neighbours, until the population is uniform
//! (fixation or extinction) or a step budget runs out. Repeating many
//! independent trials estimates fixation probabilities under different
//! topologies and selection pressures.
//!
//! The crate provides the graph/state data model, the three pluggable
//! selection strategy seams (who reproduces, who is replaced), reference
//! selector implementations, and the repetition runner with sequential and
//! parallel execution.

pub mod base;
pub mod errors;
pub mod graph;
pub mod prelude;
pub mod selection;
pub mod simulation;

pub use base::{StateContainer, StateValue, VertexId, VertexState};
pub use graph::{Graph, Vertex};
