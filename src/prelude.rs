//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use graphmoran::prelude::*;
//!
//! let mut graph: Graph<usize> = Graph::new();
//! graph.add_vertex(Vertex::new(0, VertexState::Mutant)).unwrap();
//! graph.add_vertex(Vertex::new(1, VertexState::Healthy)).unwrap();
//! graph.add_edge(0, 1).unwrap();
//!
//! let runner = MoranProcessRunner::standard();
//! let config = ProcessConfig::new(100, 1_000, 2.0).with_seed(42);
//! let result = runner.run_with_config(&graph, &config).unwrap();
//! assert_eq!(result.repetitions_performed, 100);
//! ```

pub use crate::base::{StateContainer, StateValue, VertexId, VertexState};
pub use crate::errors::{GraphError, ProcessError};
pub use crate::graph::{Graph, Vertex};
pub use crate::selection::{
    FitnessWeightedStateSelector, StateSelector, UniformStateSelector, UniformVertexSelector,
    UniformVictimSelector, VertexSelector, VictimSelector,
};
pub use crate::simulation::{MoranProcessResult, MoranProcessRunner, Outcome, ProcessConfig};
