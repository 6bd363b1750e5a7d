//! Error types for graph construction and process execution.

use std::error;
use std::fmt;

/// Errors raised while building or mutating a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError<I> {
    /// A vertex with this identity already exists in the graph.
    DuplicateVertex(I),
    /// An edge endpoint does not name a vertex of the graph.
    UnknownVertex(I),
}

impl<I: fmt::Debug> fmt::Display for GraphError<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateVertex(id) => {
                write!(f, "Vertex identity {id:?} already present in graph")
            }
            Self::UnknownVertex(id) => {
                write!(f, "Edge endpoint {id:?} does not name a vertex")
            }
        }
    }
}

impl<I: fmt::Debug> error::Error for GraphError<I> {}

/// Fatal collaborator contract violations surfaced by the process runner.
///
/// The no-victim condition and budget exhaustion are normal outcomes and
/// never appear here; these variants mean a selector or the supplied graph
/// broke its contract, and the whole run is abandoned without a partial
/// aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessError<I> {
    /// The state selector returned an empty candidate set.
    EmptyCandidates,
    /// A selected identity was not found in the working graph clone.
    VertexNotFound(I),
}

impl<I: fmt::Debug> fmt::Display for ProcessError<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCandidates => {
                write!(f, "State selector returned an empty candidate set")
            }
            Self::VertexNotFound(id) => {
                write!(f, "Selected vertex {id:?} not found in working graph")
            }
        }
    }
}

impl<I: fmt::Debug> error::Error for ProcessError<I> {}
