//! Identity-addressed graph of stateful vertices.
//!
//! The graph owns its vertices and adjacency outright, so `Clone` is a
//! deep, independent copy: mutating a clone can never affect the original.
//! The process runner relies on exactly that to keep the caller's input
//! graph read-only across repetitions.

use std::collections::HashMap;

use crate::base::{StateContainer, StateValue, VertexId, VertexState};
use crate::errors::GraphError;

/// A vertex identified by `I`, carrying one state container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<I: VertexId, S: StateValue = VertexState> {
    id: I,
    state: StateContainer<S>,
}

impl<I: VertexId, S: StateValue> Vertex<I, S> {
    /// Create a vertex with the given identity and initial state value.
    pub fn new(id: I, initial: S) -> Self {
        Self {
            id,
            state: StateContainer::new(initial),
        }
    }

    /// The vertex identity.
    pub fn id(&self) -> I {
        self.id
    }

    /// The vertex state container.
    pub fn state(&self) -> &StateContainer<S> {
        &self.state
    }

    /// Mutable access to the state container.
    pub fn state_mut(&mut self) -> &mut StateContainer<S> {
        &mut self.state
    }
}

/// A mutable graph of stateful vertices with an adjacency relation.
///
/// Identities are unique within a graph. Vertices iterate in insertion
/// order, which keeps selector input deterministic for a fixed rng stream.
/// Adjacency is stored as outgoing neighbour lists; [`add_edge`] inserts
/// both directions, [`add_directed_edge`] one, and the process core is
/// agnostic to the difference because it only consumes [`connected`].
///
/// [`add_edge`]: Graph::add_edge
/// [`add_directed_edge`]: Graph::add_directed_edge
/// [`connected`]: Graph::connected
#[derive(Debug, Clone)]
pub struct Graph<I: VertexId, S: StateValue = VertexState> {
    vertices: Vec<Vertex<I, S>>,
    index: HashMap<I, usize>,
    adjacency: HashMap<I, Vec<I>>,
}

impl<I: VertexId, S: StateValue> Default for Graph<I, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: VertexId, S: StateValue> Graph<I, S> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertices, in insertion order.
    pub fn vertices(&self) -> &[Vertex<I, S>] {
        &self.vertices
    }

    /// Add a vertex, rejecting duplicate identities.
    pub fn add_vertex(&mut self, vertex: Vertex<I, S>) -> Result<(), GraphError<I>> {
        let id = vertex.id();
        if self.index.contains_key(&id) {
            return Err(GraphError::DuplicateVertex(id));
        }
        self.index.insert(id, self.vertices.len());
        self.vertices.push(vertex);
        Ok(())
    }

    /// Add an undirected edge between `a` and `b`.
    ///
    /// Both endpoints must already be vertices of the graph. Re-adding an
    /// existing edge is a no-op.
    pub fn add_edge(&mut self, a: I, b: I) -> Result<(), GraphError<I>> {
        self.add_directed_edge(a, b)?;
        self.add_directed_edge(b, a)
    }

    /// Add a directed edge from `from` to `to`.
    ///
    /// Both endpoints must already be vertices of the graph. Re-adding an
    /// existing edge is a no-op.
    pub fn add_directed_edge(&mut self, from: I, to: I) -> Result<(), GraphError<I>> {
        if !self.index.contains_key(&from) {
            return Err(GraphError::UnknownVertex(from));
        }
        if !self.index.contains_key(&to) {
            return Err(GraphError::UnknownVertex(to));
        }
        let neighbours = self.adjacency.entry(from).or_default();
        if !neighbours.contains(&to) {
            neighbours.push(to);
        }
        Ok(())
    }

    /// Look up a vertex by identity.
    pub fn find_vertex(&self, id: I) -> Option<&Vertex<I, S>> {
        self.index.get(&id).map(|&i| &self.vertices[i])
    }

    /// Look up a vertex by identity, mutably.
    pub fn find_vertex_mut(&mut self, id: I) -> Option<&mut Vertex<I, S>> {
        self.index.get(&id).map(|&i| &mut self.vertices[i])
    }

    /// Identities adjacent to `id`.
    ///
    /// Empty if the vertex has no outgoing neighbours or does not exist.
    pub fn connected(&self, id: I) -> &[I] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::VertexState;

    fn pair() -> Graph<usize> {
        let mut graph = Graph::new();
        graph.add_vertex(Vertex::new(0, VertexState::Mutant)).unwrap();
        graph.add_vertex(Vertex::new(1, VertexState::Healthy)).unwrap();
        graph.add_edge(0, 1).unwrap();
        graph
    }

    #[test]
    fn test_add_vertex_and_lookup() {
        let graph = pair();
        assert_eq!(graph.len(), 2);
        assert_eq!(
            graph.find_vertex(0).unwrap().state().current(),
            VertexState::Mutant
        );
        assert!(graph.find_vertex(2).is_none());
    }

    #[test]
    fn test_duplicate_vertex_rejected() {
        let mut graph = pair();
        let err = graph
            .add_vertex(Vertex::new(0, VertexState::Healthy))
            .unwrap_err();
        assert_eq!(err, GraphError::DuplicateVertex(0));
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_edge_requires_known_endpoints() {
        let mut graph = pair();
        assert_eq!(graph.add_edge(0, 9), Err(GraphError::UnknownVertex(9)));
        assert_eq!(graph.add_edge(9, 0), Err(GraphError::UnknownVertex(9)));
    }

    #[test]
    fn test_undirected_edge_both_directions() {
        let graph = pair();
        assert_eq!(graph.connected(0), &[1]);
        assert_eq!(graph.connected(1), &[0]);
    }

    #[test]
    fn test_directed_edge_one_direction() {
        let mut graph = Graph::new();
        graph.add_vertex(Vertex::new('a', VertexState::Healthy)).unwrap();
        graph.add_vertex(Vertex::new('b', VertexState::Healthy)).unwrap();
        graph.add_directed_edge('a', 'b').unwrap();
        assert_eq!(graph.connected('a'), &['b']);
        assert!(graph.connected('b').is_empty());
    }

    #[test]
    fn test_duplicate_edge_is_noop() {
        let mut graph = pair();
        graph.add_edge(0, 1).unwrap();
        assert_eq!(graph.connected(0), &[1]);
    }

    #[test]
    fn test_connected_missing_vertex_is_empty() {
        let graph = pair();
        assert!(graph.connected(42).is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let graph = pair();
        let mut clone = graph.clone();

        clone
            .find_vertex_mut(1)
            .unwrap()
            .state_mut()
            .change(VertexState::Mutant);

        assert_eq!(
            clone.find_vertex(1).unwrap().state().current(),
            VertexState::Mutant
        );
        assert_eq!(
            graph.find_vertex(1).unwrap().state().current(),
            VertexState::Healthy
        );
    }

    #[test]
    fn test_vertices_in_insertion_order() {
        let mut graph: Graph<u32> = Graph::new();
        for id in [5, 3, 9, 1] {
            graph.add_vertex(Vertex::new(id, VertexState::Healthy)).unwrap();
        }
        let ids: Vec<u32> = graph.vertices().iter().map(|v| v.id()).collect();
        assert_eq!(ids, vec![5, 3, 9, 1]);
    }
}
