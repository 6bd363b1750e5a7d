//! Selection strategies for the Moran process.
//!
//! Three independently pluggable policies decide who reproduces and who is
//! replaced each step:
//!
//! - a [`StateSelector`] narrows the graph down to a candidate source set,
//!   weighting the mutant trait by a fitness value;
//! - a [`VertexSelector`] picks the reproducing vertex (the parent) from
//!   that set;
//! - a [`VictimSelector`] picks which of the parent's neighbours is
//!   overwritten, or reports that none is available.
//!
//! All three receive the random source explicitly on every call; there is
//! no hidden global rng, which is what keeps runs reproducible when rng
//! streams are seeded or partitioned deliberately. Selectors never mutate
//! the graph.

use rand::Rng;

use crate::base::{VertexId, VertexState};
use crate::graph::Graph;

/// Chooses the set of vertices eligible to reproduce this step.
pub trait StateSelector<I: VertexId> {
    /// Candidate source identities for this step.
    ///
    /// `mutant_fitness` is the reproductive weight of the mutant trait
    /// relative to a healthy weight of 1.0; implementations are free to
    /// ignore it. Must be deterministic given a fixed rng stream and must
    /// not return an empty set for a non-empty graph.
    fn select<R: Rng + ?Sized>(
        &self,
        graph: &Graph<I>,
        rng: &mut R,
        mutant_fitness: f64,
    ) -> Vec<I>;
}

/// Chooses the reproducing vertex from a candidate set.
pub trait VertexSelector<I: VertexId> {
    /// Pick exactly one identity from `candidates`.
    ///
    /// `candidates` must be non-empty; an empty set is a caller contract
    /// violation (the runner rejects it before this is called).
    fn select<R: Rng + ?Sized>(&self, candidates: &[I], graph: &Graph<I>, rng: &mut R) -> I;
}

/// Chooses the vertex to be overwritten among the parent's neighbours.
pub trait VictimSelector<I: VertexId> {
    /// Pick one identity from `neighbours`, or `None` if it is empty.
    ///
    /// This is the one selector allowed to report "no victim": a parent
    /// with no neighbours (an endpoint of a path, an isolated vertex)
    /// reproduces into nowhere and the step becomes a no-op.
    fn select<R: Rng + ?Sized>(
        &self,
        neighbours: &[I],
        graph: &Graph<I>,
        rng: &mut R,
    ) -> Option<I>;
}

/// Fitness-proportional choice of the reproducing state class.
///
/// Vertices are partitioned by state; the reproducing class is drawn with
/// probability proportional to `class size × class weight`, where mutants
/// weigh `mutant_fitness` and healthy vertices weigh 1.0. The ids of the
/// drawn class are returned. If either class is empty the other is
/// returned outright. A negative mutant fitness is clamped to zero, i.e.
/// mutants never reproduce.
#[derive(Debug, Clone, Copy, Default)]
pub struct FitnessWeightedStateSelector;

impl FitnessWeightedStateSelector {
    /// Create the selector.
    pub fn new() -> Self {
        Self
    }
}

impl<I: VertexId> StateSelector<I> for FitnessWeightedStateSelector {
    fn select<R: Rng + ?Sized>(
        &self,
        graph: &Graph<I>,
        rng: &mut R,
        mutant_fitness: f64,
    ) -> Vec<I> {
        let mut mutants = Vec::new();
        let mut healthy = Vec::new();
        for vertex in graph.vertices() {
            match vertex.state().current() {
                VertexState::Mutant => mutants.push(vertex.id()),
                VertexState::Healthy => healthy.push(vertex.id()),
            }
        }

        if mutants.is_empty() {
            return healthy;
        }
        if healthy.is_empty() {
            return mutants;
        }

        let mutant_weight = (mutant_fitness * mutants.len() as f64).max(0.0);
        let healthy_weight = healthy.len() as f64;
        let draw = rng.random_range(0.0..mutant_weight + healthy_weight);
        if draw < mutant_weight {
            mutants
        } else {
            healthy
        }
    }
}

/// Neutral state selector: every vertex is a candidate, fitness ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformStateSelector;

impl UniformStateSelector {
    /// Create the selector.
    pub fn new() -> Self {
        Self
    }
}

impl<I: VertexId> StateSelector<I> for UniformStateSelector {
    fn select<R: Rng + ?Sized>(
        &self,
        graph: &Graph<I>,
        _rng: &mut R,
        _mutant_fitness: f64,
    ) -> Vec<I> {
        graph.vertices().iter().map(|v| v.id()).collect()
    }
}

/// Uniform draw from the candidate set.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformVertexSelector;

impl UniformVertexSelector {
    /// Create the selector.
    pub fn new() -> Self {
        Self
    }
}

impl<I: VertexId> VertexSelector<I> for UniformVertexSelector {
    fn select<R: Rng + ?Sized>(&self, candidates: &[I], _graph: &Graph<I>, rng: &mut R) -> I {
        candidates[rng.random_range(0..candidates.len())]
    }
}

/// Uniform draw from the neighbour set, `None` when it is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformVictimSelector;

impl UniformVictimSelector {
    /// Create the selector.
    pub fn new() -> Self {
        Self
    }
}

impl<I: VertexId> VictimSelector<I> for UniformVictimSelector {
    fn select<R: Rng + ?Sized>(
        &self,
        neighbours: &[I],
        _graph: &Graph<I>,
        rng: &mut R,
    ) -> Option<I> {
        if neighbours.is_empty() {
            None
        } else {
            Some(neighbours[rng.random_range(0..neighbours.len())])
        }
    }
}
