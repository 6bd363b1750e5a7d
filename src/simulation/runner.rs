//! The Moran process runner.
//!
//! Orchestrates repeated independent trials of the birth-death dynamic:
//! clone the input graph, run a bounded step loop, detect fixation or
//! extinction, classify the trial, and accumulate aggregate counts. The
//! caller's graph is never mutated; every repetition works on its own
//! deep copy.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

use crate::base::{VertexId, VertexState};
use crate::errors::ProcessError;
use crate::graph::Graph;
use crate::selection::{
    FitnessWeightedStateSelector, StateSelector, UniformVertexSelector, UniformVictimSelector,
    VertexSelector, VictimSelector,
};
use crate::simulation::{MoranProcessResult, Outcome, ProcessConfig};

/// Every vertex carries the mutant trait.
fn fixated<I: VertexId>(graph: &Graph<I>) -> bool {
    graph
        .vertices()
        .iter()
        .all(|v| v.state().current() == VertexState::Mutant)
}

/// Every vertex carries the healthy trait.
fn extinct<I: VertexId>(graph: &Graph<I>) -> bool {
    graph
        .vertices()
        .iter()
        .all(|v| v.state().current() == VertexState::Healthy)
}

/// Three-way classification of a finished repetition.
///
/// Fixated and extinct are mutually exclusive for any graph with at least
/// one vertex. The empty graph is vacuously both, so it falls through to
/// `Timeout`, which keeps the outcome counts summing to the repetition
/// count.
fn classify<I: VertexId>(graph: &Graph<I>) -> Outcome {
    let fixated = fixated(graph);
    let extinct = extinct(graph);
    if fixated && !extinct {
        Outcome::Fixation
    } else if extinct && !fixated {
        Outcome::Extinction
    } else {
        Outcome::Timeout
    }
}

/// Runs repeated Moran process trials on a graph.
///
/// The three selection strategies are injected at construction and shared
/// by all repetitions. The random source is passed explicitly to every
/// run, so callers control stream seeding and partitioning.
#[derive(Debug, Clone)]
pub struct MoranProcessRunner<S, V, W> {
    state_selector: S,
    vertex_selector: V,
    victim_selector: W,
}

impl MoranProcessRunner<FitnessWeightedStateSelector, UniformVertexSelector, UniformVictimSelector> {
    /// Runner with the reference selectors: fitness-weighted state class,
    /// uniform parent, uniform victim.
    pub fn standard() -> Self {
        Self::new(
            FitnessWeightedStateSelector::new(),
            UniformVertexSelector::new(),
            UniformVictimSelector::new(),
        )
    }
}

impl<S, V, W> MoranProcessRunner<S, V, W> {
    /// Create a runner from the three selection strategies.
    pub fn new(state_selector: S, vertex_selector: V, victim_selector: W) -> Self {
        Self {
            state_selector,
            vertex_selector,
            victim_selector,
        }
    }

    /// Run `repetitions` independent trials sequentially.
    ///
    /// Each repetition deep-clones `graph`, applies one birth-death event
    /// per step until the clone is fixated or extinct or `max_iterations`
    /// steps have elapsed, and is classified as fixation, extinction, or
    /// timeout. Returns the aggregate counts.
    ///
    /// # Errors
    ///
    /// Fails on collaborator contract violations: an empty candidate set
    /// from the state selector, or a selected identity missing from the
    /// working clone. No partial aggregate is returned.
    pub fn run<I, R>(
        &self,
        graph: &Graph<I>,
        repetitions: usize,
        max_iterations: usize,
        mutant_fitness: f64,
        rng: &mut R,
    ) -> Result<MoranProcessResult, ProcessError<I>>
    where
        I: VertexId,
        S: StateSelector<I>,
        V: VertexSelector<I>,
        W: VictimSelector<I>,
        R: Rng + ?Sized,
    {
        let mut result = MoranProcessResult::new();
        for _ in 0..repetitions {
            let outcome = self.run_once(graph, max_iterations, mutant_fitness, rng)?;
            result.record(outcome);
        }
        Ok(result)
    }

    /// Run `config.repetitions` trials in parallel over rayon.
    ///
    /// One `u64` seed per repetition is drawn from `rng` up front; each
    /// repetition then runs on its own `Xoshiro256PlusPlus` seeded from
    /// its slot, so the aggregate is identical for an identical master
    /// stream regardless of thread scheduling.
    ///
    /// # Errors
    ///
    /// Same contract as [`run`](Self::run).
    pub fn run_parallel<I, R>(
        &self,
        graph: &Graph<I>,
        repetitions: usize,
        max_iterations: usize,
        mutant_fitness: f64,
        rng: &mut R,
    ) -> Result<MoranProcessResult, ProcessError<I>>
    where
        I: VertexId + Send + Sync,
        S: StateSelector<I> + Sync,
        V: VertexSelector<I> + Sync,
        W: VictimSelector<I> + Sync,
        R: Rng + ?Sized,
    {
        let seeds: Vec<u64> = (0..repetitions).map(|_| rng.random()).collect();

        let outcomes: Result<Vec<Outcome>, ProcessError<I>> = seeds
            .into_par_iter()
            .map(|seed| {
                let mut local_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                self.run_once(graph, max_iterations, mutant_fitness, &mut local_rng)
            })
            .collect();

        let mut result = MoranProcessResult::new();
        for outcome in outcomes? {
            result.record(outcome);
        }
        Ok(result)
    }

    /// Run sequentially with parameters from a [`ProcessConfig`].
    ///
    /// The master rng is a `Xoshiro256PlusPlus` seeded from `config.seed`,
    /// or from entropy when no seed is set.
    ///
    /// # Errors
    ///
    /// Same contract as [`run`](Self::run).
    pub fn run_with_config<I>(
        &self,
        graph: &Graph<I>,
        config: &ProcessConfig,
    ) -> Result<MoranProcessResult, ProcessError<I>>
    where
        I: VertexId,
        S: StateSelector<I>,
        V: VertexSelector<I>,
        W: VictimSelector<I>,
    {
        let mut rng = match config.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        };
        self.run(
            graph,
            config.repetitions,
            config.max_iterations,
            config.mutant_fitness,
            &mut rng,
        )
    }

    /// One repetition: clone, step until terminal or out of budget,
    /// classify.
    fn run_once<I, R>(
        &self,
        graph: &Graph<I>,
        max_iterations: usize,
        mutant_fitness: f64,
        rng: &mut R,
    ) -> Result<Outcome, ProcessError<I>>
    where
        I: VertexId,
        S: StateSelector<I>,
        V: VertexSelector<I>,
        W: VictimSelector<I>,
        R: Rng + ?Sized,
    {
        let mut working = graph.clone();

        let mut iterations = 0;
        while iterations < max_iterations && !fixated(&working) && !extinct(&working) {
            let candidates = self.state_selector.select(&working, rng, mutant_fitness);
            if candidates.is_empty() {
                return Err(ProcessError::EmptyCandidates);
            }
            let parent = self.vertex_selector.select(&candidates, &working, rng);

            let victim = {
                let neighbours = working.connected(parent);
                self.victim_selector.select(neighbours, &working, rng)
            };

            // A parent without neighbours produces no victim; the step is
            // a no-op but still consumes budget.
            if let Some(victim) = victim {
                let parent_state = working
                    .find_vertex(parent)
                    .ok_or(ProcessError::VertexNotFound(parent))?
                    .state()
                    .current();
                let victim_vertex = working
                    .find_vertex_mut(victim)
                    .ok_or(ProcessError::VertexNotFound(victim))?;
                victim_vertex.state_mut().change(parent_state);
            }
            iterations += 1;
        }

        Ok(classify(&working))
    }
}
