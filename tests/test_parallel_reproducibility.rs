//! Test reproducibility of parallel runs with fixed seeds.

use graphmoran::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

fn ring(n: usize, mutants: usize) -> Graph<usize> {
    let mut graph = Graph::new();
    for id in 0..n {
        let state = if id < mutants {
            VertexState::Mutant
        } else {
            VertexState::Healthy
        };
        graph.add_vertex(Vertex::new(id, state)).unwrap();
    }
    for id in 0..n {
        graph.add_edge(id, (id + 1) % n).unwrap();
    }
    graph
}

fn run_parallel(seed: u64) -> MoranProcessResult {
    let graph = ring(8, 2);
    let runner = MoranProcessRunner::standard();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    runner
        .run_parallel(&graph, 400, 50_000, 1.5, &mut rng)
        .unwrap()
}

#[test]
fn test_parallel_reproducibility() {
    // Same master seed twice: per-repetition streams are derived from the
    // seeds vector, so thread scheduling cannot change the aggregate.
    let first = run_parallel(42);
    let second = run_parallel(42);
    assert_eq!(first, second);
}

#[test]
fn test_parallel_different_seeds() {
    let first = run_parallel(42);
    let second = run_parallel(123);

    // Both are valid aggregates over 400 repetitions.
    for result in [&first, &second] {
        assert_eq!(result.repetitions_performed, 400);
        assert_eq!(
            result.fixations + result.extinctions + result.timeouts,
            result.repetitions_performed
        );
    }

    // With 400 stochastic repetitions, different streams matching count
    // for count would be a seeding bug.
    assert_ne!(first, second);
}

#[test]
fn test_parallel_matches_sequential_contract() {
    let graph = ring(6, 1);
    let runner = MoranProcessRunner::standard();

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    let parallel = runner
        .run_parallel(&graph, 200, 50_000, 2.0, &mut rng)
        .unwrap();

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    let sequential = runner.run(&graph, 200, 50_000, 2.0, &mut rng).unwrap();

    // The two execution modes draw differently from the master stream, so
    // the aggregates need not match count for count; both must be
    // complete and internally consistent though.
    assert_eq!(parallel.repetitions_performed, 200);
    assert_eq!(sequential.repetitions_performed, 200);
    assert_eq!(
        parallel.fixations + parallel.extinctions + parallel.timeouts,
        200
    );
    assert_eq!(
        sequential.fixations + sequential.extinctions + sequential.timeouts,
        200
    );
}

#[test]
fn test_parallel_propagates_contract_violation() {
    struct NoCandidates;

    impl StateSelector<usize> for NoCandidates {
        fn select<R: rand::Rng + ?Sized>(
            &self,
            _graph: &Graph<usize>,
            _rng: &mut R,
            _fitness: f64,
        ) -> Vec<usize> {
            Vec::new()
        }
    }

    let graph = ring(4, 1);
    let runner = MoranProcessRunner::new(
        NoCandidates,
        UniformVertexSelector::new(),
        UniformVictimSelector::new(),
    );
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);

    let err = runner
        .run_parallel(&graph, 16, 100, 1.0, &mut rng)
        .unwrap_err();
    assert_eq!(err, ProcessError::EmptyCandidates);
}
