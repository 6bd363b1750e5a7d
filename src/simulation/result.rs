//! Aggregate outcome counts for a batch of repetitions.

use serde::{Deserialize, Serialize};

/// Classification of one finished repetition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The mutant trait spread to the entire population.
    Fixation,
    /// The mutant trait vanished entirely.
    Extinction,
    /// The step budget ran out before either terminal state.
    Timeout,
}

/// Outcome counters accumulated over a run.
///
/// Invariant: `fixations + extinctions + timeouts == repetitions_performed`
/// after every completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoranProcessResult {
    /// Number of repetitions executed.
    pub repetitions_performed: usize,
    /// Repetitions that ended with every vertex mutant.
    pub fixations: usize,
    /// Repetitions that ended with every vertex healthy.
    pub extinctions: usize,
    /// Repetitions that exhausted the iteration budget.
    pub timeouts: usize,
}

impl MoranProcessResult {
    /// Create an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one repetition with the given outcome.
    pub fn record(&mut self, outcome: Outcome) {
        self.repetitions_performed += 1;
        match outcome {
            Outcome::Fixation => self.fixations += 1,
            Outcome::Extinction => self.extinctions += 1,
            Outcome::Timeout => self.timeouts += 1,
        }
    }

    /// Fold another aggregate into this one.
    pub fn merge(&mut self, other: &Self) {
        self.repetitions_performed += other.repetitions_performed;
        self.fixations += other.fixations;
        self.extinctions += other.extinctions;
        self.timeouts += other.timeouts;
    }

    /// Fraction of repetitions that fixated, or 0.0 for an empty run.
    pub fn fixation_probability(&self) -> f64 {
        self.fraction(self.fixations)
    }

    /// Fraction of repetitions that went extinct, or 0.0 for an empty run.
    pub fn extinction_probability(&self) -> f64 {
        self.fraction(self.extinctions)
    }

    /// Fraction of repetitions that timed out, or 0.0 for an empty run.
    pub fn timeout_rate(&self) -> f64 {
        self.fraction(self.timeouts)
    }

    fn fraction(&self, count: usize) -> f64 {
        if self.repetitions_performed == 0 {
            0.0
        } else {
            count as f64 / self.repetitions_performed as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_maintains_count_invariant() {
        let mut result = MoranProcessResult::new();
        result.record(Outcome::Fixation);
        result.record(Outcome::Fixation);
        result.record(Outcome::Extinction);
        result.record(Outcome::Timeout);

        assert_eq!(result.repetitions_performed, 4);
        assert_eq!(result.fixations, 2);
        assert_eq!(result.extinctions, 1);
        assert_eq!(result.timeouts, 1);
        assert_eq!(
            result.fixations + result.extinctions + result.timeouts,
            result.repetitions_performed
        );
    }

    #[test]
    fn test_merge() {
        let mut left = MoranProcessResult::new();
        left.record(Outcome::Fixation);

        let mut right = MoranProcessResult::new();
        right.record(Outcome::Extinction);
        right.record(Outcome::Timeout);

        left.merge(&right);
        assert_eq!(left.repetitions_performed, 3);
        assert_eq!(left.fixations, 1);
        assert_eq!(left.extinctions, 1);
        assert_eq!(left.timeouts, 1);
    }

    #[test]
    fn test_probabilities() {
        let mut result = MoranProcessResult::new();
        for _ in 0..3 {
            result.record(Outcome::Fixation);
        }
        result.record(Outcome::Extinction);

        assert!((result.fixation_probability() - 0.75).abs() < f64::EPSILON);
        assert!((result.extinction_probability() - 0.25).abs() < f64::EPSILON);
        assert_eq!(result.timeout_rate(), 0.0);
    }

    #[test]
    fn test_empty_run_probabilities_are_zero() {
        let result = MoranProcessResult::new();
        assert_eq!(result.fixation_probability(), 0.0);
        assert_eq!(result.extinction_probability(), 0.0);
        assert_eq!(result.timeout_rate(), 0.0);
    }
}
