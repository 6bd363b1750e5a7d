//! Run configuration.

use serde::{Deserialize, Serialize};

/// Parameters for one `run` call.
///
/// `mutant_fitness` is an opaque weight handed through to the state
/// selector; the core places no constraint on its sign or range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcessConfig {
    /// Number of independent repetitions to perform.
    pub repetitions: usize,
    /// Step budget per repetition.
    pub max_iterations: usize,
    /// Reproductive weight of the mutant trait (healthy weighs 1.0).
    pub mutant_fitness: f64,
    /// Seed for the master rng; `None` seeds from entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl ProcessConfig {
    /// Create a configuration seeded from entropy.
    pub fn new(repetitions: usize, max_iterations: usize, mutant_fitness: f64) -> Self {
        Self {
            repetitions,
            max_iterations,
            mutant_fitness,
            seed: None,
        }
    }

    /// Set a fixed seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_entropy_seed() {
        let config = ProcessConfig::new(100, 1000, 2.0);
        assert_eq!(config.repetitions, 100);
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.mutant_fitness, 2.0);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_with_seed() {
        let config = ProcessConfig::new(10, 50, 1.0).with_seed(42);
        assert_eq!(config.seed, Some(42));
    }
}
