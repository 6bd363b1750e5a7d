//! Generic vertex state container and the two-valued Moran state.

use serde::{Deserialize, Serialize};

/// Capability bound for values held by a [`StateContainer`].
///
/// A state value is copyable, totally ordered (the ordering is what
/// fitness-weighted selectors compare on), and decides which transitions
/// away from itself are allowed.
pub trait StateValue: Copy + Ord {
    /// Whether a transition from `self` to `next` is allowed.
    fn is_valid_transition(&self, next: &Self) -> bool;
}

/// The two states a vertex can carry in a Moran process.
///
/// `Healthy` orders before `Mutant`, so the maximum of a set of states is
/// the mutant trait whenever it is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VertexState {
    /// The resident (wild-type) trait.
    Healthy,
    /// The invading trait whose fixation probability is being estimated.
    Mutant,
}

impl StateValue for VertexState {
    // Birth-death events may overwrite either trait with the other, and a
    // reproduction onto an identical neighbour is a legal no-op.
    fn is_valid_transition(&self, _next: &Self) -> bool {
        true
    }
}

/// Owns the current state value of a vertex.
///
/// Transitions go through [`change`](StateContainer::change), which
/// consults the value's own validity predicate: a rejected transition
/// leaves the container untouched and reports failure, so the container is
/// never left in an undefined state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateContainer<T: StateValue> {
    current: T,
}

impl<T: StateValue> StateContainer<T> {
    /// Create a container holding `initial`.
    pub fn new(initial: T) -> Self {
        Self { current: initial }
    }

    /// The current state value.
    pub fn current(&self) -> T {
        self.current
    }

    /// Attempt a transition to `next`.
    ///
    /// Returns `true` and replaces the current value if the transition is
    /// valid; otherwise returns `false` and leaves the container unchanged.
    pub fn change(&mut self, next: T) -> bool {
        if self.current.is_valid_transition(&next) {
            self.current = next;
            true
        } else {
            false
        }
    }
}
