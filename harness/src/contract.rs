//! Environment and policy contracts for episode runs.

use std::collections::HashMap;
use std::hash::Hash;

/// Result of one environment step.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<O> {
    /// Observation after the step.
    pub observation: O,
    /// Reward earned by the step.
    pub reward: f64,
    /// Whether the episode has ended.
    pub done: bool,
}

/// An episodic environment.
///
/// # Contract
///
/// - `reset` starts a new episode and returns its first observation.
/// - `step` is only called between a `reset` and a transition with
///   `done == true`.
pub trait Environment {
    /// What the agent sees.
    type Observation;
    /// What the agent does.
    type Action;

    /// Start a new episode.
    fn reset(&mut self) -> Self::Observation;

    /// Apply `action` and report the outcome.
    fn step(&mut self, action: Self::Action) -> Transition<Self::Observation>;
}

/// A fixed mapping from observations to actions.
pub trait Policy<O, A> {
    /// The action to take on `observation`, if the policy defines one.
    fn action(&self, observation: &O) -> Option<A>;
}

impl<O: Eq + Hash, A: Clone> Policy<O, A> for HashMap<O, A> {
    fn action(&self, observation: &O) -> Option<A> {
        self.get(observation).cloned()
    }
}

/// Tabular policy over integer observations: `policy[obs]`.
impl<A: Clone> Policy<usize, A> for [A] {
    fn action(&self, observation: &usize) -> Option<A> {
        self.get(*observation).cloned()
    }
}

impl<A: Clone> Policy<usize, A> for Vec<A> {
    fn action(&self, observation: &usize) -> Option<A> {
        self.as_slice().action(observation)
    }
}
