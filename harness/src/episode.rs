//! Running a fixed policy through an environment.

use std::fmt::Debug;

use crate::contract::{Environment, Policy};
use crate::error::HarnessError;

/// Outcome of one episode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeV1 {
    /// Sum of rewards over the steps taken.
    pub total_reward: f64,
    /// Steps taken, at most the step limit.
    pub steps: usize,
    /// Whether the environment ended the episode (as opposed to the limit).
    pub terminated: bool,
}

/// Reset `env` and follow `policy` until the episode ends or `limit` steps
/// have been taken.
///
/// A `limit` of 0 takes no steps.
///
/// # Errors
///
/// Returns [`HarnessError::MissingAction`] if `policy` has no action for an
/// observation reached during the episode.
pub fn run_episode<E, P>(env: &mut E, policy: &P, limit: usize) -> Result<EpisodeV1, HarnessError>
where
    E: Environment,
    E::Observation: Debug,
    P: Policy<E::Observation, E::Action> + ?Sized,
{
    let mut observation = env.reset();
    let mut total_reward = 0.0;
    let mut steps = 0;
    let mut terminated = false;

    while !terminated && steps < limit {
        let action = policy
            .action(&observation)
            .ok_or_else(|| HarnessError::MissingAction {
                observation: format!("{observation:?}"),
            })?;
        let t = env.step(action);
        observation = t.observation;
        total_reward += t.reward;
        terminated = t.done;
        steps += 1;
    }

    log::debug!("episode finished: steps={steps} reward={total_reward} terminated={terminated}");
    Ok(EpisodeV1 {
        total_reward,
        steps,
        terminated,
    })
}
