//! Harness lock tests: a policy extracted from a search solution is replayed
//! through an environment, and the episode results are smoothed and charted.

use std::collections::HashMap;

use fringe_frontier::QueueFrontier;
use fringe_harness::{
    rolling, run_episode, ChartV1, Environment, HarnessError, SeriesV1, Transition,
};
use lock_tests::drive::{search, Evaluation, Improve};
use lock_tests::world::World;

const ROOM: &[&str] = &["S...", ".##.", "...G"];

/// Walks a [`World`]: the action is the neighbour to move to. Invalid moves
/// leave the walker in place at a cost of 1.
struct Walker<'a> {
    world: &'a World,
    at: u32,
}

impl Environment for Walker<'_> {
    type Observation = u32;
    type Action = u32;

    fn reset(&mut self) -> u32 {
        self.at = self.world.start;
        self.at
    }

    fn step(&mut self, action: u32) -> Transition<u32> {
        let reward = match self.world.edge_cost(self.at, action) {
            Some(cost) => {
                self.at = action;
                -cost
            }
            None => -1.0,
        };
        Transition {
            observation: self.at,
            reward,
            done: self.at == self.world.goal,
        }
    }
}

fn solved_policy(world: &World) -> HashMap<u32, u32> {
    let sol = search(world, QueueFrontier::new(), Evaluation::PathCost, Improve::Ignore)
        .unwrap()
        .unwrap();
    let mut policy = HashMap::new();
    let mut at = world.start;
    for &next in &sol.path {
        policy.insert(at, next);
        at = next;
    }
    policy
}

#[test]
fn solution_policy_reaches_goal() {
    let world = World::grid(ROOM).unwrap();
    let policy = solved_policy(&world);
    let mut env = Walker { world: &world, at: 0 };

    let ep = run_episode(&mut env, &policy, 100).unwrap();
    assert!(ep.terminated);
    assert_eq!(ep.steps, 5);
    assert_eq!(ep.total_reward, -5.0);
}

#[test]
fn step_limit_truncates_episode() {
    let world = World::grid(ROOM).unwrap();
    let policy = solved_policy(&world);
    let mut env = Walker { world: &world, at: 0 };

    let ep = run_episode(&mut env, &policy, 3).unwrap();
    assert!(!ep.terminated);
    assert_eq!(ep.steps, 3);
    assert_eq!(ep.total_reward, -3.0);
}

#[test]
fn off_policy_state_is_reported() {
    let world = World::grid(ROOM).unwrap();
    let policy: HashMap<u32, u32> = HashMap::from([(0, 1)]);
    let mut env = Walker { world: &world, at: 0 };

    let err = run_episode(&mut env, &policy, 10).unwrap_err();
    assert_eq!(
        err,
        HarnessError::MissingAction {
            observation: "1".into()
        }
    );
}

#[test]
fn episode_rewards_chart_as_json() {
    let world = World::grid(ROOM).unwrap();
    let policy = solved_policy(&world);
    let rewards: Vec<f64> = (1..=6)
        .map(|limit| {
            let mut env = Walker { world: &world, at: 0 };
            run_episode(&mut env, &policy, limit).unwrap().total_reward
        })
        .collect();
    assert_eq!(rewards, vec![-1.0, -2.0, -3.0, -4.0, -5.0, -5.0]);

    let smooth = rolling(&rewards, 2).unwrap();
    assert_eq!(smooth, vec![-1.5, -2.5, -3.5, -4.5, -5.0]);

    let chart = ChartV1::new("Reward by step limit", "limit", "reward")
        .with_series(SeriesV1::indexed("raw", rewards))
        .with_series(SeriesV1::indexed("rolling(2)", smooth));
    let json = chart.to_json();
    assert_eq!(json["series"].as_array().unwrap().len(), 2);
    assert_eq!(json["series"][1]["label"], "rolling(2)");
    assert_eq!(json["x_label"], "limit");

    let bytes = chart.to_json_bytes().unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(parsed, json);
    assert_eq!(parsed["series"][0]["y"][4], -5.0);
}
