//! Fringe harness: utilities that sit around a search or learning run.
//!
//! The harness does NOT search. It runs a fixed policy through an
//! environment, smooths result series, and exports charts as JSON for an
//! external plotter.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod chart;
pub mod contract;
pub mod episode;
pub mod error;

pub use chart::{rolling, ChartV1, SeriesV1};
pub use contract::{Environment, Policy, Transition};
pub use episode::{run_episode, EpisodeV1};
pub use error::HarnessError;
