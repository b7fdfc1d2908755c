//! Fringe frontier: the containers a state-space search draws its next state
//! from.
//!
//! Three variants share one membership contract and differ only in expansion
//! order:
//!
//! ```text
//! QueueFrontier     FIFO   breadth-first
//! StackFrontier     LIFO   depth-first
//! PriorityFrontier  min    best-first / uniform-cost / A*
//! ```
//!
//! A queued state's node can be superseded with [`Frontier::replace`]. The
//! old node is tombstoned rather than located and moved, and is discarded
//! when the backing structure yields it.
//!
//! # Key types
//!
//! - [`Node`]: state plus parent link, path cost, ordering value, tombstone flag
//! - [`Frontier`]: the shared contract (`add`, `remove`, `replace`, `lookup`, ...)
//! - [`NodeArena`]: owner of expanded nodes; parent links are [`NodeId`]s into it
//! - [`FrontierConfig`]: duplicate handling and tombstone compaction
//! - [`FrontierError`]: typed failures

#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod cost;
pub mod error;
pub mod frontier;
pub mod membership;
pub mod node;
pub mod priority;
pub mod queue;
pub mod stack;
pub mod stats;

pub use arena::NodeArena;
pub use config::{AutoCompact, DuplicatePolicy, FrontierConfig};
pub use cost::Cost;
pub use error::FrontierError;
pub use frontier::Frontier;
pub use membership::FrontierCore;
pub use node::{Node, NodeId};
pub use priority::PriorityFrontier;
pub use queue::QueueFrontier;
pub use stack::StackFrontier;
pub use stats::FrontierStats;
