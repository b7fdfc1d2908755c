//! First-in first-out frontier.

use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use crate::config::FrontierConfig;
use crate::cost::Cost;
use crate::error::FrontierError;
use crate::frontier::{CoreToken, Frontier};
use crate::membership::{FrontierCore, Slot};
use crate::node::Node;

/// FIFO frontier: nodes are removed in the order they were added, which
/// gives breadth-first expansion.
///
/// A replaced node re-enters at the tail.
#[derive(Debug, Clone)]
pub struct QueueFrontier<S, C = f64> {
    core: FrontierCore<S, C>,
    queue: VecDeque<Slot>,
}

impl<S, C> QueueFrontier<S, C>
where
    S: Eq + Hash + Clone + Debug,
    C: Cost,
{
    /// Create an empty frontier with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            core: FrontierCore::new(),
            queue: VecDeque::new(),
        }
    }

    /// Create an empty frontier with `config`.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::InvalidConfig`] if `config` fails validation.
    pub fn with_config(config: FrontierConfig) -> Result<Self, FrontierError> {
        Ok(Self {
            core: FrontierCore::with_config(config)?,
            queue: VecDeque::with_capacity(config.initial_capacity),
        })
    }
}

impl<S, C> Default for QueueFrontier<S, C>
where
    S: Eq + Hash + Clone + Debug,
    C: Cost,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, C> Frontier for QueueFrontier<S, C>
where
    S: Eq + Hash + Clone + Debug,
    C: Cost,
{
    type State = S;
    type Cost = C;

    fn core(&self) -> &FrontierCore<S, C> {
        &self.core
    }

    fn core_mut(&mut self, _: CoreToken) -> &mut FrontierCore<S, C> {
        &mut self.core
    }

    fn add(&mut self, node: Node<S, C>) -> Result<(), FrontierError> {
        let slot = self.core.admit(node)?;
        self.queue.push_back(slot);
        if self.core.compaction_due() {
            self.compact();
        }
        Ok(())
    }

    fn remove(&mut self) -> Result<Node<S, C>, FrontierError> {
        if self.core.is_empty() {
            return Err(FrontierError::Empty);
        }
        while let Some(slot) = self.queue.pop_front() {
            if let Some(node) = self.core.take(slot) {
                if self.core.is_empty() && !self.queue.is_empty() {
                    self.compact();
                }
                return Ok(node);
            }
        }
        Err(FrontierError::Empty)
    }

    fn compact(&mut self) {
        let before = self.queue.len();
        let core = &mut self.core;
        self.queue.retain(|&slot| core.keep(slot));
        log::debug!("queue compacted {before} -> {}", self.queue.len());
    }

    fn clear(&mut self) {
        self.queue.clear();
        self.core.clear();
    }
}
