//! Best-first frontier ordered by node value.
//!
//! `BinaryHeap` cannot move an interior entry when its key changes, so
//! `replace` tombstones the stale entry and pushes a fresh one; the stale
//! entry is discarded when it reaches the top. Each tombstone is created by
//! exactly one retire and popped at most once.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::config::FrontierConfig;
use crate::cost::Cost;
use crate::error::FrontierError;
use crate::frontier::{CoreToken, Frontier};
use crate::membership::{FrontierCore, Slot};
use crate::node::Node;

/// A heap entry: the node's value captured at push time plus an insertion
/// sequence number.
///
/// `BinaryHeap` is a max-heap, so the ordering is inverted: the smallest
/// value compares greatest, and among equal values the earliest push wins.
#[derive(Debug, Clone, Copy)]
struct HeapEntry<C> {
    value: C,
    seq: u64,
    slot: Slot,
}

impl<C: Cost> PartialEq for HeapEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: Cost> Eq for HeapEntry<C> {}

impl<C: Cost> PartialOrd for HeapEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Cost> Ord for HeapEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .value
            .cost_cmp(&self.value)
            .then(other.seq.cmp(&self.seq))
    }
}

/// Priority frontier: removes the live node with the lowest `value`.
///
/// Ties go to the node added first.
#[derive(Debug, Clone)]
pub struct PriorityFrontier<S, C = f64> {
    core: FrontierCore<S, C>,
    heap: BinaryHeap<HeapEntry<C>>,
    next_seq: u64,
}

impl<S, C> PriorityFrontier<S, C>
where
    S: Eq + Hash + Clone + Debug,
    C: Cost,
{
    /// Create an empty frontier with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            core: FrontierCore::new(),
            heap: BinaryHeap::new(),
            next_seq: 0,
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
            heap: BinaryHeap::with_capacity(config.initial_capacity),
            next_seq: 0,
        })
    }

    /// The live node that `remove` would return next, without removing it.
    ///
    /// Tombstones at the top of the heap are discarded first, which is why
    /// this takes `&mut self`.
    pub fn peek(&mut self) -> Option<&Node<S, C>> {
        self.discard_stale_top();
        let slot = self.heap.peek()?.slot;
        self.core.node_at(slot)
    }

    fn discard_stale_top(&mut self) {
        while let Some(top) = self.heap.peek() {
            if self.core.is_live(top.slot) {
                break;
            }
            if let Some(entry) = self.heap.pop() {
                self.core.keep(entry.slot);
            }
        }
    }
}

impl<S, C> Default for PriorityFrontier<S, C>
where
    S: Eq + Hash + Clone + Debug,
    C: Cost,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, C> Frontier for PriorityFrontier<S, C>
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
        let value = node.value;
        let slot = self.core.admit(node)?;
        self.heap.push(HeapEntry {
            value,
            seq: self.next_seq,
            slot,
        });
        self.next_seq += 1;
        if self.core.compaction_due() {
            self.compact();
        }
        Ok(())
    }

    fn remove(&mut self) -> Result<Node<S, C>, FrontierError> {
        if self.core.is_empty() {
            return Err(FrontierError::Empty);
        }
        while let Some(entry) = self.heap.pop() {
            if let Some(node) = self.core.take(entry.slot) {
                if self.core.is_empty() && !self.heap.is_empty() {
                    self.compact();
                }
                return Ok(node);
            }
        }
        Err(FrontierError::Empty)
    }

    fn compact(&mut self) {
        let before = self.heap.len();
        let core = &mut self.core;
        self.heap.retain(|entry| core.keep(entry.slot));
        log::debug!("heap compacted {before} -> {}", self.heap.len());
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.core.clear();
    }
}
