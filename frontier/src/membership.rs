//! Membership index and node storage shared by every frontier variant.
//!
//! Nodes live in a slab of slots. A variant's backing structure holds slot
//! numbers only, so tombstoning a node is a flag flip on its slot and the
//! backing structure is never searched or reordered. Every occupied slot is
//! referenced exactly once by the backing structure, which makes the number of
//! occupied slots equal to the backing structure's raw length.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::config::{DuplicatePolicy, FrontierConfig};
use crate::cost::Cost;
use crate::error::FrontierError;
use crate::node::Node;
use crate::stats::FrontierStats;

/// Index of a node's slot in [`FrontierCore`] storage.
pub(crate) type Slot = usize;

/// State index, slot storage, and counters behind a frontier.
///
/// Invariants:
/// - every key in `index` names an occupied slot holding a live node for that
///   key, and no two keys share a slot;
/// - `live == index.len()`;
/// - `live + tombstones` == occupied slots == backing structure length.
#[derive(Debug, Clone)]
pub struct FrontierCore<S, C> {
    slots: Vec<Option<Node<S, C>>>,
    free: Vec<Slot>,
    index: HashMap<S, Slot>,
    live: usize,
    tombstones: usize,
    config: FrontierConfig,
    high_water: usize,
    added: u64,
    replaced: u64,
    removed: u64,
    skipped: u64,
}

impl<S, C> FrontierCore<S, C>
where
    S: Eq + Hash + Clone + Debug,
    C: Cost,
{
    pub(crate) fn new() -> Self {
        Self::build(FrontierConfig::default())
    }

    pub(crate) fn with_config(config: FrontierConfig) -> Result<Self, FrontierError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: FrontierConfig) -> Self {
        Self {
            slots: Vec::with_capacity(config.initial_capacity),
            free: Vec::new(),
            index: HashMap::with_capacity(config.initial_capacity),
            live: 0,
            tombstones: 0,
            config,
            high_water: 0,
            added: 0,
            replaced: 0,
            removed: 0,
            skipped: 0,
        }
    }

    /// Live node count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether no live node remains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Whether `state` is in the membership index.
    #[must_use]
    pub fn contains<Q>(&self, state: &Q) -> bool
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(state)
    }

    /// The live node currently indexed under `state`.
    #[must_use]
    pub fn get<Q>(&self, state: &Q) -> Option<&Node<S, C>>
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = *self.index.get(state)?;
        self.slots[slot].as_ref()
    }

    /// Raw backing length, tombstones included.
    #[must_use]
    pub fn backing_len(&self) -> usize {
        self.live + self.tombstones
    }

    /// The configuration this frontier was built with.
    #[must_use]
    pub fn config(&self) -> &FrontierConfig {
        &self.config
    }

    /// Occupancy and lifetime counters.
    #[must_use]
    pub fn stats(&self) -> FrontierStats {
        FrontierStats {
            live: self.live,
            backing_len: self.backing_len(),
            tombstones: self.tombstones,
            high_water: self.high_water,
            added: self.added,
            replaced: self.replaced,
            removed: self.removed,
            skipped: self.skipped,
        }
    }

    /// Store `node` and index it under its state, returning the slot the
    /// caller must push onto its backing structure.
    ///
    /// An already-indexed state is handled per [`DuplicatePolicy`]; on
    /// rejection nothing changes.
    pub(crate) fn admit(&mut self, node: Node<S, C>) -> Result<Slot, FrontierError> {
        if self.index.contains_key(&node.state) {
            match self.config.duplicate_policy {
                DuplicatePolicy::Reject => {
                    return Err(FrontierError::duplicate_state(&node.state));
                }
                DuplicatePolicy::Retire => self.retire(&node.state)?,
            }
        }

        let key = node.state.clone();
        let slot = self.store(node);
        self.index.insert(key, slot);
        self.live += 1;
        self.added += 1;
        self.high_water = self.high_water.max(self.live);
        Ok(slot)
    }

    /// Tombstone the live node for `state` and drop it from the index.
    ///
    /// Its slot stays occupied until the backing structure hands it back
    /// through [`FrontierCore::take`] or [`FrontierCore::keep`].
    pub(crate) fn retire<Q>(&mut self, state: &Q) -> Result<(), FrontierError>
    where
        S: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let slot = self
            .index
            .remove(state)
            .ok_or_else(|| FrontierError::state_not_found(&state))?;
        if let Some(node) = self.slots[slot].as_mut() {
            node.mark_removed();
        }
        self.live -= 1;
        self.tombstones += 1;
        self.replaced += 1;
        log::debug!("retired {state:?} (slot {slot}), {} tombstones", self.tombstones);
        Ok(())
    }

    /// Free a slot popped from the backing structure.
    ///
    /// Returns the node if it was live, after unindexing it. A tombstone is
    /// discarded and `None` returned so the caller pops again.
    pub(crate) fn take(&mut self, slot: Slot) -> Option<Node<S, C>> {
        let node = self.slots[slot].take()?;
        self.free.push(slot);

        if node.is_removed() {
            self.tombstones -= 1;
            self.skipped += 1;
            log::trace!("skipped tombstone for {:?} (slot {slot})", node.state);
            return None;
        }

        let indexed = self.index.remove(&node.state);
        debug_assert_eq!(indexed, Some(slot), "live node must be the indexed one");
        self.live -= 1;
        self.removed += 1;
        Some(node)
    }

    /// Compaction filter: `true` for a live slot, which stays in the backing
    /// structure. A tombstone slot is freed and `false` returned.
    pub(crate) fn keep(&mut self, slot: Slot) -> bool {
        match &self.slots[slot] {
            Some(node) if !node.is_removed() => true,
            Some(_) => {
                self.slots[slot] = None;
                self.free.push(slot);
                self.tombstones -= 1;
                self.skipped += 1;
                false
            }
            None => false,
        }
    }

    /// The node in an occupied slot, live or tombstoned.
    pub(crate) fn node_at(&self, slot: Slot) -> Option<&Node<S, C>> {
        self.slots[slot].as_ref()
    }

    /// Whether `slot` holds a live node.
    pub(crate) fn is_live(&self, slot: Slot) -> bool {
        self.node_at(slot).is_some_and(|n| !n.is_removed())
    }

    /// Whether the configured auto-compaction threshold has been crossed.
    pub(crate) fn compaction_due(&self) -> bool {
        self.tombstones > 0
            && self
                .config
                .auto_compact
                .should_compact(self.tombstones, self.backing_len())
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.index.clear();
        self.live = 0;
        self.tombstones = 0;
    }

    fn store(&mut self, node: Node<S, C>) -> Slot {
        if let Some(slot) = self.free.pop() {
            self.slots[slot] = Some(node);
            slot
        } else {
            self.slots.push(Some(node));
            self.slots.len() - 1
        }
    }
}
