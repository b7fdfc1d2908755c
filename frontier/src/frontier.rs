//! The contract shared by all frontier variants.

use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;

use crate::cost::Cost;
use crate::error::FrontierError;
use crate::membership::FrontierCore;
use crate::node::Node;
use crate::stats::FrontierStats;

/// Permission to mutate a frontier's [`FrontierCore`] directly.
///
/// Only this module can construct one.
#[derive(Debug, Clone, Copy)]
pub struct CoreToken(());

/// An ordered, updatable collection of candidate states.
///
/// Variants differ only in expansion order. They implement `add`, `remove`,
/// `compact` and `clear` against their own backing structure and expose the
/// shared [`FrontierCore`]; membership, lookup, sizing and `replace` are
/// provided here on top of those.
///
/// # Contract
///
/// - A state is in the frontier iff it is in the membership index; the index
///   entry is the state's only live node.
/// - `len()` counts live nodes only. Superseded nodes stay in the backing
///   structure as tombstones until `remove` or `compact` discards them.
/// - Every failing call leaves the frontier unchanged.
///
/// The trait is sealed. Mutable access to the shared core needs a
/// `CoreToken`, which cannot be built outside this crate, so callers can
/// only change a frontier through the operations below:
///
/// ```compile_fail
/// use fringe_frontier::{Frontier, QueueFrontier};
///
/// let mut big: QueueFrontier<u32, i64> = QueueFrontier::new();
/// let small: QueueFrontier<u32, i64> = QueueFrontier::new();
/// *big.core_mut() = small.core().clone();
/// ```
pub trait Frontier {
    /// Membership key of the nodes held.
    type State: Eq + Hash + Clone + Debug;
    /// Numeric type of `path_cost` and `value`.
    type Cost: Cost;

    /// Shared index and storage.
    fn core(&self) -> &FrontierCore<Self::State, Self::Cost>;

    #[doc(hidden)]
    fn core_mut(&mut self, token: CoreToken) -> &mut FrontierCore<Self::State, Self::Cost>;

    /// Insert a node whose state is not yet in the frontier.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::DuplicateState`] if the state is already
    /// present and the frontier's [`crate::DuplicatePolicy`] is `Reject`.
    fn add(&mut self, node: Node<Self::State, Self::Cost>) -> Result<(), FrontierError>;

    /// Take the next live node in this variant's expansion order.
    ///
    /// Tombstones met on the way are discarded. When the last live node
    /// leaves, any tombstones still queued are purged.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::Empty`] if no live node remains.
    fn remove(&mut self) -> Result<Node<Self::State, Self::Cost>, FrontierError>;

    /// Purge tombstones from the backing structure. Expansion order and the
    /// live set are unchanged.
    fn compact(&mut self);

    /// Drop every node, live or tombstoned. Lifetime counters are kept.
    fn clear(&mut self);

    /// Tombstone the queued node for `node.state` and queue `node` in its
    /// place. The live count is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::StateNotFound`] if the state is not in the
    /// frontier.
    fn replace(&mut self, node: Node<Self::State, Self::Cost>) -> Result<(), FrontierError> {
        self.core_mut(CoreToken(())).retire(&node.state)?;
        self.add(node)
    }

    /// Number of live nodes.
    fn len(&self) -> usize {
        self.core().len()
    }

    /// Whether no live node remains.
    fn is_empty(&self) -> bool {
        self.core().is_empty()
    }

    /// Whether `state` is in the frontier.
    fn contains<Q>(&self, state: &Q) -> bool
    where
        Self::State: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.core().contains(state)
    }

    /// The live node queued for `state`.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::StateNotFound`] if the state is not in the
    /// frontier.
    fn lookup<Q>(&self, state: &Q) -> Result<&Node<Self::State, Self::Cost>, FrontierError>
    where
        Self::State: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.core()
            .get(state)
            .ok_or_else(|| FrontierError::state_not_found(&state))
    }

    /// Raw backing length, tombstones included.
    fn backing_len(&self) -> usize {
        self.core().backing_len()
    }

    /// Occupancy and lifetime counters.
    fn stats(&self) -> FrontierStats {
        self.core().stats()
    }
}
