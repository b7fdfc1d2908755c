//! Frontier node record.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::cost::Cost;

/// Handle to a node stored in a [`crate::arena::NodeArena`].
///
/// Used as the parent back-reference on [`Node`]. A `NodeId` never owns the
/// node it names, so tombstoned frontier entries are freed as soon as the
/// frontier discards them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bookkeeping record for one appearance of a state in a frontier.
///
/// Equality and hashing look at `state` only, so two nodes for the same state
/// compare equal whatever their costs. Ordering by `value` is available
/// through [`Node::value_cmp`] and [`Node::precedes`] rather than `Ord`, since
/// an `Ord` by value would disagree with the state-based `Eq`.
#[derive(Debug, Clone)]
pub struct Node<S, C = f64> {
    /// The state this node stands for; the frontier's membership key.
    pub state: S,
    /// Arena handle of the node this one was expanded from (`None` for root).
    pub parent: Option<NodeId>,
    /// Accumulated cost from the root.
    pub path_cost: C,
    /// Ordering key for the priority frontier (e.g. `g + h`).
    pub value: C,
    removed: bool,
}

impl<S, C: Cost> Node<S, C> {
    /// A root node: no parent, zero path cost, zero value.
    #[must_use]
    pub fn new(state: S) -> Self {
        Self {
            state,
            parent: None,
            path_cost: C::ZERO,
            value: C::ZERO,
            removed: false,
        }
    }

    /// Set the parent back-reference.
    #[must_use]
    pub fn with_parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Set the accumulated path cost.
    #[must_use]
    pub fn with_path_cost(mut self, path_cost: C) -> Self {
        self.path_cost = path_cost;
        self
    }

    /// Set the ordering value.
    #[must_use]
    pub fn with_value(mut self, value: C) -> Self {
        self.value = value;
        self
    }

    /// Total order by `value` ascending.
    #[must_use]
    pub fn value_cmp(&self, other: &Self) -> Ordering {
        self.value.cost_cmp(&other.value)
    }

    /// `true` iff `self.value < other.value`.
    #[must_use]
    pub fn precedes(&self, other: &Self) -> bool {
        self.value_cmp(other) == Ordering::Less
    }
}

impl<S, C> Node<S, C> {
    /// Whether this node has been superseded or discarded by a frontier.
    ///
    /// Once set the flag stays set; the node is inert.
    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    pub(crate) fn mark_removed(&mut self) {
        self.removed = true;
    }
}

impl<S: PartialEq, C> PartialEq for Node<S, C> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<S: Eq, C> Eq for Node<S, C> {}

impl<S: Hash, C> Hash for Node<S, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}
