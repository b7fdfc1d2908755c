//! Append-only storage for expanded nodes.
//!
//! A search loop moves each node it pops from a frontier into a `NodeArena`
//! and hands the returned [`NodeId`] to the children it generates. Parent
//! links therefore point into the arena, never into a frontier, and a
//! frontier's tombstones are not kept alive by them.

use crate::error::FrontierError;
use crate::node::{Node, NodeId};

/// Owner of expanded nodes, indexed by [`NodeId`].
#[derive(Debug, Clone)]
pub struct NodeArena<S, C = f64> {
    nodes: Vec<Node<S, C>>,
}

impl<S, C> NodeArena<S, C> {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Store a node and return its handle.
    pub fn push(&mut self, node: Node<S, C>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Borrow a stored node.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node<S, C>> {
        self.nodes.get(id.0)
    }

    /// Number of stored nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// States on the path from the root to `id`, root excluded.
    ///
    /// A root node yields an empty path.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::UnknownNode`] if `id`, or any parent on the way
    /// up, does not resolve in this arena, and [`FrontierError::ParentCycle`]
    /// if the parent links loop.
    pub fn path_to(&self, id: NodeId) -> Result<Vec<&S>, FrontierError> {
        let mut path = Vec::new();
        let mut current = self.resolve(id)?;
        while let Some(parent) = current.parent {
            path.push(&current.state);
            // An acyclic walk visits each stored node at most once.
            if path.len() > self.nodes.len() {
                return Err(FrontierError::ParentCycle { id: id.0 });
            }
            current = self.resolve(parent)?;
        }
        path.reverse();
        Ok(path)
    }

    /// Length of the root-exclusive path to `id`.
    ///
    /// # Errors
    ///
    /// Same as [`NodeArena::path_to`].
    pub fn depth(&self, id: NodeId) -> Result<usize, FrontierError> {
        self.path_to(id).map(|p| p.len())
    }

    fn resolve(&self, id: NodeId) -> Result<&Node<S, C>, FrontierError> {
        self.get(id).ok_or(FrontierError::UnknownNode { id: id.0 })
    }
}

impl<S, C> Default for NodeArena<S, C> {
    fn default() -> Self {
        Self::new()
    }
}
