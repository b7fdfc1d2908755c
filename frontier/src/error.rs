//! Typed frontier errors.
//!
//! Every failing operation leaves the frontier exactly as it was before the
//! call. States are carried as their `Debug` rendering so the error type does
//! not need to be generic over the state type.

use thiserror::Error;

/// Failure of a frontier, arena, or configuration operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontierError {
    /// `remove` was called on a frontier with no live nodes.
    #[error("frontier is empty")]
    Empty,
    /// `lookup` or `replace` named a state that is not in the frontier.
    #[error("state {state} is not in the frontier")]
    StateNotFound { state: String },
    /// `add` named a state that is already in the frontier and the
    /// configured duplicate policy rejects it.
    #[error("state {state} is already in the frontier")]
    DuplicateState { state: String },
    /// A node id did not resolve in the arena it was looked up in.
    #[error("node {id} is not in the arena")]
    UnknownNode { id: usize },
    /// Following parent links from node `id` never reached a root.
    #[error("parent links from node {id} form a cycle")]
    ParentCycle { id: usize },
    /// A `FrontierConfig` failed validation.
    #[error("invalid frontier config: {detail}")]
    InvalidConfig { detail: String },
}

impl FrontierError {
    pub(crate) fn state_not_found<S: std::fmt::Debug>(state: &S) -> Self {
        Self::StateNotFound {
            state: format!("{state:?}"),
        }
    }

    pub(crate) fn duplicate_state<S: std::fmt::Debug>(state: &S) -> Self {
        Self::DuplicateState {
            state: format!("{state:?}"),
        }
    }
}
