//! Frontier configuration.

use crate::error::FrontierError;

/// Construction-time settings shared by every frontier variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrontierConfig {
    /// What `add` does when the node's state is already in the frontier.
    pub duplicate_policy: DuplicatePolicy,
    /// Capacity reserved up front for the backing structure and the index.
    pub initial_capacity: usize,
    /// When to purge tombstones from the backing structure eagerly.
    pub auto_compact: AutoCompact,
}

impl FrontierConfig {
    /// Check that every setting is usable.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::InvalidConfig`] if `auto_compact` is a ratio
    /// outside `(0, 1]` or a zero threshold.
    pub fn validate(&self) -> Result<(), FrontierError> {
        match self.auto_compact {
            AutoCompact::Ratio(r) if !ratio_in_range(r) => Err(FrontierError::InvalidConfig {
                detail: format!("AutoCompact::Ratio must be in (0, 1], got {r}"),
            }),
            AutoCompact::Threshold(0) => Err(FrontierError::InvalidConfig {
                detail: "AutoCompact::Threshold must be at least 1".into(),
            }),
            _ => Ok(()),
        }
    }
}

/// `(0, 1]`; `NaN` is out of range.
fn ratio_in_range(r: f64) -> bool {
    r > 0.0 && r <= 1.0
}

impl Default for FrontierConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Reject,
            initial_capacity: 0,
            auto_compact: AutoCompact::Never,
        }
    }
}

/// Behaviour of `add` for a state that is already in the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Fail with [`FrontierError::DuplicateState`] and change nothing.
    /// Default.
    Reject,
    /// Tombstone the queued node and install the new one, exactly as
    /// `replace` would. The live count is unchanged.
    Retire,
}

/// Eager tombstone purging.
///
/// Tombstones are always discarded lazily by `remove`; compaction only bounds
/// how many may pile up in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AutoCompact {
    /// Never compact automatically. Default.
    Never,
    /// Compact when tombstones make up more than this fraction of the
    /// backing structure.
    Ratio(f64),
    /// Compact once this many tombstones have accumulated.
    Threshold(usize),
}

impl AutoCompact {
    pub(crate) fn should_compact(self, tombstones: usize, backing_len: usize) -> bool {
        match self {
            Self::Never => false,
            #[allow(clippy::cast_precision_loss)]
            Self::Ratio(r) => backing_len > 0 && tombstones as f64 / backing_len as f64 > r,
            Self::Threshold(t) => tombstones >= t,
        }
    }
}
