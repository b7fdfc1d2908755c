//! Frontier occupancy and operation counters.

/// Snapshot of a frontier's size and lifetime counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrontierStats {
    /// Live, indexed nodes (the frontier's `len()`).
    pub live: usize,
    /// Raw backing length, tombstones included.
    pub backing_len: usize,
    /// Tombstoned entries still sitting in the backing structure.
    pub tombstones: usize,
    /// Largest live count observed.
    pub high_water: usize,
    /// Successful `add` calls, including those made by `replace`.
    pub added: u64,
    /// Successful `replace` calls and retiring duplicate adds.
    pub replaced: u64,
    /// Nodes returned by `remove`.
    pub removed: u64,
    /// Tombstones discarded by `remove` or `compact`.
    pub skipped: u64,
}

impl FrontierStats {
    /// Render as a JSON object with sorted keys.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "added": self.added,
            "backing_len": self.backing_len,
            "high_water": self.high_water,
            "live": self.live,
            "removed": self.removed,
            "replaced": self.replaced,
            "skipped": self.skipped,
            "tombstones": self.tombstones,
        })
    }
}
