use serde::{Deserialize, Serialize};

/// When a frontier entry is replaced by a newly found path of equal or lower cost
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relaxation {
    /// Equal-cost paths found later replace the recorded predecessor
    #[default]
    LessOrEqual,
    /// Only strictly cheaper paths replace the recorded predecessor
    StrictlyLess,
}

impl Relaxation {
    /// Returns true if `candidate` should replace the frontier cost `current`
    pub fn accepts<W: Ord>(self, candidate: W, current: W) -> bool {
        match self {
            Relaxation::LessOrEqual => candidate <= current,
            Relaxation::StrictlyLess => candidate < current,
        }
    }
}

/// What a search returns when the frontier runs dry before reaching the target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnreachablePolicy {
    /// Return `Error::NoPathFound`
    #[default]
    Fail,
    /// Return the path `[start]` with cost zero
    Degenerate,
}

/// Frontier implementation used by the search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueKind {
    /// `SortedQueue`, re-sorted on every update
    #[default]
    Sorted,
    /// `IndexedHeap`, logarithmic updates
    IndexedHeap,
}

/// Options for a shortest-path search
///
/// Every field has a default, so a partial JSON object such as
/// `{"unreachable": "degenerate"}` is a valid configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub relaxation: Relaxation,
    pub unreachable: UnreachablePolicy,
    pub queue: QueueKind,
}

impl SearchConfig {
    /// Parses a configuration from JSON
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
