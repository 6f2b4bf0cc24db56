use std::fmt;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique receipt identifier, issued by [`PointsStore::record`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptId(pub String);

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// In-memory registry of scored receipts.
///
/// The sole source of truth for "does this identifier exist". Entries are
/// never updated or deleted and live for the whole process. The registry is
/// shared across request handlers, so the backing map must tolerate
/// concurrent `record` and `lookup` calls.
#[derive(Debug, Default)]
pub struct PointsStore {
    scores: DashMap<String, u64>,
}

impl PointsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a point total under a freshly generated identifier and return it.
    pub fn record(&self, points: u64) -> ReceiptId {
        let id = Uuid::new_v4().to_string();
        self.scores.insert(id.clone(), points);
        ReceiptId(id)
    }

    /// Look up the point total recorded under `id`.
    ///
    /// `None` is the defined outcome for an identifier that was never issued,
    /// not an error.
    pub fn lookup(&self, id: &str) -> Option<u64> {
        self.scores.get(id).map(|entry| *entry)
    }

    /// Number of receipts recorded so far.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
