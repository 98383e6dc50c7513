//! In-memory log of analyzed diary entries.

use crate::extract::AnalysisResult;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// One completed analysis. Immutable once appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Minute-resolution local wall-clock time of handling.
    pub timestamp: String,
    /// The diary text as submitted.
    pub text: String,
    pub result: AnalysisResult,
}

/// Append-only store of past analyses.
///
/// Implementations are injected into the web state so the handler never
/// touches a global.
pub trait History: Send + Sync {
    fn append(&self, record: HistoryRecord);

    /// All records, most recent first.
    fn all(&self) -> Vec<HistoryRecord>;
}

/// Process-lifetime store backed by a mutex-guarded vec. Unbounded.
#[derive(Default)]
pub struct InMemoryHistory {
    log: Mutex<Vec<HistoryRecord>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl History for InMemoryHistory {
    fn append(&self, record: HistoryRecord) {
        self.log.lock().unwrap().push(record);
    }

    fn all(&self) -> Vec<HistoryRecord> {
        self.log.lock().unwrap().iter().rev().cloned().collect()
    }
}
