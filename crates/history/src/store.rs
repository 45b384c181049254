use std::collections::HashMap;
use std::fs;

use rdp_common::{RdpError, Result};

use crate::record::HistoricalRecord;

/// Read-side interface over the execution-history store.
///
/// The planning core only consumes history; collection and persistence of
/// records belong to the host orchestrator.
pub trait HistoryLookup: Send + Sync {
    /// Up to `limit` records for the named step, most recent first.
    /// An empty vector means no comparable run is known.
    ///
    /// # Errors
    /// Returns an error only for store-level failures (backend unreachable,
    /// corrupt data); "no history" is the empty vector, not an error.
    fn fetch_most_recent(&self, step_name: &str, limit: usize) -> Result<Vec<HistoricalRecord>>;
}

/// History store backed by a JSON file mapping step names to their runs
/// in chronological order (oldest first).
#[derive(Debug, Default)]
pub struct JsonHistoryStore {
    runs_by_step: HashMap<String, Vec<HistoricalRecord>>,
}

impl JsonHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &str) -> Result<Self> {
        let s = fs::read_to_string(path)?;
        let runs_by_step: HashMap<String, Vec<HistoricalRecord>> =
            serde_json::from_str(&s).map_err(|e| RdpError::InvalidConfig(e.to_string()))?;
        Ok(Self { runs_by_step })
    }
}

impl HistoryLookup for JsonHistoryStore {
    fn fetch_most_recent(&self, step_name: &str, limit: usize) -> Result<Vec<HistoricalRecord>> {
        Ok(self
            .runs_by_step
            .get(step_name)
            .map(|runs| runs.iter().rev().take(limit).copied().collect())
            .unwrap_or_default())
    }
}

/// In-memory history store, chronological append order.
#[derive(Debug, Default)]
pub struct InMemoryHistory {
    runs_by_step: HashMap<String, Vec<HistoricalRecord>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step_name: impl Into<String>, record: HistoricalRecord) {
        self.runs_by_step
            .entry(step_name.into())
            .or_default()
            .push(record);
    }
}

impl HistoryLookup for InMemoryHistory {
    fn fetch_most_recent(&self, step_name: &str, limit: usize) -> Result<Vec<HistoricalRecord>> {
        Ok(self
            .runs_by_step
            .get(step_name)
            .map(|runs| runs.iter().rev().take(limit).copied().collect())
            .unwrap_or_default())
    }
}
