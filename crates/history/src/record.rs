use serde::{Deserialize, Serialize};

/// Byte statistics captured from one prior run of an equivalent job step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    /// Bytes consumed by the input (map) phase of the historical run.
    pub mapper_bytes: u64,
    /// Bytes carried into the aggregation (reduce) phase of the historical run.
    pub reducer_bytes: u64,
}

impl HistoricalRecord {
    pub fn new(mapper_bytes: u64, reducer_bytes: u64) -> Self {
        Self {
            mapper_bytes,
            reducer_bytes,
        }
    }
}
