//! Execution-history records and lookup stores for reduplan.
//!
//! Key modules:
//! - [`record`]
//! - [`store`]

pub mod record;
pub mod store;

pub use record::HistoricalRecord;
pub use store::{HistoryLookup, InMemoryHistory, JsonHistoryStore};
