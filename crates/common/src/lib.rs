//! Shared configuration, error types, and IDs for reduplan crates.
//!
//! Architecture role:
//! - defines per-step estimation tunables passed across layers
//! - provides common [`RdpError`] / [`Result`] contracts
//! - hosts typed identifiers for jobs and steps
//!
//! Key modules:
//! - [`config`]
//! - [`error`]
//! - [`ids`]

pub mod config;
pub mod error;
pub mod ids;

pub use config::{StepConfig, DEFAULT_BYTES_PER_WORKER, DEFAULT_HISTORY_RATIO_THRESHOLD};
pub use error::{RdpError, Result};
pub use ids::*;
