//! Reduce-worker sizing strategies for reduplan.
//!
//! Architecture role:
//! - models the job-step handle handed over by the orchestrator
//! - exposes the [`WorkerEstimator`] strategy seam
//! - implements direct (bytes-per-worker) and ratio-adjusted (history-scaled)
//!   sizing
//!
//! Both strategies are pure functions of the step handle and the current
//! answers of the filesystem-metadata and history collaborators; every
//! failure mode uniformly becomes "decline to estimate" (`None`).

pub mod direct;
pub mod estimator;
pub mod ratio;
pub mod step;

pub use direct::DirectSizeEstimator;
pub use estimator::WorkerEstimator;
pub use ratio::RatioAdjustedEstimator;
pub use step::JobStepInfo;
