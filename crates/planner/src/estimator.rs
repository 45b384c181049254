use crate::step::JobStepInfo;

/// Strategy seam for reduce-worker sizing.
///
/// `None` means "decline to estimate"; the orchestrator then falls back to
/// its platform default worker count. A returned estimate is always >= 1.
pub trait WorkerEstimator: Send + Sync {
    fn estimate(&self, step: &JobStepInfo) -> Option<u32>;
}
