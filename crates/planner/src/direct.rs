use tracing::{info, warn};

use rdp_source::SourceSizeResolver;

use crate::estimator::WorkerEstimator;
use crate::step::JobStepInfo;

/// Sizes the reduce phase by dividing total input bytes by a per-worker
/// byte target (`bytes_per_worker`, default 1 GiB).
#[derive(Clone)]
pub struct DirectSizeEstimator {
    resolver: SourceSizeResolver,
}

impl DirectSizeEstimator {
    pub fn new(resolver: SourceSizeResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &SourceSizeResolver {
        &self.resolver
    }
}

impl WorkerEstimator for DirectSizeEstimator {
    fn estimate(&self, step: &JobStepInfo) -> Option<u32> {
        let Some(total_bytes) = self.resolver.resolve(&step.input) else {
            info!(
                step = %step.name,
                operator = "DirectSizeEstimator",
                "declining estimate: input size unavailable"
            );
            return None;
        };

        let target_bytes = step.config.target_bytes_per_worker();
        if target_bytes == 0 {
            warn!(
                step = %step.name,
                operator = "DirectSizeEstimator",
                "declining estimate: bytes_per_worker is zero"
            );
            return None;
        }

        let workers = total_bytes.div_ceil(target_bytes).max(1);
        let workers = u32::try_from(workers).unwrap_or(u32::MAX);
        info!(
            step = %step.name,
            input_bytes = total_bytes,
            target_bytes,
            workers,
            operator = "DirectSizeEstimator",
            "direct reduce worker estimate"
        );
        Some(workers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use rdp_common::{Result, StepConfig, StepId};
    use rdp_source::{FileSystemMetadata, InputSource};

    /// One-pattern metadata double reporting a fixed total as a single object.
    struct FixedSize {
        bytes: u64,
    }

    impl FileSystemMetadata for FixedSize {
        fn expand(&self, _pattern: &str) -> Result<Vec<String>> {
            Ok(vec!["/data/part-0".to_string()])
        }

        fn content_length(&self, _path: &str) -> Result<u64> {
            Ok(self.bytes)
        }
    }

    struct NoSuchSource;

    impl FileSystemMetadata for NoSuchSource {
        fn expand(&self, pattern: &str) -> Result<Vec<String>> {
            Err(rdp_common::RdpError::InvalidConfig(format!(
                "unknown pattern: {pattern}"
            )))
        }

        fn content_length(&self, _path: &str) -> Result<u64> {
            unreachable!("expand never succeeds")
        }
    }

    fn step_with_bytes(bytes: u64, bytes_per_worker: Option<u64>) -> (DirectSizeEstimator, JobStepInfo) {
        let resolver = SourceSizeResolver::new(Arc::new(FixedSize { bytes }));
        let step = JobStepInfo::new(StepId(1), "agg", InputSource::files("/data/*"))
            .with_config(StepConfig {
                bytes_per_worker,
                history_ratio_threshold: None,
            });
        (DirectSizeEstimator::new(resolver), step)
    }

    #[test]
    fn divides_input_by_worker_target() {
        let (est, step) = step_with_bytes(3 * (1 << 30), None);
        assert_eq!(est.estimate(&step), Some(3));
    }

    #[test]
    fn partial_worker_rounds_up() {
        let (est, step) = step_with_bytes((1 << 30) + 1, None);
        assert_eq!(est.estimate(&step), Some(2));
    }

    #[test]
    fn empty_input_still_gets_one_worker() {
        let (est, step) = step_with_bytes(0, None);
        assert_eq!(est.estimate(&step), Some(1));
    }

    #[test]
    fn estimate_is_monotone_in_input_bytes() {
        let sizes = [0_u64, 1, 512, 1 << 20, 1 << 30, 5 << 30, 100 << 30];
        let mut last = 0_u32;
        for bytes in sizes {
            let (est, step) = step_with_bytes(bytes, Some(1 << 30));
            let workers = est.estimate(&step).expect("estimate");
            assert!(workers >= 1);
            assert!(workers >= last, "estimate regressed at {bytes} bytes");
            last = workers;
        }
    }

    #[test]
    fn unresolvable_input_declines() {
        let resolver = SourceSizeResolver::new(Arc::new(NoSuchSource));
        let est = DirectSizeEstimator::new(resolver);
        let step = JobStepInfo::new(StepId(1), "agg", InputSource::files("/data/*"));
        assert_eq!(est.estimate(&step), None);
    }

    #[test]
    fn zero_worker_target_declines() {
        let (est, step) = step_with_bytes(100, Some(0));
        assert_eq!(est.estimate(&step), None);
    }
}
