use std::sync::Arc;

use tracing::{debug, info, warn};

use rdp_history::HistoryLookup;

use crate::direct::DirectSizeEstimator;
use crate::estimator::WorkerEstimator;
use crate::step::JobStepInfo;

/// Refines the direct estimate with the output/input byte ratio of the most
/// recent comparable run.
///
/// Composition, not inheritance: the direct estimator is held as a value and
/// invoked as an ordinary call, so each strategy stays independently
/// testable and substitutable. The base estimate is recomputed on every call;
/// nothing is cached across estimators.
pub struct RatioAdjustedEstimator {
    direct: DirectSizeEstimator,
    history: Arc<dyn HistoryLookup>,
}

impl RatioAdjustedEstimator {
    pub fn new(direct: DirectSizeEstimator, history: Arc<dyn HistoryLookup>) -> Self {
        Self { direct, history }
    }
}

impl WorkerEstimator for RatioAdjustedEstimator {
    fn estimate(&self, step: &JobStepInfo) -> Option<u32> {
        // Stage 1: most recent comparable run. Store failures are treated
        // the same as "no history": decline, never propagate.
        let record = match self.history.fetch_most_recent(&step.name, 1) {
            Ok(records) => records.into_iter().next(),
            Err(err) => {
                warn!(
                    step = %step.name,
                    error = %err,
                    operator = "RatioAdjustedEstimator",
                    "history lookup failed; declining estimate"
                );
                None
            }
        };
        let Some(record) = record else {
            debug!(
                step = %step.name,
                operator = "RatioAdjustedEstimator",
                "no comparable run on record; declining estimate"
            );
            return None;
        };

        // Stage 2: current input size.
        let current_bytes = self.direct.resolver().resolve(&step.input)?;

        // Stage 3: comparability band. A zero historical input makes both
        // ratios undefined, so it declines before any division happens.
        if record.mapper_bytes == 0 {
            debug!(
                step = %step.name,
                operator = "RatioAdjustedEstimator",
                "historical run consumed zero bytes; declining estimate"
            );
            return None;
        }
        let threshold = step.config.comparability_threshold();
        let ratio = current_bytes as f64 / record.mapper_bytes as f64;
        if ratio < threshold || ratio > 1.0 / threshold {
            warn!(
                step = %step.name,
                current_bytes,
                historical_bytes = record.mapper_bytes,
                ratio,
                threshold,
                operator = "RatioAdjustedEstimator",
                "current input too different from last run; declining estimate"
            );
            return None;
        }

        // Stages 4-6: scale a freshly computed base estimate by the
        // historical reduce/map byte ratio.
        let base = self.direct.estimate(step)?;
        let reducer_ratio = record.reducer_bytes as f64 / record.mapper_bytes as f64;
        let workers = ((f64::from(base) * reducer_ratio).ceil() as u32).max(1);
        info!(
            step = %step.name,
            base,
            reducer_ratio,
            workers,
            operator = "RatioAdjustedEstimator",
            "ratio-adjusted reduce worker estimate"
        );
        Some(workers)
    }
}
