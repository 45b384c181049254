use serde::{Deserialize, Serialize};

/// Default target input bytes per reduce worker (1 GiB).
pub const DEFAULT_BYTES_PER_WORKER: u64 = 1 << 30;

/// Default lower bound on the acceptable current/historical input-size ratio.
/// The upper bound of the acceptance band is its reciprocal.
pub const DEFAULT_HISTORY_RATIO_THRESHOLD: f64 = 0.10;

/// Per-step estimation tunables.
///
/// Both fields are optional overrides; unset fields fall back to the
/// platform defaults via the accessor methods.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepConfig {
    /// Target input bytes per reduce worker for the direct estimator.
    #[serde(default)]
    pub bytes_per_worker: Option<u64>,
    /// Lower bound on the acceptable current/historical input ratio.
    #[serde(default)]
    pub history_ratio_threshold: Option<f64>,
}

impl StepConfig {
    pub fn target_bytes_per_worker(&self) -> u64 {
        self.bytes_per_worker.unwrap_or(DEFAULT_BYTES_PER_WORKER)
    }

    pub fn comparability_threshold(&self) -> f64 {
        self.history_ratio_threshold
            .unwrap_or(DEFAULT_HISTORY_RATIO_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = StepConfig::default();
        assert_eq!(cfg.target_bytes_per_worker(), 1 << 30);
        assert_eq!(cfg.comparability_threshold(), 0.10);
    }

    #[test]
    fn overrides_win_over_defaults() {
        let cfg = StepConfig {
            bytes_per_worker: Some(64 * 1024 * 1024),
            history_ratio_threshold: Some(0.25),
        };
        assert_eq!(cfg.target_bytes_per_worker(), 64 * 1024 * 1024);
        assert_eq!(cfg.comparability_threshold(), 0.25);
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let cfg: StepConfig = serde_json::from_str("{}").expect("parse");
        assert!(cfg.bytes_per_worker.is_none());
        assert!(cfg.history_ratio_threshold.is_none());
    }
}
