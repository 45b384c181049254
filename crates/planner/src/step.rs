use std::fs;

use rdp_common::{RdpError, Result, StepConfig, StepId};
use rdp_source::InputSource;
use serde::{Deserialize, Serialize};

/// Handle to the job step being sized.
///
/// `name` doubles as the identity under which comparable past executions are
/// looked up in the history store. The handle is read-only for the duration
/// of one estimation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStepInfo {
    pub id: StepId,
    pub name: String,
    pub input: InputSource,
    #[serde(default)]
    pub config: StepConfig,
}

impl JobStepInfo {
    pub fn new(id: StepId, name: impl Into<String>, input: InputSource) -> Self {
        Self {
            id,
            name: name.into(),
            input,
            config: StepConfig::default(),
        }
    }

    pub fn with_config(mut self, config: StepConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads a step definition from a JSON file.
    pub fn load_from_json(path: &str) -> Result<Self> {
        let s = fs::read_to_string(path)?;
        serde_json::from_str(&s).map_err(|e| RdpError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_definition_parses_without_config() {
        let json = r#"{
            "id": 7,
            "name": "daily-agg",
            "input": {"Leaf": {"pattern": "/data/daily/*", "format": "files"}}
        }"#;
        let step: JobStepInfo = serde_json::from_str(json).expect("parse");
        assert_eq!(step.id, StepId(7));
        assert_eq!(step.name, "daily-agg");
        assert_eq!(step.config.target_bytes_per_worker(), 1 << 30);
    }
}
