//! Run configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Limits and reporting options for orchestrated runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabConfig {
    /// Largest n any orchestrated enumeration may touch. p(n) grows fast
    /// enough that an unbounded request can exhaust memory.
    pub max_n: u32,
    /// Keep passing cases in reports. Failures are always kept.
    pub keep_passing_cases: bool,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            max_n: 60,
            keep_passing_cases: true,
        }
    }
}

impl LabConfig {
    pub fn with_max_n(mut self, max_n: u32) -> Self {
        self.max_n = max_n;
        self
    }

    pub fn with_keep_passing_cases(mut self, keep: bool) -> Self {
        self.keep_passing_cases = keep;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
