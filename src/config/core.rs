use serde::{Deserialize, Serialize};

use super::keywords::KeywordConfig;
use super::thresholds::RiskThresholds;
use crate::analysis::KeywordTable;
use crate::core::RiskLevel;

/// Default upload limit: 100 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Root configuration structure for biasmap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BiasmapConfig {
    /// Per-attribute risk thresholds
    #[serde(default)]
    pub thresholds: Option<RiskThresholds>,

    /// Header keywords used to detect protected attributes
    #[serde(default)]
    pub keywords: Option<KeywordConfig>,

    /// Input loading limits
    #[serde(default)]
    pub input: Option<InputConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Settings for `biasmap validate`
    #[serde(default)]
    pub validation: Option<ValidationConfig>,
}

impl BiasmapConfig {
    pub fn risk_thresholds(&self) -> RiskThresholds {
        self.thresholds.unwrap_or_default()
    }

    pub fn keyword_table(&self) -> KeywordTable {
        self.keywords
            .as_ref()
            .map(KeywordConfig::to_table)
            .unwrap_or_default()
    }

    pub fn input_config(&self) -> InputConfig {
        self.input.clone().unwrap_or_default()
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|output| output.default_format.as_deref())
    }

    pub fn max_overall_risk(&self) -> RiskLevel {
        self.validation
            .as_ref()
            .map(|v| v.max_overall_risk)
            .unwrap_or(RiskLevel::Medium)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputConfig {
    /// Files above this size are rejected before decoding
    #[serde(default = "default_max_file_size")]
    pub max_file_size_bytes: u64,

    /// Field delimiter for tabular files
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: default_max_file_size(),
            delimiter: default_delimiter(),
        }
    }
}

fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE
}
fn default_delimiter() -> char {
    ','
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ValidationConfig {
    /// Highest overall risk that still passes validation
    #[serde(default = "default_max_overall_risk")]
    pub max_overall_risk: RiskLevel,
}

fn default_max_overall_risk() -> RiskLevel {
    RiskLevel::Medium
}
