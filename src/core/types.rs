//! Report types produced by the bias analysis pipeline

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk tier assigned per attribute and in aggregate.
///
/// Ordered so that `Low < Medium < High`, which lets the aggregate verdict
/// be computed as the maximum over all findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Protected attribute recognized by the column classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AttributeType {
    Gender,
    Age,
    #[serde(rename = "Race/Ethnicity")]
    RaceEthnicity,
}

/// How values of an attribute column are tabulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Category counts; `fold_case` lower-cases and trims labels first.
    Categorical { fold_case: bool },
    /// Integer sample summarized by average/min/max/range.
    Numeric,
}

impl AttributeType {
    pub fn value_kind(&self) -> ValueKind {
        match self {
            Self::Gender => ValueKind::Categorical { fold_case: true },
            Self::Age => ValueKind::Numeric,
            Self::RaceEthnicity => ValueKind::Categorical { fold_case: false },
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Gender => "Gender",
            Self::Age => "Age",
            Self::RaceEthnicity => "Race/Ethnicity",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Summary statistics for a numeric attribute sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    /// Mean of the sample, rounded to one decimal place
    pub average: f64,
    pub min: i64,
    pub max: i64,
    pub range: i64,
}

/// Distribution of values observed in an attribute column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum Distribution {
    /// Category label to percentage, in first-seen order
    Categorical(IndexMap<String, f64>),
    Numeric(NumericSummary),
}

impl Distribution {
    /// Largest category share, or `None` for numeric distributions.
    pub fn max_percentage(&self) -> Option<f64> {
        match self {
            Self::Categorical(categories) => categories.values().copied().reduce(f64::max),
            Self::Numeric(_) => None,
        }
    }
}

/// Per-attribute analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeFinding {
    pub attribute_type: AttributeType,
    pub distribution: Distribution,
    pub risk_level: RiskLevel,
    pub recommendation: String,
}

/// Aggregate result of analyzing one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub findings: Vec<AttributeFinding>,
    pub overall_risk: RiskLevel,
    pub total_rows: usize,
    pub columns_analyzed: usize,
    pub generated_at: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn finding(&self, attribute: AttributeType) -> Option<&AttributeFinding> {
        self.findings
            .iter()
            .find(|finding| finding.attribute_type == attribute)
    }
}
