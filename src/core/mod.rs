pub mod dataset;
pub mod types;

pub use dataset::{AnalysisInput, Dataset, InputKind, Row};
pub use types::{
    AnalysisReport, AttributeFinding, AttributeType, Distribution, NumericSummary, RiskLevel,
    ValueKind,
};
