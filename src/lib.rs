// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod report;
pub mod risk;

// Re-export commonly used types
pub use crate::core::{
    AnalysisInput, AnalysisReport, AttributeFinding, AttributeType, Dataset, Distribution,
    InputKind, NumericSummary, RiskLevel, Row,
};

pub use crate::analysis::{
    analyze, analyze_input, analyze_with_keywords, AttributeRule, BiasAnalyzer, KeywordTable,
};

pub use crate::config::{BiasmapConfig, RiskThresholds};

pub use crate::errors::{BiasError, Result};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::report::{ScanRecord, ScanSummary};

pub use crate::risk::RiskClassifier;
