//! Bias analysis engine.
//!
//! Runs a dataset through four stages, strictly in order:
//!
//! 1. column classification ([`columns`])
//! 2. distribution analysis ([`distribution`])
//! 3. risk classification ([`crate::risk`])
//! 4. report aggregation ([`crate::report`])
//!
//! The engine holds no mutable state. Every call is independent, so
//! separate datasets may be analyzed concurrently without coordination.
//!
//! ```
//! use biasmap::{analyze, Dataset, RiskLevel, Row};
//!
//! let rows: Vec<Row> = ["male", "male", "male", "female"]
//!     .iter()
//!     .map(|g| [("gender".to_string(), g.to_string())].into_iter().collect())
//!     .collect();
//!
//! let report = analyze(&Dataset::from_rows(rows)).unwrap();
//! assert_eq!(report.overall_risk, RiskLevel::Medium);
//! ```

pub mod columns;
pub mod distribution;

use crate::config::{BiasmapConfig, RiskThresholds};
use crate::core::{AnalysisInput, AnalysisReport, AttributeFinding, Dataset};
use crate::errors::{BiasError, Result};
use crate::report;
use crate::risk::RiskClassifier;
use tracing::{debug, info, info_span};

pub use columns::{AttributeRule, ColumnMatch, KeywordTable};

/// Configured analysis pipeline.
#[derive(Debug, Clone, Default)]
pub struct BiasAnalyzer {
    pub keywords: KeywordTable,
    pub classifier: RiskClassifier,
}

impl BiasAnalyzer {
    pub fn new(keywords: KeywordTable, thresholds: RiskThresholds) -> Self {
        Self {
            keywords,
            classifier: RiskClassifier::new(thresholds),
        }
    }

    pub fn from_config(config: &BiasmapConfig) -> Self {
        Self::new(config.keyword_table(), config.risk_thresholds())
    }

    /// Analyze a tabular dataset.
    ///
    /// Fails only when the dataset has rows but no usable header. Attributes
    /// without a matching column, or whose sample is empty, are left out of
    /// the findings.
    pub fn analyze(&self, dataset: &Dataset) -> Result<AnalysisReport> {
        let span = info_span!(
            "bias_analysis",
            rows = dataset.len(),
            columns = dataset.columns().len()
        );
        let _enter = span.enter();

        dataset.check_header()?;

        let matches = {
            let _span = info_span!("column_classification").entered();
            let matches = self.keywords.classify(dataset.columns());
            debug!(detected = matches.len(), "Protected attribute columns resolved");
            matches
        };

        let findings: Vec<AttributeFinding> = matches
            .iter()
            .filter_map(|m| self.assess_column(dataset, m))
            .collect();

        let report = {
            let _span = info_span!("report_aggregation").entered();
            report::build_report(findings, dataset.len())
        };

        info!(
            overall_risk = %report.overall_risk,
            findings = report.columns_analyzed,
            "Bias analysis complete"
        );
        Ok(report)
    }

    fn assess_column(&self, dataset: &Dataset, m: &ColumnMatch<'_>) -> Option<AttributeFinding> {
        let distribution = {
            let _span = info_span!(
                "distribution_analysis",
                attribute = %m.attribute,
                column = m.column
            )
            .entered();
            distribution::analyze_column(dataset, m.column, m.attribute.value_kind())
        };

        let Some(distribution) = distribution else {
            debug!(
                attribute = %m.attribute,
                column = m.column,
                "No usable values, attribute skipped"
            );
            return None;
        };

        let _span = info_span!("risk_classification", attribute = %m.attribute).entered();
        Some(self.classifier.assess(m.attribute, distribution))
    }

    /// Analyze any caller input, rejecting kinds the engine cannot handle.
    pub fn analyze_input(&self, input: &AnalysisInput) -> Result<AnalysisReport> {
        match input {
            AnalysisInput::Tabular(dataset) => self.analyze(dataset),
            AnalysisInput::Image { .. } => Err(BiasError::UnsupportedInputKind {
                kind: input.kind(),
            }),
        }
    }
}

/// Analyze a dataset with the built-in keyword table and thresholds.
pub fn analyze(dataset: &Dataset) -> Result<AnalysisReport> {
    BiasAnalyzer::default().analyze(dataset)
}

/// Analyze a dataset, optionally overriding the keyword table.
pub fn analyze_with_keywords(
    dataset: &Dataset,
    keywords: Option<&KeywordTable>,
) -> Result<AnalysisReport> {
    let analyzer = BiasAnalyzer {
        keywords: keywords.cloned().unwrap_or_default(),
        ..BiasAnalyzer::default()
    };
    analyzer.analyze(dataset)
}

/// Analyze caller input with the built-in configuration.
pub fn analyze_input(input: &AnalysisInput) -> Result<AnalysisReport> {
    BiasAnalyzer::default().analyze_input(input)
}
