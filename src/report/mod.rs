//! Report aggregation.
//!
//! Combines per-attribute findings into the aggregate verdict. A report
//! with no findings is `Low` risk.

pub mod summary;

use crate::core::{AnalysisReport, AttributeFinding, RiskLevel};
use chrono::{DateTime, Utc};

pub use summary::{ScanRecord, ScanSummary};

/// Highest tier among the findings, `Low` when there are none.
pub fn overall_risk(findings: &[AttributeFinding]) -> RiskLevel {
    findings
        .iter()
        .map(|finding| finding.risk_level)
        .max()
        .unwrap_or(RiskLevel::Low)
}

/// Assemble a report stamped with the current time.
pub fn build_report(findings: Vec<AttributeFinding>, total_rows: usize) -> AnalysisReport {
    build_report_at(findings, total_rows, Utc::now())
}

pub fn build_report_at(
    findings: Vec<AttributeFinding>,
    total_rows: usize,
    generated_at: DateTime<Utc>,
) -> AnalysisReport {
    AnalysisReport {
        overall_risk: overall_risk(&findings),
        columns_analyzed: findings.len(),
        total_rows,
        findings,
        generated_at,
    }
}
