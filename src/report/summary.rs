use crate::core::{AnalysisReport, InputKind, RiskLevel};
use serde::{Deserialize, Serialize};

/// Persistence envelope for one analyzed upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub file_name: String,
    pub file_size: u64,
    pub file_type: InputKind,
    pub overall_risk: RiskLevel,
    pub bias_metrics: AnalysisReport,
}

impl ScanRecord {
    pub fn new(file_name: impl Into<String>, file_size: u64, report: AnalysisReport) -> Self {
        Self {
            file_name: file_name.into(),
            file_size,
            file_type: InputKind::Tabular,
            overall_risk: report.overall_risk,
            bias_metrics: report,
        }
    }
}

/// Counts of scans per overall risk tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub total_scans: usize,
    pub high_risk: usize,
    pub medium_risk: usize,
    pub low_risk: usize,
}

impl ScanSummary {
    pub fn from_reports<'a, I>(reports: I) -> Self
    where
        I: IntoIterator<Item = &'a AnalysisReport>,
    {
        reports
            .into_iter()
            .fold(Self::default(), |summary, report| summary.record(report.overall_risk))
    }

    fn record(mut self, risk: RiskLevel) -> Self {
        self.total_scans += 1;
        match risk {
            RiskLevel::High => self.high_risk += 1,
            RiskLevel::Medium => self.medium_risk += 1,
            RiskLevel::Low => self.low_risk += 1,
        }
        self
    }
}
