use super::analyze::{resolve_config, scan_file};
use crate::analysis::BiasAnalyzer;
use crate::core::{AttributeFinding, RiskLevel};
use crate::io::output::describe_distribution;
use crate::report::ScanRecord;
use anyhow::Result;
use std::path::PathBuf;

pub struct ValidateConfig {
    pub path: PathBuf,
    pub config: Option<PathBuf>,
    pub max_risk: Option<RiskLevel>,
    pub verbosity: u8,
}

/// Result of checking one dataset against the allowed risk ceiling.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationDetails {
    pub scan: ScanRecord,
    pub max_allowed: RiskLevel,
}

impl ValidationDetails {
    pub fn passed(&self) -> bool {
        self.scan.overall_risk <= self.max_allowed
    }

    /// Findings whose own tier is above the ceiling.
    pub fn violations(&self) -> impl Iterator<Item = &AttributeFinding> {
        self.scan
            .bias_metrics
            .findings
            .iter()
            .filter(move |finding| finding.risk_level > self.max_allowed)
    }
}

pub fn validate_dataset(config: &ValidateConfig) -> Result<ValidationDetails> {
    let settings = resolve_config(config.config.as_deref())?;
    let max_allowed = config
        .max_risk
        .unwrap_or_else(|| settings.max_overall_risk());

    let analyzer = BiasAnalyzer::from_config(&settings);
    let scan = scan_file(&config.path, &analyzer, &settings.input_config())?;

    Ok(ValidationDetails { scan, max_allowed })
}

pub fn validate_project(config: ValidateConfig) -> Result<()> {
    let details = validate_dataset(&config)?;

    if details.passed() {
        print_validation_success(&details, config.verbosity);
        Ok(())
    } else {
        print_validation_failure(&details);
        anyhow::bail!(
            "Validation failed: overall risk {} exceeds {}",
            details.scan.overall_risk,
            details.max_allowed
        )
    }
}

fn print_validation_success(details: &ValidationDetails, verbosity: u8) {
    println!(
        "[OK] Validation PASSED - {} overall risk is {} (max {})",
        details.scan.file_name, details.scan.overall_risk, details.max_allowed
    );

    if verbosity > 0 {
        println!();
        for finding in &details.scan.bias_metrics.findings {
            print_finding(finding);
        }
    }
}

fn print_validation_failure(details: &ValidationDetails) {
    println!(
        "[ERROR] Validation FAILED - {} overall risk is {} (max {})",
        details.scan.file_name, details.scan.overall_risk, details.max_allowed
    );
    println!();
    println!("  Failed checks:");
    for finding in details.violations() {
        print_finding(finding);
    }
}

fn print_finding(finding: &AttributeFinding) {
    println!(
        "    {}: {} ({})",
        finding.attribute_type,
        finding.risk_level,
        describe_distribution(&finding.distribution)
    );
    println!("       └─ {}", finding.recommendation);
}
