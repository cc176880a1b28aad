use crate::core::{AttributeFinding, Distribution};
use crate::io::output::OutputWriter;
use crate::report::{ScanRecord, ScanSummary};
use std::io::Write;

/// Printable bias report document.
pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_scans(&mut self, scans: &[ScanRecord], summary: &ScanSummary) -> anyhow::Result<()> {
        writeln!(self.writer, "# Bias Analysis Report")?;
        writeln!(self.writer)?;
        for scan in scans {
            self.write_scan(scan)?;
        }
        if scans.len() > 1 {
            self.write_summary(summary)?;
        }
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_scan(&mut self, scan: &ScanRecord) -> anyhow::Result<()> {
        let report = &scan.bias_metrics;
        writeln!(self.writer, "## {}", scan.file_name)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Overall Risk | {} |", report.overall_risk)?;
        writeln!(self.writer, "| Total Rows | {} |", report.total_rows)?;
        writeln!(
            self.writer,
            "| Protected Attributes Analyzed | {} |",
            report.columns_analyzed
        )?;
        writeln!(self.writer)?;

        if report.findings.is_empty() {
            writeln!(
                self.writer,
                "No protected attribute columns (gender, age, race/ethnicity) were detected."
            )?;
            writeln!(self.writer)?;
            return Ok(());
        }

        for finding in &report.findings {
            self.write_finding(finding)?;
        }
        Ok(())
    }

    fn write_finding(&mut self, finding: &AttributeFinding) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "### {} ({} risk)",
            finding.attribute_type, finding.risk_level
        )?;
        writeln!(self.writer)?;

        match &finding.distribution {
            Distribution::Categorical(categories) => {
                writeln!(self.writer, "| Category | Share |")?;
                writeln!(self.writer, "|----------|-------|")?;
                for (label, share) in categories {
                    writeln!(self.writer, "| {label} | {share:.1}% |")?;
                }
            }
            Distribution::Numeric(summary) => {
                writeln!(self.writer, "| Statistic | Value |")?;
                writeln!(self.writer, "|-----------|-------|")?;
                writeln!(self.writer, "| Average | {:.1} |", summary.average)?;
                writeln!(self.writer, "| Min | {} |", summary.min)?;
                writeln!(self.writer, "| Max | {} |", summary.max)?;
                writeln!(self.writer, "| Range | {} |", summary.range)?;
            }
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "**Recommendation:** {}", finding.recommendation)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, summary: &ScanSummary) -> anyhow::Result<()> {
        writeln!(self.writer, "## Scan Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Total Scans | High Risk | Medium Risk | Low Risk |")?;
        writeln!(self.writer, "|-------------|-----------|-------------|----------|")?;
        writeln!(
            self.writer,
            "| {} | {} | {} | {} |",
            summary.total_scans, summary.high_risk, summary.medium_risk, summary.low_risk
        )?;
        Ok(())
    }
}
