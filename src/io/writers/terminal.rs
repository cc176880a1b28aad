use crate::core::AttributeFinding;
use crate::formatting::{FormattingConfig, OutputFormatter};
use crate::io::output::{describe_distribution, OutputWriter};
use crate::report::{ScanRecord, ScanSummary};
use std::io::Write;

const RULE: &str = "───────────────────────────────────────────";

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: formatting.formatter(),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_scans(&mut self, scans: &[ScanRecord], summary: &ScanSummary) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header("Bias Analysis Report"))?;
        writeln!(self.writer, "{}", self.formatter.header("===================="))?;
        writeln!(self.writer)?;

        for scan in scans {
            self.print_scan(scan)?;
        }
        if scans.len() > 1 {
            self.print_summary(summary)?;
        }
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn print_scan(&mut self, scan: &ScanRecord) -> anyhow::Result<()> {
        let report = &scan.bias_metrics;
        writeln!(
            self.writer,
            "{} {}",
            self.formatter.emoji("📊", "[FILE]"),
            self.formatter.bold(&scan.file_name)
        )?;
        writeln!(self.writer, "{RULE}")?;
        writeln!(self.writer, "  Rows analyzed: {}", report.total_rows)?;
        writeln!(
            self.writer,
            "  Protected attributes: {}",
            report.columns_analyzed
        )?;
        writeln!(
            self.writer,
            "  Overall risk: {}",
            self.formatter.risk(report.overall_risk)
        )?;
        writeln!(self.writer)?;

        if report.findings.is_empty() {
            writeln!(
                self.writer,
                "  {}",
                self.formatter.dim("No gender, age or race/ethnicity columns detected")
            )?;
            writeln!(self.writer)?;
            return Ok(());
        }

        for finding in &report.findings {
            self.print_finding(finding)?;
        }
        Ok(())
    }

    fn print_finding(&mut self, finding: &AttributeFinding) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "  {:<16} {}",
            finding.attribute_type.display_name(),
            self.formatter.risk(finding.risk_level)
        )?;
        writeln!(
            self.writer,
            "    {}",
            self.formatter.dim(&describe_distribution(&finding.distribution))
        )?;
        writeln!(
            self.writer,
            "    {} {}",
            self.formatter.emoji("💡", "->"),
            finding.recommendation
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_summary(&mut self, summary: &ScanSummary) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.bold("Scan Summary"))?;
        writeln!(self.writer, "{RULE}")?;
        writeln!(self.writer, "  Total scans: {}", summary.total_scans)?;
        writeln!(self.writer, "  High risk:   {}", summary.high_risk)?;
        writeln!(self.writer, "  Medium risk: {}", summary.medium_risk)?;
        writeln!(self.writer, "  Low risk:    {}", summary.low_risk)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::io::loader::read_dataset;

    #[test]
    fn test_plain_terminal_output() {
        let csv = "gender,race\nmale,A\nmale,B\nmale,C\nmale,D\nfemale,E\n";
        let dataset = read_dataset(csv.as_bytes(), ',').unwrap();
        let scans = vec![ScanRecord::new("hr.csv", 0, analyze(&dataset).unwrap())];
        let summary = ScanSummary::from_reports(scans.iter().map(|s| &s.bias_metrics));

        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer, FormattingConfig::plain())
            .write_scans(&scans, &summary)
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("[FILE] hr.csv"));
        assert!(text.contains("Overall risk: [!!] High"));
        assert!(text.contains("Gender           [!!] High"));
        assert!(text.contains("male: 80.0%, female: 20.0%"));
        assert!(text.contains("Race/Ethnicity   [ok] Low"));
        assert!(!text.contains("Scan Summary"));
    }
}
