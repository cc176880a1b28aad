use crate::io::output::{describe_distribution, OutputWriter};
use crate::report::{ScanRecord, ScanSummary};
use std::io::Write;

const HEADER: [&str; 6] = [
    "file_name",
    "attribute",
    "risk_level",
    "distribution",
    "recommendation",
    "overall_risk",
];

/// One CSV row per finding.
pub struct CsvWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_scans(&mut self, scans: &[ScanRecord], _summary: &ScanSummary) -> anyhow::Result<()> {
        self.writer.write_record(HEADER)?;
        for scan in scans {
            for finding in &scan.bias_metrics.findings {
                self.writer.write_record([
                    scan.file_name.as_str(),
                    finding.attribute_type.display_name(),
                    finding.risk_level.as_str(),
                    describe_distribution(&finding.distribution).as_str(),
                    finding.recommendation.as_str(),
                    scan.overall_risk.as_str(),
                ])?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::io::loader::read_dataset;

    #[test]
    fn test_rows_per_finding() {
        let dataset =
            read_dataset("sex,age,race\nm,25,A\nm,26,A\nf,25,B\n".as_bytes(), ',').unwrap();
        let scans = vec![ScanRecord::new("d.csv", 10, analyze(&dataset).unwrap())];

        let mut buffer = Vec::new();
        CsvWriter::new(&mut buffer)
            .write_scans(&scans, &ScanSummary::default())
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "file_name,attribute,risk_level,distribution,recommendation,overall_risk"
        );
        assert!(lines[1].starts_with("d.csv,Gender,Medium,"));
        assert!(lines[2].starts_with("d.csv,Age,High,"));
        assert!(lines[3].starts_with("d.csv,Race/Ethnicity,Medium,"));
    }
}
