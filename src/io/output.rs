use crate::core::Distribution;
use crate::formatting::FormattingConfig;
use crate::io::writers::{CsvWriter, JsonWriter, MarkdownWriter, TerminalWriter};
use crate::report::{ScanRecord, ScanSummary};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
    Csv,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            "terminal" | "text" => Some(Self::Terminal),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

pub trait OutputWriter {
    /// Render every scan followed by the summary across them.
    fn write_scans(&mut self, scans: &[ScanRecord], summary: &ScanSummary) -> anyhow::Result<()>;
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
        OutputFormat::Csv => Box::new(CsvWriter::new(writer)),
    }
}

/// One-line description of a distribution for tables and CSV cells.
pub fn describe_distribution(distribution: &Distribution) -> String {
    match distribution {
        Distribution::Categorical(categories) => categories
            .iter()
            .map(|(label, share)| format!("{label}: {share:.1}%"))
            .collect::<Vec<_>>()
            .join(", "),
        Distribution::Numeric(summary) => format!(
            "avg {:.1}, min {}, max {}, range {}",
            summary.average, summary.min, summary.max, summary.range
        ),
    }
}
