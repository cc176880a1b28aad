use crate::io::output::OutputWriter;
use crate::report::{ScanRecord, ScanSummary};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct JsonDocument<'a> {
    scans: &'a [ScanRecord],
    summary: &'a ScanSummary,
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_scans(&mut self, scans: &[ScanRecord], summary: &ScanSummary) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&JsonDocument { scans, summary })?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}
