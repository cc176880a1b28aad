pub mod loader;
pub mod output;
pub mod writers;

pub use loader::{detect_input_kind, load_dataset, read_dataset, LoadedDataset};
pub use output::{create_writer, OutputFormat, OutputWriter};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
