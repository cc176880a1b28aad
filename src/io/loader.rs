//! Decoding uploaded files into datasets.
//!
//! This is caller-side plumbing around the engine: size limits, input kind
//! detection and CSV decoding all happen here, before a [`Dataset`] exists.

use crate::config::InputConfig;
use crate::core::{Dataset, InputKind, Row};
use crate::errors::{BiasError, Result};
use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::Path;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Classify a file by extension. Anything that is not a known image format
/// is treated as delimited text.
pub fn detect_input_kind(path: &Path) -> InputKind {
    let is_image = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false);

    if is_image {
        InputKind::Image
    } else {
        InputKind::Tabular
    }
}

/// A decoded dataset together with the size of the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    pub file_size: u64,
}

/// Reject files above the configured size limit.
pub fn check_file_size(path: &Path, size: u64, limit: u64) -> Result<()> {
    if size > limit {
        return Err(BiasError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            limit,
        });
    }
    Ok(())
}

/// Load a tabular file from disk.
///
/// The size is read once from the open handle, so the limit applies to
/// the same file that gets decoded.
pub fn load_dataset(path: &Path, config: &InputConfig) -> Result<LoadedDataset> {
    let kind = detect_input_kind(path);
    if kind != InputKind::Tabular {
        return Err(BiasError::UnsupportedInputKind { kind });
    }

    let file = fs::File::open(path).map_err(|e| BiasError::io(path, e))?;
    let file_size = file.metadata().map_err(|e| BiasError::io(path, e))?.len();
    check_file_size(path, file_size, config.max_file_size_bytes)?;

    let dataset = read_dataset(file, config.delimiter)?;
    log::debug!(
        "Loaded {} rows with {} columns from {}",
        dataset.len(),
        dataset.columns().len(),
        path.display()
    );
    Ok(LoadedDataset { dataset, file_size })
}

/// Decode CSV with a header row.
///
/// Short records leave their trailing columns absent, which the engine
/// treats as empty cells. Completely blank lines are skipped.
pub fn read_dataset<R: Read>(reader: R, delimiter: char) -> Result<Dataset> {
    let delimiter = u8::try_from(delimiter)
        .map_err(|_| BiasError::config(format!("delimiter {delimiter:?} is not a single byte")))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let columns = unique_headers(
        reader
            .headers()?
            .iter()
            .map(|name| name.trim_start_matches('\u{feff}').to_string()),
    );

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Row = columns
            .iter()
            .zip(record.iter())
            .map(|(column, value)| (column.clone(), value.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(Dataset::new(columns, rows))
}

/// Suffix repeated header names (`gender`, `gender_1`, ...) so every
/// column keeps its own cells. The first occurrence keeps its name.
fn unique_headers(names: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut columns = Vec::new();
    for name in names {
        let mut candidate = name.clone();
        let mut suffix = 1;
        while !seen.insert(candidate.clone()) {
            candidate = format!("{name}_{suffix}");
            suffix += 1;
        }
        columns.push(candidate);
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_detect_input_kind() {
        assert_eq!(detect_input_kind(Path::new("faces.PNG")), InputKind::Image);
        assert_eq!(detect_input_kind(Path::new("a/b.jpeg")), InputKind::Image);
        assert_eq!(detect_input_kind(Path::new("people.csv")), InputKind::Tabular);
        assert_eq!(detect_input_kind(Path::new("noext")), InputKind::Tabular);
    }

    #[test]
    fn test_read_dataset() {
        let csv = indoc! {"
            id,Gender,Age
            1,Male,34
            2,female,
            3,,29
        "};
        let dataset = read_dataset(csv.as_bytes(), ',').unwrap();
        assert_eq!(dataset.columns(), &["id", "Gender", "Age"]);
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.rows()[1].get("Age").map(String::as_str), Some(""));
        let genders: Vec<_> = dataset.values("Gender").collect();
        assert_eq!(genders, vec!["Male", "female"]);
    }

    #[test]
    fn test_short_records_leave_columns_absent() {
        let csv = "id,gender,age\n1,male\n";
        let dataset = read_dataset(csv.as_bytes(), ',').unwrap();
        assert!(dataset.rows()[0].get("age").is_none());
    }

    #[test]
    fn test_semicolon_delimiter() {
        let csv = "gender;race\nmale;Asian\n";
        let dataset = read_dataset(csv.as_bytes(), ';').unwrap();
        assert_eq!(dataset.columns(), &["gender", "race"]);
    }

    #[test]
    fn test_duplicate_headers_keep_their_own_cells() {
        let csv = "gender,gender,gender_1\nmale,female,x\nmale,female,y\n";
        let dataset = read_dataset(csv.as_bytes(), ',').unwrap();
        assert_eq!(dataset.columns(), &["gender", "gender_1", "gender_1_1"]);

        let first: Vec<_> = dataset.values("gender").collect();
        assert_eq!(first, vec!["male", "male"]);
        let second: Vec<_> = dataset.values("gender_1").collect();
        assert_eq!(second, vec!["female", "female"]);
    }

    #[test]
    fn test_duplicate_gender_header_uses_first_column() {
        let csv = "gender,gender\nmale,female\nmale,female\n";
        let dataset = read_dataset(csv.as_bytes(), ',').unwrap();
        let report = crate::analysis::analyze(&dataset).unwrap();

        let finding = report.finding(crate::core::AttributeType::Gender).unwrap();
        let crate::core::Distribution::Categorical(shares) = &finding.distribution else {
            panic!("gender should be categorical");
        };
        assert_eq!(shares.get("male"), Some(&100.0));
        assert_eq!(shares.len(), 1);
    }

    #[test]
    fn test_header_only_file() {
        let dataset = read_dataset("gender,age\n".as_bytes(), ',').unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.columns().len(), 2);
    }

    #[test]
    fn test_multibyte_delimiter_rejected() {
        let err = read_dataset("a\n".as_bytes(), '§').unwrap_err();
        assert!(matches!(err, BiasError::Config { .. }));
    }

    #[test]
    fn test_load_dataset_enforces_size_limit() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("big.csv");
        fs::write(&path, "gender\nmale\nfemale\n").unwrap();

        let config = InputConfig {
            max_file_size_bytes: 4,
            ..InputConfig::default()
        };
        let err = load_dataset(&path, &config).unwrap_err();
        assert!(matches!(
            err,
            BiasError::FileTooLarge {
                size: 19,
                limit: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_load_dataset_reports_file_size() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("people.csv");
        fs::write(&path, "gender\nmale\nfemale\n").unwrap();

        let loaded = load_dataset(&path, &InputConfig::default()).unwrap();
        assert_eq!(loaded.file_size, 19);
        assert_eq!(loaded.dataset.len(), 2);
    }

    #[test]
    fn test_check_file_size_boundary() {
        let path = Path::new("x.csv");
        assert!(check_file_size(path, 100, 100).is_ok());
        assert!(check_file_size(path, 101, 100).is_err());
    }

    #[test]
    fn test_load_dataset_rejects_images() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("face.png");
        fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let err = load_dataset(&path, &InputConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            BiasError::UnsupportedInputKind {
                kind: InputKind::Image
            }
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_dataset(&PathBuf::from("/nonexistent/x.csv"), &InputConfig::default())
            .unwrap_err();
        assert!(matches!(err, BiasError::Io { .. }));
    }
}
