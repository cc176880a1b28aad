//! In-memory tabular dataset handed to the analysis engine

use crate::errors::{BiasError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One data row: column name to raw cell text.
pub type Row = IndexMap<String, String>;

/// Ordered rows sharing a header.
///
/// The engine only ever reads a dataset. Cells absent from a row are looked
/// up as empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Build a dataset whose header is the key set of the first row.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let columns = rows
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Non-empty cells of `column`, in row order. Missing and empty cells
    /// are skipped.
    pub fn values<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.rows
            .iter()
            .filter_map(move |row| row.get(column).map(String::as_str))
            .filter(|value| !value.is_empty())
    }

    /// Reject data rows that arrive without a usable header.
    pub fn check_header(&self) -> Result<()> {
        if self.rows.is_empty() {
            return Ok(());
        }
        if self.columns.iter().all(|name| name.trim().is_empty()) {
            return Err(BiasError::malformed(format!(
                "{} data rows but the header is empty",
                self.rows.len()
            )));
        }
        Ok(())
    }
}

impl From<Vec<Row>> for Dataset {
    fn from(rows: Vec<Row>) -> Self {
        Self::from_rows(rows)
    }
}

/// Kind of uploaded input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Tabular,
    Image,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tabular => write!(f, "tabular"),
            Self::Image => write!(f, "image"),
        }
    }
}

/// Anything a caller may hand to the engine.
#[derive(Debug, Clone)]
pub enum AnalysisInput {
    Tabular(Dataset),
    /// Raw image upload; only the name is kept since it is never decoded.
    Image { file_name: String },
}

impl AnalysisInput {
    pub fn kind(&self) -> InputKind {
        match self {
            Self::Tabular(_) => InputKind::Tabular,
            Self::Image { .. } => InputKind::Image,
        }
    }
}
