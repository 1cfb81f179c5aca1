//! Sheet file storage
//!
//! One file per named sheet. Line 1 holds the header row as a JSON array
//! of strings; each subsequent line holds one appended row, also a JSON
//! array. Rows must match the header's column count exactly.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

/// Errors from sheet storage
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("sheet io: {0}")]
    Io(#[from] std::io::Error),

    #[error("sheet encode: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("sheet not found: {0}")]
    NotFound(String),

    #[error("sheet {0} has no header row")]
    MissingHeader(String),

    #[error("row has {got} columns, header has {want}")]
    ColumnMismatch { got: usize, want: usize },
}

/// The sheet store: a directory of header-rowed sheet files
pub struct SheetStore {
    /// Base path for storage
    base_path: PathBuf,
}

impl SheetStore {
    /// Open or create a sheet store at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SheetError> {
        let base_path = path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path)?;
        debug!(?base_path, "Opened sheet store");
        Ok(Self { base_path })
    }

    fn sheet_path(&self, name: &str) -> PathBuf {
        self.base_path.join(format!("{name}.jsonl"))
    }

    /// Create the sheet with a header row if it does not exist yet
    ///
    /// An existing sheet is left untouched; its header row stays
    /// authoritative even when `headers` has since grown.
    pub fn ensure_sheet(&self, name: &str, headers: &[String]) -> Result<(), SheetError> {
        let path = self.sheet_path(name);
        if path.exists() {
            return Ok(());
        }
        let line = serde_json::to_string(headers)?;
        fs::write(&path, format!("{line}\n"))?;
        info!(sheet = name, columns = headers.len(), "Created sheet with header row");
        Ok(())
    }

    /// Read the authoritative header row of a sheet
    pub fn headers(&self, name: &str) -> Result<Vec<String>, SheetError> {
        let content = self.read_sheet(name)?;
        let first = content
            .lines()
            .next()
            .ok_or_else(|| SheetError::MissingHeader(name.to_string()))?;
        Ok(serde_json::from_str(first)?)
    }

    /// Append one row; its column count must match the header row
    pub fn append(&self, name: &str, row: &[String]) -> Result<(), SheetError> {
        let headers = self.headers(name)?;
        if row.len() != headers.len() {
            return Err(SheetError::ColumnMismatch {
                got: row.len(),
                want: headers.len(),
            });
        }
        let line = serde_json::to_string(row)?;
        let mut file = fs::OpenOptions::new().append(true).open(self.sheet_path(name))?;
        writeln!(file, "{line}")?;
        debug!(sheet = name, "Appended row");
        Ok(())
    }

    /// All rows of a sheet, header excluded
    pub fn rows(&self, name: &str) -> Result<Vec<Vec<String>>, SheetError> {
        let content = self.read_sheet(name)?;
        content
            .lines()
            .skip(1)
            .map(|line| serde_json::from_str(line).map_err(SheetError::from))
            .collect()
    }

    /// The last `n` rows of a sheet
    pub fn tail(&self, name: &str, n: usize) -> Result<Vec<Vec<String>>, SheetError> {
        let mut rows = self.rows(name)?;
        let keep = rows.len().saturating_sub(n);
        Ok(rows.split_off(keep))
    }

    /// Number of appended rows (header excluded)
    pub fn row_count(&self, name: &str) -> Result<usize, SheetError> {
        Ok(self.rows(name)?.len())
    }

    fn read_sheet(&self, name: &str) -> Result<String, SheetError> {
        let path = self.sheet_path(name);
        if !path.exists() {
            return Err(SheetError::NotFound(name.to_string()));
        }
        Ok(fs::read_to_string(path)?)
    }
}
