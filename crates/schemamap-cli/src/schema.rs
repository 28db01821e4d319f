//! Schema file loading.
//!
//! A schema file is either a plain text list (one column name per line,
//! blank lines and `#` comments ignored) or a `.csv` file whose first row
//! is taken as the column names.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read an ordered column-name list from a schema file.
pub fn read_columns(path: &Path) -> Result<Vec<String>> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        read_csv_header(path)
    } else {
        read_lines(path)
    }
}

fn read_csv_header(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("open {}", path.display()))?;
    let mut record = csv::StringRecord::new();
    let has_row = reader
        .read_record(&mut record)
        .with_context(|| format!("read header row of {}", path.display()))?;
    if !has_row {
        return Ok(Vec::new());
    }
    Ok(record.iter().map(|field| field.trim().to_string()).collect())
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}
