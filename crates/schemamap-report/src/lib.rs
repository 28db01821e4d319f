//! Export layer for match reports.
//!
//! Pure serialization over a finished [`MatchReport`]: nothing here
//! recomputes scores or touches the matching engine.

pub mod csv;
pub mod error;
pub mod json;

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use schemamap_model::MatchReport;

pub use crate::error::{ReportError, Result};
pub use crate::json::RunSettings;

/// Which report files to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Json,
    Both,
}

impl ReportFormat {
    fn wants_csv(self) -> bool {
        matches!(self, Self::Csv | Self::Both)
    }

    fn wants_json(self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }
}

/// Write the selected report files into `output_dir`, creating it if needed.
///
/// Returns the paths written: `mapping.csv` and `comparison.csv` for CSV,
/// `report.json` for JSON.
pub fn write_report_files(
    output_dir: &Path,
    report: &MatchReport,
    settings: RunSettings,
    format: ReportFormat,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;
    let mut written = Vec::new();

    if format.wants_csv() {
        let mapping_path = output_dir.join("mapping.csv");
        csv::write_mapping_csv(File::create(&mapping_path)?, report)?;
        written.push(mapping_path);

        let comparison_path = output_dir.join("comparison.csv");
        csv::write_comparison_csv(File::create(&comparison_path)?, report)?;
        written.push(comparison_path);
    }

    if format.wants_json() {
        let json_path = output_dir.join("report.json");
        json::write_json(File::create(&json_path)?, report, settings)?;
        written.push(json_path);
    }

    Ok(written)
}
