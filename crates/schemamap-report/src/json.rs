//! Full-fidelity JSON report: decisions plus ranked per-source diagnostics.

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use schemamap_model::{AssignMode, MappingDecision, MatchReport, ScoreDetail};

use crate::error::Result;

/// Parameters of the assignment run, echoed into the report header.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RunSettings {
    pub threshold: f64,
    pub mode: AssignMode,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    tool: &'static str,
    version: &'static str,
    generated_at: String,
    threshold: f64,
    mode: AssignMode,
    decisions: &'a [MappingDecision],
    diagnostics: Vec<SourceDiagnostics<'a>>,
}

#[derive(Serialize)]
struct SourceDiagnostics<'a> {
    source_column: &'a str,
    candidates: Vec<CandidateEntry<'a>>,
}

#[derive(Serialize)]
struct CandidateEntry<'a> {
    target_column: &'a str,
    #[serde(flatten)]
    detail: &'a ScoreDetail,
}

/// Write the complete report as pretty-printed JSON.
///
/// Scores keep their 4-decimal precision here; the CSV rendering rounds to
/// 2 decimals for display.
pub fn write_json<W: Write>(writer: W, report: &MatchReport, settings: RunSettings) -> Result<()> {
    let diagnostics = report
        .source_columns()
        .iter()
        .enumerate()
        .map(|(index, source)| SourceDiagnostics {
            source_column: source,
            candidates: report
                .ranked_candidates(index)
                .into_iter()
                .map(|(target, detail)| CandidateEntry {
                    target_column: target,
                    detail,
                })
                .collect(),
        })
        .collect();

    let document = JsonReport {
        tool: "schemamap",
        version: env!("CARGO_PKG_VERSION"),
        generated_at: Utc::now().to_rfc3339(),
        threshold: settings.threshold,
        mode: settings.mode,
        decisions: report.decisions(),
        diagnostics,
    };
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(())
}
