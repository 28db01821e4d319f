use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use schemamap_cli::schema::read_columns;
use schemamap_match::MatchEngine;
use schemamap_model::AssignMode;
use schemamap_report::{ReportFormat, RunSettings, write_report_files};

use crate::cli::{MapArgs, ModeArg, ReportFormatArg, ScoreArgs};
use crate::types::{MapResult, ScoreOutcome};

pub fn run_map(args: &MapArgs) -> Result<MapResult> {
    let span = info_span!(
        "map",
        source = %args.source_schema.display(),
        target = %args.target_schema.display()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let sources = read_columns(&args.source_schema)
        .with_context(|| format!("read source schema {}", args.source_schema.display()))?;
    let targets = read_columns(&args.target_schema)
        .with_context(|| format!("read target schema {}", args.target_schema.display()))?;
    info!(
        source_columns = sources.len(),
        target_columns = targets.len(),
        "schemas loaded"
    );

    let mode = assign_mode(args.mode);
    let engine = MatchEngine::new();
    let report = engine.assign(&sources, &targets, args.threshold, mode);
    info!(
        mapped = report.mapped_count(),
        unmapped = report.unmapped_count(),
        duration_ms = start.elapsed().as_millis(),
        "matching complete"
    );

    let settings = RunSettings {
        threshold: args.threshold,
        mode,
    };
    let mut written = Vec::new();
    if let Some(output_dir) = &args.output_dir {
        if args.dry_run {
            info!(output_dir = %output_dir.display(), "dry run, skipping report files");
        } else {
            written =
                write_report_files(output_dir, &report, settings, report_format(args.format))
                    .with_context(|| format!("write reports to {}", output_dir.display()))?;
        }
    }

    Ok(MapResult {
        report,
        settings,
        written,
    })
}

pub fn run_score(args: &ScoreArgs) -> ScoreOutcome {
    let engine = MatchEngine::new();
    let detail = engine.score(&args.source, &args.target);
    ScoreOutcome {
        source: args.source.clone(),
        target: args.target.clone(),
        detail,
    }
}

fn assign_mode(mode: ModeArg) -> AssignMode {
    match mode {
        ModeArg::OneToOne => AssignMode::OneToOne,
        ModeArg::ManyToOne => AssignMode::ManyToOne,
    }
}

fn report_format(format: ReportFormatArg) -> ReportFormat {
    match format {
        ReportFormatArg::Csv => ReportFormat::Csv,
        ReportFormatArg::Json => ReportFormat::Json,
        ReportFormatArg::Both => ReportFormat::Both,
    }
}
