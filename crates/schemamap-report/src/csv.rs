//! CSV renderings of a match report: the mapping table and the side-by-side
//! schema comparison.

use std::io::Write;

use schemamap_model::MatchReport;

use crate::error::Result;

/// Write the mapping table: one row per source column.
///
/// Unmapped rows leave the target column empty. Scores are displayed with
/// 2 decimal places; the full precision lives in the JSON report.
pub fn write_mapping_csv<W: Write>(writer: W, report: &MatchReport) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "source_column",
        "target_column",
        "score",
        "confidence",
        "method",
    ])?;
    for decision in report.decisions() {
        let score = format!("{:.2}", decision.display_score());
        let method = decision.method_label();
        csv_writer.write_record([
            decision.source_column.as_str(),
            decision.target_column.as_deref().unwrap_or(""),
            score.as_str(),
            decision.confidence.label(),
            method.as_str(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write both schemas side by side in their original order, padded to the
/// longer list.
pub fn write_comparison_csv<W: Write>(writer: W, report: &MatchReport) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["source_column", "target_column"])?;
    let rows = report.source_columns().len().max(report.target_columns().len());
    for index in 0..rows {
        let source = report
            .source_columns()
            .get(index)
            .map_or("", String::as_str);
        let target = report
            .target_columns()
            .get(index)
            .map_or("", String::as_str);
        csv_writer.write_record([source, target])?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use schemamap_match::{DEFAULT_THRESHOLD, MatchEngine};
    use schemamap_model::AssignMode;

    use super::*;

    fn sample_report() -> MatchReport {
        let engine = MatchEngine::new();
        let sources = vec!["customer_id".to_string(), "xyz".to_string()];
        let targets = vec!["customer_id".to_string()];
        engine.assign(&sources, &targets, DEFAULT_THRESHOLD, AssignMode::OneToOne)
    }

    #[test]
    fn mapping_csv_has_one_row_per_source() {
        let mut buffer = Vec::new();
        write_mapping_csv(&mut buffer, &sample_report()).expect("write mapping csv");
        let text = String::from_utf8(buffer).expect("utf8 csv");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "source_column,target_column,score,confidence,method"
        );
        assert_eq!(
            lines[1],
            "customer_id,customer_id,1.00,High-confidence match,Exact"
        );
        assert_eq!(lines[2], "xyz,,0.00,no match,");
    }

    #[test]
    fn comparison_csv_pads_the_shorter_schema() {
        let mut buffer = Vec::new();
        write_comparison_csv(&mut buffer, &sample_report()).expect("write comparison csv");
        let text = String::from_utf8(buffer).expect("utf8 csv");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "customer_id,customer_id");
        assert_eq!(lines[2], "xyz,");
    }
}
