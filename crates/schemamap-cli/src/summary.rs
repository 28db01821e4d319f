use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use schemamap_model::Confidence;

use crate::types::{MapResult, ScoreOutcome};

pub fn print_summary(result: &MapResult) {
    let report = &result.report;
    println!(
        "Columns: {} source, {} target  Threshold: {:.2}",
        report.source_columns().len(),
        report.target_columns().len(),
        result.settings.threshold
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Target"),
        header_cell("Score"),
        header_cell("Confidence"),
        header_cell("Method"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);

    for decision in report.decisions() {
        let target_cell = match decision.target_column.as_deref() {
            Some(target) => Cell::new(target),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(&decision.source_column),
            target_cell,
            Cell::new(format!("{:.2}", decision.display_score())),
            confidence_cell(decision.confidence),
            Cell::new(decision.method_label()),
        ]);
    }
    println!("{table}");
    println!(
        "Mapped {} of {} source columns",
        report.mapped_count(),
        report.decisions().len()
    );
    for path in &result.written {
        println!("Wrote {}", path.display());
    }
}

pub fn print_score_breakdown(outcome: &ScoreOutcome) {
    println!("'{}' vs '{}'", outcome.source, outcome.target);

    let mut table = Table::new();
    table.set_header(vec![header_cell("Signal"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    let signals = &outcome.detail.signals;
    for (name, value) in [
        ("token_overlap", signals.token_overlap),
        ("token_subscore", signals.token_subscore),
        ("seq_ratio", signals.seq_ratio),
        ("ngram_jaccard", signals.ngram_jaccard),
        ("substr_flag", signals.substr_flag),
        ("numeric_suffix_bonus", signals.numeric_suffix_bonus),
    ] {
        table.add_row(vec![Cell::new(name), Cell::new(format!("{value:.4}"))]);
    }
    table.add_row(vec![
        Cell::new("score").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.4}", outcome.detail.score)).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    let method = outcome.detail.method_label();
    if method.is_empty() {
        println!("Method: none (empty name)");
    } else {
        println!("Method: {method}");
    }
    println!(
        "Confidence: {}",
        Confidence::from_score(outcome.detail.score).label()
    );
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn confidence_cell(confidence: Confidence) -> Cell {
    match confidence {
        Confidence::High => Cell::new(confidence.label())
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Confidence::Probable => Cell::new(confidence.label()).fg(Color::Yellow),
        Confidence::Low => Cell::new(confidence.label()).fg(Color::Cyan),
        Confidence::NoMatch => dim_cell(confidence.label()),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
