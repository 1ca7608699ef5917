//! Terminal tables for command output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use istat_model::MatchSuggestion;
use istat_report::ColumnStats;

use crate::commands::{MergeOutcome, ResolveOutcome};

pub fn print_merge(outcome: &MergeOutcome) {
    println!("Merged {} rows into {}", outcome.rows, outcome.out.display());
}

pub fn print_suggestions(suggestions: &[MatchSuggestion]) {
    if suggestions.is_empty() {
        println!("Every source name has a verbatim match.");
        return;
    }
    let mut table = new_table(vec!["Source name", "Best candidate", "Score (0-100)"]);
    align_column(&mut table, 2, CellAlignment::Right);
    for suggestion in suggestions {
        table.add_row(vec![
            Cell::new(&suggestion.source),
            Cell::new(&suggestion.candidate),
            score_cell(suggestion.score),
        ]);
    }
    println!("{table}");
}

pub fn print_resolution(outcome: &ResolveOutcome) {
    let mut table = new_table(vec!["Status", "Rows"]);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("valid").fg(Color::Green),
        Cell::new(outcome.valid),
    ]);
    table.add_row(vec![
        Cell::new("changed").fg(Color::Yellow),
        Cell::new(outcome.changed),
    ]);
    table.add_row(vec![
        Cell::new("suppressed").fg(Color::Red),
        Cell::new(outcome.suppressed),
    ]);
    println!("{table}");
    println!(
        "Annotated {} rows written to {}",
        outcome.rows,
        outcome.out.display()
    );
}

pub fn print_variability(stats: &[ColumnStats]) {
    let mut table = new_table(vec![
        "Column", "Count", "Mean", "Median", "Range", "Std", "CV",
    ]);
    for index in 1..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for s in stats {
        table.add_row(vec![
            Cell::new(&s.column),
            Cell::new(s.count),
            stat_cell(s.mean),
            stat_cell(s.median),
            stat_cell(s.range),
            stat_cell(s.std_dev),
            stat_cell(s.coeff_var),
        ]);
    }
    println!("{table}");
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn new_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(headers.into_iter().map(header_cell).collect::<Vec<_>>());
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn score_cell(score: f64) -> Cell {
    let cell = Cell::new(format!("{score:.1}"));
    if score >= 90.0 {
        cell.fg(Color::Green)
    } else if score >= 70.0 {
        cell.fg(Color::Yellow)
    } else {
        cell.fg(Color::Red)
    }
}

fn stat_cell(value: Option<f64>) -> Cell {
    match value {
        Some(v) => Cell::new(format!("{v:.3}")),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}
