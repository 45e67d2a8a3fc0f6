use std::collections::BTreeSet;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::ImportResult;

pub fn print_summary(result: &ImportResult) {
    if let Some(path) = &result.out_path {
        println!("Assignments: {}", path.display());
    } else {
        println!("Dry run: no assignment file written");
    }
    println!("{}", counts_table(result));
    if !result.report.unmatched_mentors.is_empty() {
        println!();
        println!("Unmatched mentors:");
        println!(
            "{}",
            unmatched_table("Mentor name", &result.report.unmatched_mentors)
        );
    }
    if !result.report.unmatched_mentees.is_empty() {
        println!();
        println!("Unmatched mentees:");
        println!(
            "{}",
            unmatched_table("Registration id", &result.report.unmatched_mentees)
        );
    }
}

fn counts_table(result: &ImportResult) -> Table {
    let report = &result.report;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Outcome"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Matched").fg(Color::Green),
        Cell::new(report.matched),
    ]);
    table.add_row(vec![
        Cell::new("Mentor not found"),
        count_cell(report.mentor_not_found, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Mentee not found"),
        count_cell(report.mentee_not_found, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Skipped (incomplete row)"),
        count_cell(report.skipped, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Assignments written")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.assignments.len()).add_attribute(Attribute::Bold),
    ]);
    table
}

fn unmatched_table(label: &str, values: &BTreeSet<String>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(label)]);
    apply_table_style(&mut table);
    for value in values {
        table.add_row(vec![Cell::new(value)]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
