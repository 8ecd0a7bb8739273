use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use admit_load::LoadReport;
use admit_validate::IntegrityReport;

pub fn print_integrity_summary(report: &IntegrityReport) {
    println!(
        "Source: {} rows x {} columns",
        report.row_count, report.column_count
    );
    if report.is_clean() {
        println!("No integrity findings.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Check"),
        header_cell("Finding"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);

    for column in &report.missing_columns {
        table.add_row(vec![
            check_cell("missing column"),
            Cell::new(column),
            dim_cell("-"),
        ]);
    }
    for column in &report.unexpected_columns {
        table.add_row(vec![
            check_cell("unexpected column"),
            Cell::new(column),
            dim_cell("-"),
        ]);
    }
    for issue in &report.type_issues {
        let detail = if issue.samples.is_empty() {
            format!("{}: expected {}", issue.column, issue.expected)
        } else {
            format!(
                "{}: expected {}, e.g. {}",
                issue.column,
                issue.expected,
                issue.samples.join(", ")
            )
        };
        table.add_row(vec![
            check_cell("type mismatch"),
            Cell::new(detail),
            count_cell(issue.non_conforming as usize),
        ]);
    }
    for (column, count) in &report.missing_values {
        table.add_row(vec![
            check_cell("missing values"),
            Cell::new(column),
            count_cell(*count),
        ]);
    }
    match &report.duplicates {
        Some(census) if census.dup_total > 0 => {
            let detail = format!(
                "{} rows share a key; {} would be ignored; {} unique keys",
                census.dup_total, census.dup_ignored, census.unique_keys
            );
            table.add_row(vec![
                check_cell("duplicate keys"),
                Cell::new(detail),
                count_cell(census.dup_ignored),
            ]);
        }
        Some(_) => {}
        None => {
            table.add_row(vec![
                check_cell("duplicate keys"),
                Cell::new("census skipped: key columns incomplete"),
                dim_cell("-"),
            ]);
        }
    }
    println!("{table}");
}

pub fn print_load_summary(report: &LoadReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Inserted"),
        header_cell("Duplicates"),
        header_cell("Rejected"),
        header_cell("Stored"),
    ]);
    apply_table_style(&mut table);
    for index in 0..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(report.row_count),
        Cell::new(report.inserted)
            .fg(comfy_table::Color::Green)
            .add_attribute(Attribute::Bold),
        count_cell(report.duplicates),
        count_cell(report.rejected),
        Cell::new(report.stored_total).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(comfy_table::Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn check_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(comfy_table::Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn count_cell(value: usize) -> Cell {
    if value > 0 {
        Cell::new(value).fg(comfy_table::Color::Yellow)
    } else {
        dim_cell(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(comfy_table::Color::DarkGrey)
}
