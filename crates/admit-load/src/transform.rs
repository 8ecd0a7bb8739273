//! Row-to-document transformation.
//!
//! Column access is decoupled from the source header formatting by
//! normalizing names (trim, lowercase, underscores). Dates and numerics are
//! coerced leniently; anything unparseable or empty becomes an explicit
//! JSON null. Whether a null is acceptable is decided later by the store's
//! shape validator, never here.

use std::collections::BTreeMap;

use serde_json::{Value, json};

use admit_ingest::{CsvTable, normalize_column_name, parse_date, parse_f64, parse_i64};

/// A table with normalized column names, ready for field access.
struct NormalizedTable<'a> {
    table: &'a CsvTable,
    columns: BTreeMap<String, usize>,
}

impl<'a> NormalizedTable<'a> {
    fn new(table: &'a CsvTable) -> Self {
        let columns = table
            .headers
            .iter()
            .enumerate()
            .map(|(idx, header)| (normalize_column_name(header), idx))
            .collect();
        Self { table, columns }
    }

    fn cell(&self, row: usize, column: &str) -> &str {
        let Some(idx) = self.columns.get(column) else {
            return "";
        };
        self.table
            .rows
            .get(row)
            .and_then(|cells| cells.get(*idx))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Transform every source row into a target document, preserving row order.
pub fn transform_rows(table: &CsvTable) -> Vec<Value> {
    let normalized = NormalizedTable::new(table);
    (0..table.rows.len())
        .map(|row| transform_row(&normalized, row))
        .collect()
}

fn transform_row(table: &NormalizedTable<'_>, row: usize) -> Value {
    let mut document = json!({
        "patient": {
            "name": text_value(table.cell(row, "name")),
            "age": int_value(table.cell(row, "age")),
            "gender": text_value(table.cell(row, "gender")),
            "blood_type": text_value(table.cell(row, "blood_type")),
            "insurance_provider": text_value(table.cell(row, "insurance_provider")),
        },
        "admission": {
            "date": date_value(table.cell(row, "date_of_admission")),
            "type": text_value(table.cell(row, "admission_type")),
            "room_number": int_value(table.cell(row, "room_number")),
            "billing_amount": double_value(table.cell(row, "billing_amount")),
            "discharge_date": date_value(table.cell(row, "discharge_date")),
            "doctor": text_value(table.cell(row, "doctor")),
            "hospital": text_value(table.cell(row, "hospital")),
        },
        "medical": {
            "condition": text_value(table.cell(row, "medical_condition")),
            "medication": text_value(table.cell(row, "medication")),
            "test_results": text_value(table.cell(row, "test_results")),
        },
    });
    // Optional text fields are omitted when blank; a present null would be
    // rejected since they are not nullable.
    if let Some(admission) = document["admission"].as_object_mut() {
        for field in ["doctor", "hospital"] {
            if admission.get(field).is_some_and(Value::is_null) {
                admission.remove(field);
            }
        }
    }
    document
}

fn text_value(cell: &str) -> Value {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        Value::Null
    } else {
        Value::from(trimmed)
    }
}

// Coercion results are matched on presence, not truthiness: 0 and 0.0 are
// legitimate values and must survive as literals.
fn int_value(cell: &str) -> Value {
    match parse_i64(cell) {
        Some(value) => Value::from(value),
        None => Value::Null,
    }
}

fn double_value(cell: &str) -> Value {
    match parse_f64(cell) {
        Some(value) => Value::from(value),
        None => Value::Null,
    }
}

fn date_value(cell: &str) -> Value {
    match parse_date(cell) {
        Some(date) => Value::from(date.format("%Y-%m-%d").to_string()),
        None => Value::Null,
    }
}
