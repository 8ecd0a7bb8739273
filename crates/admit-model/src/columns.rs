//! Expected flat source columns.

use std::collections::BTreeSet;

/// The fifteen columns an admissions CSV export is expected to carry,
/// spelled exactly as they appear in the file header.
pub const EXPECTED_COLUMNS: [&str; 15] = [
    "Name",
    "Age",
    "Gender",
    "Blood Type",
    "Date of Admission",
    "Admission Type",
    "Room Number",
    "Billing Amount",
    "Discharge Date",
    "Medical Condition",
    "Medication",
    "Test Results",
    "Doctor",
    "Hospital",
    "Insurance Provider",
];

/// The expected columns as an owned set, for membership checks.
pub fn expected_column_set() -> BTreeSet<&'static str> {
    EXPECTED_COLUMNS.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_columns_are_distinct() {
        assert_eq!(expected_column_set().len(), EXPECTED_COLUMNS.len());
    }
}
