//! The composite natural key identifying a logically distinct admission.
//!
//! The same five fields are used in three places: the validator's duplicate
//! census over raw CSV cells, the store's compound unique index over document
//! dot-paths, and the loader's transformation. The two field spellings below
//! must stay in sync with `columns::EXPECTED_COLUMNS` and the target schema.

use std::fmt;

/// Flat source columns forming the natural key, in index order.
pub const NATURAL_KEY_COLUMNS: [&str; 5] =
    ["Name", "Age", "Gender", "Blood Type", "Date of Admission"];

/// Document dot-paths forming the natural key, in index order.
pub const NATURAL_KEY_FIELDS: [&str; 5] = [
    "patient.name",
    "patient.age",
    "patient.gender",
    "patient.blood_type",
    "admission.date",
];

/// Name of the compound unique index enforcing the key in the store.
pub const UNIQUE_INDEX_NAME: &str = "unique_patient";

/// A natural key built from raw (trimmed) cell values.
///
/// Values are compared textually, matching the store's behavior of indexing
/// whatever representation the document carries.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NaturalKey {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub blood_type: String,
    pub admission_date: String,
}

impl NaturalKey {
    /// Build a key from raw cell values, trimming surrounding whitespace.
    pub fn new(
        name: &str,
        age: &str,
        gender: &str,
        blood_type: &str,
        admission_date: &str,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            age: age.trim().to_string(),
            gender: gender.trim().to_string(),
            blood_type: blood_type.trim().to_string(),
            admission_date: admission_date.trim().to_string(),
        }
    }
}

impl fmt::Display for NaturalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}|{}",
            self.name, self.age, self.gender, self.blood_type, self.admission_date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_trims_cells() {
        let a = NaturalKey::new(" Jane Doe ", "30", "Female", "O+", "2023-01-01");
        let b = NaturalKey::new("Jane Doe", " 30", "Female", "O+", " 2023-01-01 ");
        assert_eq!(a, b);
    }

    #[test]
    fn test_key_distinguishes_fields() {
        let a = NaturalKey::new("Jane Doe", "30", "Female", "O+", "2023-01-01");
        let b = NaturalKey::new("Jane Doe", "30", "Female", "O-", "2023-01-01");
        assert_ne!(a, b);
    }
}
