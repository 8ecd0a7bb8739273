//! The integrity report and its gate policy.

use std::collections::BTreeMap;

use admit_model::NaturalKey;

use crate::error::ValidateError;

/// A column whose non-empty cells do not all conform to the expected type.
#[derive(Debug, Clone)]
pub struct TypeIssue {
    /// Raw column name as it appears in the file header.
    pub column: String,
    /// Expected interpretation ("numeric" or "date").
    pub expected: &'static str,
    /// Number of non-empty cells that failed to parse.
    pub non_conforming: u64,
    /// Up to a handful of offending values.
    pub samples: Vec<String>,
}

/// Advisory census of rows sharing a natural key.
#[derive(Debug, Clone, Default)]
pub struct DuplicateCensus {
    /// Rows participating in any duplicate group (every member counted).
    pub dup_total: usize,
    /// Rows that would be dropped keeping only first occurrences.
    pub dup_ignored: usize,
    /// Distinct natural keys retained after first-occurrence dedup.
    pub unique_keys: usize,
    /// First few duplicated keys, for the report.
    pub sample_keys: Vec<NaturalKey>,
}

/// Structured result of the integrity check.
///
/// Everything in here is advisory: producing a report at all means the
/// loadability gate passed. Whether any advisory finding should also block
/// the load is the caller's decision, expressed through [`GatePolicy`].
#[derive(Debug, Clone, Default)]
pub struct IntegrityReport {
    pub row_count: usize,
    pub column_count: usize,
    /// Expected columns absent from the file.
    pub missing_columns: Vec<String>,
    /// File columns outside the expected set (informational).
    pub unexpected_columns: Vec<String>,
    /// Soft type mismatches on Age, Billing Amount, Date of Admission.
    pub type_issues: Vec<TypeIssue>,
    /// Per-column count of empty cells; only non-zero entries are kept.
    pub missing_values: BTreeMap<String, usize>,
    /// Duplicate-key census; None when the key columns are incomplete.
    pub duplicates: Option<DuplicateCensus>,
}

/// Which advisory findings should flip the gate.
///
/// The defaults mirror the historical behavior: advisory findings never
/// block the load. Both knobs exist so callers can opt into stricter
/// gating without changing the validator itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct GatePolicy {
    /// Treat soft type mismatches as fatal.
    pub fail_on_type_issues: bool,
    /// Treat missing expected columns as fatal.
    pub fail_on_missing_columns: bool,
}

impl IntegrityReport {
    /// True when no advisory finding of any kind was recorded.
    pub fn is_clean(&self) -> bool {
        self.missing_columns.is_empty()
            && self.unexpected_columns.is_empty()
            && self.type_issues.is_empty()
            && self.missing_values.is_empty()
            && self.duplicates.as_ref().is_none_or(|census| census.dup_total == 0)
    }

    /// Apply a gate policy to this report.
    pub fn gate(&self, policy: GatePolicy) -> Result<(), ValidateError> {
        if policy.fail_on_missing_columns && !self.missing_columns.is_empty() {
            return Err(ValidateError::GateRejected {
                reason: format!("missing expected columns: {}", self.missing_columns.join(", ")),
            });
        }
        if policy.fail_on_type_issues && !self.type_issues.is_empty() {
            let columns: Vec<&str> = self
                .type_issues
                .iter()
                .map(|issue| issue.column.as_str())
                .collect();
            return Err(ValidateError::GateRejected {
                reason: format!("type mismatches in: {}", columns.join(", ")),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_never_rejects() {
        let report = IntegrityReport {
            missing_columns: vec!["Doctor".to_string()],
            type_issues: vec![TypeIssue {
                column: "Age".to_string(),
                expected: "numeric",
                non_conforming: 3,
                samples: vec!["abc".to_string()],
            }],
            ..IntegrityReport::default()
        };
        assert!(report.gate(GatePolicy::default()).is_ok());
        assert!(!report.is_clean());
    }

    #[test]
    fn test_strict_policy_rejects_missing_columns() {
        let report = IntegrityReport {
            missing_columns: vec!["Doctor".to_string()],
            ..IntegrityReport::default()
        };
        let policy = GatePolicy {
            fail_on_missing_columns: true,
            ..GatePolicy::default()
        };
        assert!(report.gate(policy).is_err());
    }
}
