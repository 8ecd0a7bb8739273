//! Shape validation of documents against a [`DocumentSchema`].
//!
//! Validation is deterministic, does not mutate the document, and stops at
//! the first violation, reporting the dotted field path.

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::{Result, StoreError};
use crate::redact::redact_value;
use crate::schema::{DocumentSchema, FieldDef, FieldType};

/// Validate `document` against `schema`.
///
/// # Errors
///
/// Returns [`StoreError::SchemaViolation`] naming the offending field path.
pub fn validate_document(schema: &DocumentSchema, document: &Value) -> Result<()> {
    let Some(object) = document.as_object() else {
        return Err(violation("$root", "document must be an object"));
    };
    validate_object(schema, object, "")
}

fn validate_object(
    schema: &DocumentSchema,
    object: &serde_json::Map<String, Value>,
    path_prefix: &str,
) -> Result<()> {
    // Undeclared fields are rejected outright.
    for key in object.keys() {
        if !schema.fields.contains_key(key) {
            return Err(violation(&join(path_prefix, key), "undeclared field"));
        }
    }

    for (name, def) in &schema.fields {
        let path = join(path_prefix, name);
        match object.get(name) {
            None => {
                if def.required {
                    return Err(violation(&path, "required field is missing"));
                }
            }
            Some(Value::Null) => {
                if !def.nullable {
                    return Err(violation(&path, "field does not accept null"));
                }
            }
            Some(value) => validate_value(&def.field_type, value, &path)?,
        }
    }
    Ok(())
}

fn validate_value(field_type: &FieldType, value: &Value, path: &str) -> Result<()> {
    match field_type {
        FieldType::String => {
            if !value.is_string() {
                return Err(type_mismatch(path, field_type, value));
            }
        }
        FieldType::Int => {
            if !value.is_i64() && !value.is_u64() {
                return Err(type_mismatch(path, field_type, value));
            }
        }
        FieldType::Double => {
            if !value.is_number() {
                return Err(type_mismatch(path, field_type, value));
            }
        }
        FieldType::Date => {
            let Some(text) = value.as_str() else {
                return Err(type_mismatch(path, field_type, value));
            };
            if NaiveDate::parse_from_str(text, "%Y-%m-%d").is_err() {
                return Err(violation(
                    path,
                    &format!("'{}' is not a YYYY-MM-DD date", redact_value(text)),
                ));
            }
        }
        FieldType::Enum(permitted) => {
            let Some(text) = value.as_str() else {
                return Err(type_mismatch(path, field_type, value));
            };
            if !permitted.iter().any(|candidate| candidate == text) {
                return Err(violation(
                    path,
                    &format!("'{}' is not a permitted value", redact_value(text)),
                ));
            }
        }
        FieldType::Object(nested) => {
            let Some(object) = value.as_object() else {
                return Err(type_mismatch(path, field_type, value));
            };
            validate_object(nested, object, path)?;
        }
    }
    Ok(())
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

fn violation(path: &str, reason: &str) -> StoreError {
    StoreError::SchemaViolation {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}

fn type_mismatch(path: &str, expected: &FieldType, value: &Value) -> StoreError {
    violation(
        path,
        &format!(
            "expected {}, found {}",
            expected.type_name(),
            json_type_name(value)
        ),
    )
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(number) => {
            if number.is_i64() || number.is_u64() {
                "int"
            } else {
                "double"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{DocumentSchema, FieldDef, FieldType};
    use serde_json::json;

    fn sample_schema() -> DocumentSchema {
        DocumentSchema::new()
            .with_field("name", FieldDef::required(FieldType::String))
            .with_field("age", FieldDef::required(FieldType::Int))
            .with_field("amount", FieldDef::optional_nullable(FieldType::Double))
            .with_field("admitted", FieldDef::required(FieldType::Date))
            .with_field(
                "status",
                FieldDef::required(FieldType::enumeration(&["Open", "Closed"])),
            )
    }

    #[test]
    fn test_valid_document() {
        let doc = json!({
            "name": "Jane",
            "age": 30,
            "amount": 0.0,
            "admitted": "2023-01-01",
            "status": "Open",
        });
        assert!(validate_document(&sample_schema(), &doc).is_ok());
    }

    #[test]
    fn test_missing_required_field() {
        let doc = json!({
            "age": 30,
            "admitted": "2023-01-01",
            "status": "Open",
        });
        let err = validate_document(&sample_schema(), &doc).unwrap_err();
        assert!(matches!(err, StoreError::SchemaViolation { ref path, .. } if path == "name"));
    }

    #[test]
    fn test_null_allowed_only_when_nullable() {
        let doc = json!({
            "name": "Jane",
            "age": 30,
            "amount": null,
            "admitted": "2023-01-01",
            "status": "Open",
        });
        assert!(validate_document(&sample_schema(), &doc).is_ok());

        let doc = json!({
            "name": null,
            "age": 30,
            "admitted": "2023-01-01",
            "status": "Open",
        });
        assert!(validate_document(&sample_schema(), &doc).is_err());
    }

    #[test]
    fn test_int_rejects_float() {
        let doc = json!({
            "name": "Jane",
            "age": 30.5,
            "admitted": "2023-01-01",
            "status": "Open",
        });
        let err = validate_document(&sample_schema(), &doc).unwrap_err();
        assert!(matches!(err, StoreError::SchemaViolation { ref path, .. } if path == "age"));
    }

    #[test]
    fn test_out_of_enum_value() {
        let doc = json!({
            "name": "Jane",
            "age": 30,
            "admitted": "2023-01-01",
            "status": "Pending",
        });
        assert!(validate_document(&sample_schema(), &doc).is_err());
    }

    #[test]
    fn test_bad_date() {
        let doc = json!({
            "name": "Jane",
            "age": 30,
            "admitted": "01-01-2023",
            "status": "Open",
        });
        assert!(validate_document(&sample_schema(), &doc).is_err());
    }

    #[test]
    fn test_violation_reasons_redact_values_by_default() {
        let doc = json!({
            "name": "Jane",
            "age": 30,
            "admitted": "2023-01-01",
            "status": "Pending",
        });
        let err = validate_document(&sample_schema(), &doc).unwrap_err();
        let message = err.to_string();
        assert!(message.contains(crate::redact::REDACTED_VALUE));
        assert!(!message.contains("Pending"));

        crate::redact::set_value_logging(true);
        let err = validate_document(&sample_schema(), &doc).unwrap_err();
        assert!(err.to_string().contains("Pending"));
        crate::redact::set_value_logging(false);
    }

    #[test]
    fn test_undeclared_field() {
        let doc = json!({
            "name": "Jane",
            "age": 30,
            "admitted": "2023-01-01",
            "status": "Open",
            "extra": true,
        });
        assert!(validate_document(&sample_schema(), &doc).is_err());
    }
}
