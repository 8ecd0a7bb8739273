//! Declarative document shapes.
//!
//! A [`DocumentSchema`] is the structural validator attached to a collection
//! at creation time. It expresses nesting, required and nullable fields,
//! typed leaves (including calendar dates carried as ISO strings), and
//! closed enum value sets.

use std::collections::BTreeMap;

/// Type of a single field.
#[derive(Debug, Clone)]
pub enum FieldType {
    /// UTF-8 string.
    String,
    /// 64-bit signed integer; floats are rejected.
    Int,
    /// 64-bit floating point; integer literals are accepted.
    Double,
    /// Calendar date carried as an ISO `YYYY-MM-DD` string.
    Date,
    /// Closed set of permitted string values.
    Enum(Vec<String>),
    /// Nested object with its own field definitions.
    Object(DocumentSchema),
}

impl FieldType {
    /// Enum constraint from a static value list.
    pub fn enumeration(values: &[&str]) -> Self {
        FieldType::Enum(values.iter().map(|value| (*value).to_string()).collect())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Double => "double",
            FieldType::Date => "date",
            FieldType::Enum(_) => "enum",
            FieldType::Object(_) => "object",
        }
    }
}

/// A field definition: type plus presence/nullability rules.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub field_type: FieldType,
    /// Field must be present in the document.
    pub required: bool,
    /// JSON null is an acceptable value.
    pub nullable: bool,
}

impl FieldDef {
    /// A field that must be present with a non-null value.
    pub fn required(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: true,
            nullable: false,
        }
    }

    /// A field that may be absent but must be non-null when present.
    pub fn optional(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: false,
            nullable: false,
        }
    }

    /// A field that may be absent or explicitly null.
    pub fn optional_nullable(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: false,
            nullable: true,
        }
    }
}

/// An object shape: named fields with definitions.
///
/// Undeclared fields are rejected by the validator.
#[derive(Debug, Clone, Default)]
pub struct DocumentSchema {
    pub fields: BTreeMap<String, FieldDef>,
}

impl DocumentSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field definition, builder style.
    #[must_use]
    pub fn with_field(mut self, name: &str, def: FieldDef) -> Self {
        self.fields.insert(name.to_string(), def);
        self
    }
}
