//! The destination container shape.
//!
//! This is the one external contract that must be bit-exact: field names,
//! nesting, and enum value sets. The three sub-objects are required; within
//! them, requiredness and nullability follow the admission record model.

use admit_model::{
    AdmissionType, BloodType, Gender, InsuranceProvider, MedicalCondition, Medication, TestResult,
};
use admit_store::{DocumentSchema, FieldDef, FieldType};

/// Default destination database.
pub const DATABASE_NAME: &str = "medical_data";

/// Default destination collection.
pub const COLLECTION_NAME: &str = "admissions";

/// The shape validator attached to the admissions collection.
pub fn admissions_schema() -> DocumentSchema {
    let patient = DocumentSchema::new()
        .with_field("name", FieldDef::required(FieldType::String))
        .with_field("age", FieldDef::required(FieldType::Int))
        .with_field(
            "gender",
            FieldDef::required(FieldType::enumeration(Gender::values())),
        )
        .with_field(
            "blood_type",
            FieldDef::required(FieldType::enumeration(BloodType::values())),
        )
        .with_field(
            "insurance_provider",
            FieldDef::required(FieldType::enumeration(InsuranceProvider::values())),
        );

    let admission = DocumentSchema::new()
        .with_field("date", FieldDef::required(FieldType::Date))
        .with_field(
            "type",
            FieldDef::required(FieldType::enumeration(AdmissionType::values())),
        )
        .with_field("room_number", FieldDef::optional_nullable(FieldType::Int))
        .with_field(
            "billing_amount",
            FieldDef::optional_nullable(FieldType::Double),
        )
        .with_field(
            "discharge_date",
            FieldDef::optional_nullable(FieldType::Date),
        )
        .with_field("doctor", FieldDef::optional(FieldType::String))
        .with_field("hospital", FieldDef::optional(FieldType::String));

    let medical = DocumentSchema::new()
        .with_field(
            "condition",
            FieldDef::required(FieldType::enumeration(MedicalCondition::values())),
        )
        .with_field(
            "medication",
            FieldDef::required(FieldType::enumeration(Medication::values())),
        )
        .with_field(
            "test_results",
            FieldDef::required(FieldType::enumeration(TestResult::values())),
        );

    DocumentSchema::new()
        .with_field("patient", FieldDef::required(FieldType::Object(patient)))
        .with_field("admission", FieldDef::required(FieldType::Object(admission)))
        .with_field("medical", FieldDef::required(FieldType::Object(medical)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use admit_store::validate_document;
    use serde_json::json;

    #[test]
    fn test_schema_accepts_complete_document() {
        let doc = json!({
            "patient": {
                "name": "Jane Doe",
                "age": 30,
                "gender": "Female",
                "blood_type": "O+",
                "insurance_provider": "Cigna",
            },
            "admission": {
                "date": "2023-01-01",
                "type": "Emergency",
                "room_number": 101,
                "billing_amount": 1500.5,
                "discharge_date": "2023-01-10",
                "doctor": "Dr. Smith",
                "hospital": "General Hospital",
            },
            "medical": {
                "condition": "Asthma",
                "medication": "Aspirin",
                "test_results": "Normal",
            },
        });
        assert!(validate_document(&admissions_schema(), &doc).is_ok());
    }

    #[test]
    fn test_schema_rejects_out_of_enum_gender() {
        let doc = json!({
            "patient": {
                "name": "Jane Doe",
                "age": 30,
                "gender": "Other",
                "blood_type": "O+",
                "insurance_provider": "Cigna",
            },
            "admission": { "date": "2023-01-01", "type": "Emergency" },
            "medical": {
                "condition": "Asthma",
                "medication": "Aspirin",
                "test_results": "Normal",
            },
        });
        assert!(validate_document(&admissions_schema(), &doc).is_err());
    }

    #[test]
    fn test_schema_allows_nullable_admission_fields() {
        let doc = json!({
            "patient": {
                "name": "Jane Doe",
                "age": 30,
                "gender": "Female",
                "blood_type": "O+",
                "insurance_provider": "Cigna",
            },
            "admission": {
                "date": "2023-01-01",
                "type": "Elective",
                "room_number": null,
                "billing_amount": null,
                "discharge_date": null,
            },
            "medical": {
                "condition": "Asthma",
                "medication": "Aspirin",
                "test_results": "Normal",
            },
        });
        assert!(validate_document(&admissions_schema(), &doc).is_ok());
    }
}
