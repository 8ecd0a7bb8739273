//! Integration tests for the document loader.

use admit_ingest::CsvTable;
use admit_load::{
    DATABASE_NAME, LoadError, LoadOptions, RejectPolicy, find_by_patient_name, load_documents,
};
use admit_store::{StoreClient, StoreConfig};
use serde_json::json;

const HEADERS: [&str; 15] = [
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

fn admission_row(
    name: &str,
    age: &str,
    gender: &str,
    blood: &str,
    date: &str,
    doctor: &str,
) -> Vec<String> {
    vec![
        name.to_string(),
        age.to_string(),
        gender.to_string(),
        blood.to_string(),
        date.to_string(),
        "Emergency".to_string(),
        "101".to_string(),
        "1500.50".to_string(),
        "2023-01-10".to_string(),
        "Asthma".to_string(),
        "Aspirin".to_string(),
        "Normal".to_string(),
        doctor.to_string(),
        "General Hospital".to_string(),
        "Cigna".to_string(),
    ]
}

fn source_table(rows: Vec<Vec<String>>) -> CsvTable {
    CsvTable {
        headers: HEADERS.iter().map(|h| (*h).to_string()).collect(),
        rows,
    }
}

fn connect() -> StoreClient {
    StoreClient::connect(&StoreConfig::default()).unwrap()
}

#[test]
fn test_duplicate_keys_deduplicated_first_wins() {
    // Jane's key appears twice with different doctors; John's once.
    let table = source_table(vec![
        admission_row("Jane Doe", "30", "Female", "O+", "2023-01-01", "Dr. Smith"),
        admission_row("Jane Doe", "30", "Female", "O+", "2023-01-01", "Dr. Jones"),
        admission_row("John Roe", "45", "Male", "A-", "2023-02-01", "Dr. Patel"),
    ]);
    let mut client = connect();
    let database = client.database(DATABASE_NAME);
    let report = load_documents(&table, database, &LoadOptions::default()).unwrap();

    assert_eq!(report.row_count, 3);
    assert_eq!(report.inserted, 2);
    assert_eq!(report.duplicates, 1);
    assert_eq!(report.rejected, 0);
    assert_eq!(report.stored_total, 2);

    let jane = find_by_patient_name(database, "admissions", "Jane Doe").unwrap();
    assert_eq!(jane["admission"]["doctor"], json!("Dr. Smith"));
}

#[test]
fn test_count_invariant_across_mixed_input() {
    let table = source_table(vec![
        admission_row("Jane Doe", "30", "Female", "O+", "2023-01-01", "Dr. Smith"),
        admission_row("Jane Doe", "30", "Female", "O+", "2023-01-01", "Dr. Smith"),
        admission_row("John Roe", "45", "Male", "A-", "2023-02-01", "Dr. Patel"),
        admission_row("Mary Poe", "52", "Other", "B+", "2023-03-01", "Dr. Patel"),
    ]);
    let mut client = connect();
    let database = client.database(DATABASE_NAME);
    let report = load_documents(&table, database, &LoadOptions::default()).unwrap();

    assert_eq!(
        report.inserted + report.duplicates + report.rejected,
        report.row_count
    );
    assert_eq!(report.stored_total, report.inserted);
    assert_eq!(report.rejected, 1);
}

#[test]
fn test_zero_room_and_billing_survive() {
    let mut row = admission_row("Jane Doe", "30", "Female", "O+", "2023-01-01", "Dr. Smith");
    row[6] = "0".to_string();
    row[7] = "0.0".to_string();
    let table = source_table(vec![row]);
    let mut client = connect();
    let database = client.database(DATABASE_NAME);
    let report = load_documents(&table, database, &LoadOptions::default()).unwrap();
    assert_eq!(report.inserted, 1);

    let jane = find_by_patient_name(database, "admissions", "Jane Doe").unwrap();
    assert_eq!(jane["admission"]["room_number"], json!(0));
    assert_eq!(jane["admission"]["billing_amount"], json!(0.0));
}

#[test]
fn test_empty_billing_amount_inserts_as_null() {
    let mut row = admission_row("Jane Doe", "30", "Female", "O+", "2023-01-01", "Dr. Smith");
    row[7] = String::new();
    let table = source_table(vec![row]);
    let mut client = connect();
    let database = client.database(DATABASE_NAME);
    let report = load_documents(&table, database, &LoadOptions::default()).unwrap();
    assert_eq!(report.inserted, 1);

    let jane = find_by_patient_name(database, "admissions", "Jane Doe").unwrap();
    assert!(jane["admission"]["billing_amount"].is_null());
}

#[test]
fn test_out_of_enum_admission_type_rejected() {
    let mut row = admission_row("Jane Doe", "30", "Female", "O+", "2023-01-01", "Dr. Smith");
    row[5] = "Scheduled".to_string();
    let table = source_table(vec![row]);
    let mut client = connect();
    let database = client.database(DATABASE_NAME);
    let report = load_documents(&table, database, &LoadOptions::default()).unwrap();

    assert_eq!(report.inserted, 0);
    assert_eq!(report.rejected, 1);
    assert_eq!(report.stored_total, 0);
}

#[test]
fn test_abort_policy_terminates_on_rejection() {
    let mut row = admission_row("Jane Doe", "30", "Female", "O+", "2023-01-01", "Dr. Smith");
    row[5] = "Scheduled".to_string();
    let table = source_table(vec![row]);
    let mut client = connect();
    let database = client.database(DATABASE_NAME);
    let options = LoadOptions {
        reject_policy: RejectPolicy::Abort,
        ..LoadOptions::default()
    };
    let err = load_documents(&table, database, &options).unwrap_err();
    assert!(matches!(err, LoadError::DocumentRejected { row: 0, .. }));
}

#[test]
fn test_rejection_reason_redacts_cell_value() {
    let mut row = admission_row("Jane Doe", "30", "Female", "O+", "2023-01-01", "Dr. Smith");
    row[5] = "Scheduled".to_string();
    let table = source_table(vec![row]);
    let mut client = connect();
    let database = client.database(DATABASE_NAME);
    let options = LoadOptions {
        reject_policy: RejectPolicy::Abort,
        ..LoadOptions::default()
    };
    let err = load_documents(&table, database, &options).unwrap_err();
    // The quoted cell value is patient data and stays out of the message
    // unless value logging is explicitly enabled.
    let message = err.to_string();
    assert!(message.contains(admit_store::REDACTED_VALUE));
    assert!(!message.contains("Scheduled"));
}

#[test]
fn test_rerun_recreates_container_from_empty() {
    let table = source_table(vec![admission_row(
        "Jane Doe", "30", "Female", "O+", "2023-01-01", "Dr. Smith",
    )]);
    let mut client = connect();
    let database = client.database(DATABASE_NAME);
    load_documents(&table, database, &LoadOptions::default()).unwrap();
    // Second run must not accumulate a second generation.
    let report = load_documents(&table, database, &LoadOptions::default()).unwrap();
    assert_eq!(report.inserted, 1);
    assert_eq!(report.stored_total, 1);
}

#[test]
fn test_unparseable_admission_date_rejected_not_errored() {
    let mut row = admission_row("Jane Doe", "30", "Female", "O+", "2023-01-01", "Dr. Smith");
    row[4] = "soon".to_string();
    let table = source_table(vec![row]);
    let mut client = connect();
    let database = client.database(DATABASE_NAME);
    let report = load_documents(&table, database, &LoadOptions::default()).unwrap();
    // Coercion yields null; admission.date is required, so the store rejects.
    assert_eq!(report.rejected, 1);
    assert_eq!(report.inserted, 0);
}
