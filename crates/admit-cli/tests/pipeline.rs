//! End-to-end pipeline tests against an in-process store.

use std::io::Write;

use tempfile::NamedTempFile;

use admit_cli::pipeline::{PipelineOptions, run_migration_with_client};
use admit_load::{COLLECTION_NAME, DATABASE_NAME};
use admit_store::{StoreClient, StoreConfig};
use admit_validate::GatePolicy;

const FULL_HEADER: &str = "Name,Age,Gender,Blood Type,Date of Admission,Admission Type,\
Room Number,Billing Amount,Discharge Date,Medical Condition,Medication,Test Results,\
Doctor,Hospital,Insurance Provider";

fn row(name: &str, age: &str, date: &str) -> String {
    format!(
        "{name},{age},Female,O+,{date},Emergency,101,1500.50,2023-01-10,Asthma,Aspirin,\
         Normal,Dr. Smith,General Hospital,Cigna"
    )
}

fn csv_fixture(lines: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".csv").unwrap();
    writeln!(file, "{FULL_HEADER}").unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn connect() -> StoreClient {
    StoreClient::connect(&StoreConfig::default()).unwrap()
}

#[test]
fn test_unloadable_source_blocks_migration() {
    let options = PipelineOptions::new("/nonexistent/admissions.csv".into());
    let mut client = connect();
    let error = run_migration_with_client(&options, &mut client).unwrap_err();
    assert!(error.to_string().contains("integrity check failed"));
    // The loader never ran, so the destination database has no collections.
    let database = client.database(DATABASE_NAME);
    assert!(database.list_collection_names().is_empty());
}

#[test]
fn test_strict_gate_blocks_load_on_missing_columns() {
    let mut file = NamedTempFile::with_suffix(".csv").unwrap();
    writeln!(file, "Name,Age").unwrap();
    writeln!(file, "Jane Doe,30").unwrap();
    file.flush().unwrap();

    let mut options = PipelineOptions::new(file.path().to_path_buf());
    options.gate_policy = GatePolicy {
        fail_on_missing_columns: true,
        ..GatePolicy::default()
    };
    let mut client = connect();
    assert!(run_migration_with_client(&options, &mut client).is_err());
    let database = client.database(DATABASE_NAME);
    assert!(database.list_collection_names().is_empty());
}

#[test]
fn test_migration_end_to_end() {
    let file = csv_fixture(&[
        row("Jane Doe", "30", "2023-01-01"),
        row("Jane Doe", "30", "2023-01-01"),
        row("John Roe", "45", "2023-02-01"),
    ]);
    let options = PipelineOptions::new(file.path().to_path_buf());
    let mut client = connect();
    let outcome = run_migration_with_client(&options, &mut client).unwrap();

    assert_eq!(outcome.integrity.row_count, 3);
    let census = outcome.integrity.duplicates.as_ref().unwrap();
    assert_eq!(census.dup_ignored, 1);

    assert_eq!(outcome.load.inserted, 2);
    assert_eq!(outcome.load.duplicates, 1);
    assert_eq!(outcome.load.stored_total, 2);

    let database = client.database(DATABASE_NAME);
    let collection = database.collection(COLLECTION_NAME).unwrap();
    assert_eq!(collection.count_documents(), 2);
}

#[test]
fn test_advisory_findings_do_not_block_default_gate() {
    // "thirty" fails the numeric check on Age; the default gate still passes
    // and the row is rejected by the destination schema instead.
    let file = csv_fixture(&[
        row("Jane Doe", "thirty", "2023-01-01"),
        row("John Roe", "45", "2023-02-01"),
    ]);
    let options = PipelineOptions::new(file.path().to_path_buf());
    let mut client = connect();
    let outcome = run_migration_with_client(&options, &mut client).unwrap();

    assert_eq!(outcome.integrity.type_issues.len(), 1);
    assert_eq!(outcome.load.inserted, 1);
    assert_eq!(outcome.load.rejected, 1);
}
