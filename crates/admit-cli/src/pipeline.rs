//! Pipeline orchestration: integrity gate, store connection, load.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{info, info_span};

use admit_ingest::read_csv_table;
use admit_load::{COLLECTION_NAME, DATABASE_NAME, LoadOptions, LoadReport, RejectPolicy, load_documents};
use admit_store::{StoreClient, StoreConfig};
use admit_validate::{GatePolicy, IntegrityReport, run_integrity_check};

/// Everything the migration needs besides the store connection.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Source CSV path.
    pub csv_file: PathBuf,
    /// Destination database name.
    pub database: String,
    /// Destination collection name.
    pub collection: String,
    /// Which advisory integrity findings block the load.
    pub gate_policy: GatePolicy,
    /// Handling of documents the destination shape validator rejects.
    pub reject_policy: RejectPolicy,
}

impl PipelineOptions {
    pub fn new(csv_file: PathBuf) -> Self {
        Self {
            csv_file,
            database: DATABASE_NAME.to_string(),
            collection: COLLECTION_NAME.to_string(),
            gate_policy: GatePolicy::default(),
            reject_policy: RejectPolicy::default(),
        }
    }
}

/// Combined result of a full migration run.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub integrity: IntegrityReport,
    pub load: LoadReport,
}

/// Run the integrity check and apply the gate policy.
///
/// # Errors
///
/// Fails when the source file cannot be loaded as tabular data, or when
/// the gate policy treats one of the advisory findings as fatal.
pub fn run_check(csv_file: &Path, policy: GatePolicy) -> anyhow::Result<IntegrityReport> {
    let report = run_integrity_check(csv_file)
        .with_context(|| format!("integrity check failed for {}", csv_file.display()))?;
    report.gate(policy).context("integrity gate rejected the source")?;
    Ok(report)
}

/// Run the full migration: gate, connect with retry, load.
///
/// The gate runs before any connection attempt, so a bad source file
/// never dials the store at all.
///
/// # Errors
///
/// Propagates gate rejections, connection exhaustion, and load failures.
pub fn run_migration(
    options: &PipelineOptions,
    config: &StoreConfig,
) -> anyhow::Result<PipelineOutcome> {
    let span = info_span!("migration", source_file = %options.csv_file.display());
    let _guard = span.enter();

    let integrity = run_check(&options.csv_file, options.gate_policy)?;
    info!("integrity gate passed, connecting to store");
    let mut client = StoreClient::connect_with_retry(config).context("store connection failed")?;
    let load = load_stage(options, &mut client)?;
    Ok(PipelineOutcome { integrity, load })
}

/// Run the full migration against an already-connected client.
///
/// # Errors
///
/// Same failure modes as [`run_migration`] minus connection errors.
pub fn run_migration_with_client(
    options: &PipelineOptions,
    client: &mut StoreClient,
) -> anyhow::Result<PipelineOutcome> {
    let integrity = run_check(&options.csv_file, options.gate_policy)?;
    let load = load_stage(options, client)?;
    Ok(PipelineOutcome { integrity, load })
}

fn load_stage(options: &PipelineOptions, client: &mut StoreClient) -> anyhow::Result<LoadReport> {
    // The loader works from its own read of the source, not from any state
    // the validator produced.
    let table = read_csv_table(&options.csv_file)
        .with_context(|| format!("re-reading {}", options.csv_file.display()))?;
    let database = client.database(&options.database);
    let load_options = LoadOptions {
        collection: options.collection.clone(),
        reject_policy: options.reject_policy,
    };
    let report = load_documents(&table, database, &load_options)?;
    Ok(report)
}
