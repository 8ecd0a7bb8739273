//! Subcommand entry points.

use admit_cli::pipeline::{self, PipelineOptions, PipelineOutcome};
use admit_store::StoreConfig;
use admit_validate::{GatePolicy, IntegrityReport};

use crate::cli::{CheckArgs, LoadArgs};

pub fn run_check(args: &CheckArgs) -> anyhow::Result<IntegrityReport> {
    let policy = GatePolicy {
        fail_on_type_issues: args.fail_on_type_errors,
        fail_on_missing_columns: args.fail_on_missing_columns,
    };
    pipeline::run_check(&args.csv_file, policy)
}

pub fn run_load(args: &LoadArgs) -> anyhow::Result<PipelineOutcome> {
    let mut options = PipelineOptions::new(args.csv_file.clone());
    if let Some(database) = &args.database {
        options.database = database.clone();
    }
    if let Some(collection) = &args.collection {
        options.collection = collection.clone();
    }
    options.gate_policy = GatePolicy {
        fail_on_type_issues: args.fail_on_type_errors,
        fail_on_missing_columns: args.fail_on_missing_columns,
    };
    if args.abort_on_rejection {
        options.reject_policy = admit_load::RejectPolicy::Abort;
    }
    pipeline::run_migration(&options, &StoreConfig::from_env())
}
