//! recover-secret - rebuild secrets from threshold share documents
//!
//! usage:
//!   recover-secret                        # every *.json under ./secrets
//!   recover-secret shares/a.json dir/     # explicit files and directories
//!   recover-secret --json secrets/        # machine-readable output
//!
//! verbosity follows RUST_LOG, e.g. RUST_LOG=recovery_core=debug

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use recovery_core::batch::{collect_inputs, recover_batch, BatchOutcome, OutcomeRecord};
use tracing::{debug, info};

/// recover-secret - rebuild secrets from threshold share documents
#[derive(Parser, Debug)]
#[command(name = "recover-secret")]
#[command(about = "recover secrets from JSON share documents by majority vote")]
#[command(version)]
struct Args {
    /// share documents or directories of *.json documents
    #[arg(default_value = "secrets")]
    inputs: Vec<PathBuf>,

    /// print all outcomes as one JSON array on stdout
    #[arg(long)]
    json: bool,

    /// also print subset size, votes and discarded subsets
    #[arg(short, long)]
    report: bool,
}

fn file_name(outcome: &BatchOutcome) -> String {
    outcome
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| outcome.input.display().to_string())
}

fn print_human(outcomes: &[BatchOutcome], report: bool) {
    for outcome in outcomes {
        let name = file_name(outcome);
        match &outcome.result {
            Ok(recovery) => {
                println!("{name}  Secret: {}", recovery.secret);
                if report {
                    println!(
                        "{name}  subset size {}, {} votes, {} of {} subsets discarded, {} candidates",
                        recovery.subset_size,
                        recovery.votes,
                        recovery.subsets_discarded,
                        recovery.subsets_tried,
                        recovery.candidates
                    );
                }
            }
            Err(err) => eprintln!("{name}  ERROR: {err}"),
        }
    }
}

fn run(args: Args) -> Result<bool> {
    let inputs = collect_inputs(&args.inputs).context("failed to list inputs")?;
    if inputs.is_empty() {
        bail!("no share documents found in {:?}", args.inputs);
    }
    debug!(count = inputs.len(), "collected share documents");

    let outcomes = recover_batch(&inputs);
    let failures = outcomes.iter().filter(|o| !o.is_success()).count();

    if args.json {
        let records: Vec<OutcomeRecord> =
            outcomes.iter().map(BatchOutcome::record).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        print_human(&outcomes, args.report);
    }

    info!(
        recovered = outcomes.len() - failures,
        failed = failures,
        "batch complete"
    );
    Ok(failures == 0)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recover_secret=info,recovery_core=warn".into()),
        )
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_secrets_directory() {
        let args = Args::parse_from(["recover-secret"]);
        assert_eq!(args.inputs, vec![PathBuf::from("secrets")]);
        assert!(!args.json);
        assert!(!args.report);
    }

    #[test]
    fn accepts_multiple_inputs_and_flags() {
        let args =
            Args::parse_from(["recover-secret", "--json", "-r", "a.json", "dir"]);
        assert_eq!(
            args.inputs,
            vec![PathBuf::from("a.json"), PathBuf::from("dir")]
        );
        assert!(args.json);
        assert!(args.report);
    }

    #[test]
    fn missing_inputs_fail_the_run() {
        let args = Args::parse_from(["recover-secret", "does-not-exist.json"]);
        assert!(!run(args).unwrap());
    }
}
