//! Integrity checker entrypoint.

use anyhow::{Context, Result};
use std::process::ExitCode;

use file_integrity::cli::{outcome_exit, parse_args, report_failure, CheckArgs, CHECK_USAGE};
use file_integrity::{check, VerificationOutcome};

fn main() -> ExitCode {
    match run() {
        Ok(outcome) => outcome_exit(outcome),
        Err(err) => report_failure(&err),
    }
}

fn run() -> Result<VerificationOutcome> {
    let args: CheckArgs = parse_args(CHECK_USAGE)?;
    let report = check(&args.file, &args.hash_file).context("check integrity")?;
    if !report.stored.is_well_formed() {
        eprintln!("warning: stored hash is not a 64-character hex digest");
    }
    println!("{}", report.outcome.message());
    Ok(report.outcome)
}
