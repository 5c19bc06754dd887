//! Digest generator entrypoint.

use anyhow::{Context, Result};
use std::process::ExitCode;

use file_integrity::cli::{parse_args, report_failure, GenerateArgs, GENERATE_USAGE};
use file_integrity::generate;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_failure(&err),
    }
}

fn run() -> Result<()> {
    let args: GenerateArgs = parse_args(GENERATE_USAGE)?;
    generate(&args.input, &args.output).context("generate hash")?;
    println!(
        "SHA-256 hash has been written to: {}",
        args.output.display()
    );
    Ok(())
}
