//! Argument parsing and exit-status mapping shared by both binaries.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::check::VerificationOutcome;
use crate::error::{IntegrityError, IntegrityResult};

pub const GENERATE_USAGE: &str = "Usage: save-file-hash <inputFilePath> <outputFilePath>";
pub const CHECK_USAGE: &str = "Usage: check-integrity <filename> <preexisting hash file name>";

/// Both commands take exactly two paths and nothing else.
const PATH_ARG_COUNT: usize = 2;

/// Exit status for a completed check that found a mismatch.
pub const EXIT_MISMATCH: u8 = 1;
/// Exit status for usage, I/O, and algorithm failures.
pub const EXIT_FAILURE: u8 = 1;

/// CLI arguments for the digest generator.
#[derive(Parser, Debug)]
#[command(
    name = "save-file-hash",
    disable_help_flag = true,
    disable_version_flag = true,
    about = "Write the SHA-256 digest of a file as hex text"
)]
pub struct GenerateArgs {
    /// File to hash
    pub input: PathBuf,

    /// Where to write the hex digest (created or overwritten)
    pub output: PathBuf,
}

/// CLI arguments for the integrity checker.
#[derive(Parser, Debug)]
#[command(
    name = "check-integrity",
    disable_help_flag = true,
    disable_version_flag = true,
    about = "Verify a file against a previously saved SHA-256 digest"
)]
pub struct CheckArgs {
    /// File to verify
    pub file: PathBuf,

    /// Hash file written by save-file-hash
    pub hash_file: PathBuf,
}

/// Parse process arguments, mapping any argument error to [`IntegrityError::Usage`].
pub fn parse_args<A: Parser>(usage: &str) -> IntegrityResult<A> {
    parse_args_from(usage, std::env::args_os())
}

/// Parse an explicit argument list (program name first).
///
/// Anything other than exactly two arguments is a usage error, decided before
/// clap sees the list. The two arguments are always taken as paths, even when
/// they start with `-` or are `--`.
pub fn parse_args_from<A, I, T>(usage: &str, args: I) -> IntegrityResult<A>
where
    A: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() != PATH_ARG_COUNT + 1 {
        return Err(IntegrityError::Usage(usage.to_string()));
    }
    args.insert(1, OsString::from("--"));
    A::try_parse_from(args).map_err(|_| IntegrityError::Usage(usage.to_string()))
}

/// Exit status for a completed check.
pub fn outcome_exit(outcome: VerificationOutcome) -> ExitCode {
    match outcome {
        VerificationOutcome::Match => ExitCode::SUCCESS,
        VerificationOutcome::Mismatch => ExitCode::from(EXIT_MISMATCH),
    }
}

/// Print a failed run and return its exit status.
///
/// Usage text goes to stdout; every other failure is one `error:` line on stderr.
pub fn report_failure(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<IntegrityError>() {
        Some(IntegrityError::Usage(usage)) => println!("{usage}"),
        _ => eprintln!("error: {err:#}"),
    }
    ExitCode::from(EXIT_FAILURE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_accepts_two_paths() {
        let args: GenerateArgs =
            parse_args_from(GENERATE_USAGE, ["save-file-hash", "in.bin", "in.sha256"])
                .expect("parse");
        assert_eq!(args.input, PathBuf::from("in.bin"));
        assert_eq!(args.output, PathBuf::from("in.sha256"));
    }

    #[test]
    fn wrong_argument_counts_are_usage_errors() {
        let cases: [&[&str]; 3] = [
            &["check-integrity"],
            &["check-integrity", "file"],
            &["check-integrity", "file", "hash", "extra"],
        ];
        for argv in cases {
            let err = parse_args_from::<CheckArgs, _, _>(CHECK_USAGE, argv.iter().copied())
                .expect_err("usage error");
            match err {
                IntegrityError::Usage(text) => assert_eq!(text, CHECK_USAGE),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn hyphenated_paths_are_taken_literally() {
        let args: GenerateArgs =
            parse_args_from(GENERATE_USAGE, ["save-file-hash", "-data", "out"]).expect("parse");
        assert_eq!(args.input, PathBuf::from("-data"));
        assert_eq!(args.output, PathBuf::from("out"));

        let args: CheckArgs =
            parse_args_from(CHECK_USAGE, ["check-integrity", "--help", "--"]).expect("parse");
        assert_eq!(args.file, PathBuf::from("--help"));
        assert_eq!(args.hash_file, PathBuf::from("--"));
    }

    #[test]
    fn separator_and_flags_count_as_arguments() {
        let cases: [&[&str]; 4] = [
            &["save-file-hash", "--", "in.bin", "in.sha256"],
            &["save-file-hash", "-h"],
            &["save-file-hash", "--help"],
            &["save-file-hash", "--version"],
        ];
        for argv in cases {
            let err = parse_args_from::<GenerateArgs, _, _>(GENERATE_USAGE, argv.iter().copied())
                .expect_err("usage error");
            assert!(matches!(err, IntegrityError::Usage(_)), "{argv:?}");
        }
    }

    #[test]
    fn usage_failure_is_not_reported_as_io() {
        let err = anyhow::Error::new(IntegrityError::Usage(GENERATE_USAGE.to_string()));
        assert!(matches!(
            err.downcast_ref::<IntegrityError>(),
            Some(IntegrityError::Usage(_))
        ));
    }
}
