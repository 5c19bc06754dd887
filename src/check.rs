//! Integrity checker: compare a file's digest against a stored hash.

use std::path::Path;

use crate::error::IntegrityResult;
use crate::hashing::{hash_file, read_file, DigestProvider, HexDigest, Sha256Provider};

/// Result of a check that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    Match,
    Mismatch,
}

impl VerificationOutcome {
    pub fn message(self) -> &'static str {
        match self {
            VerificationOutcome::Match => "File integrity confirmed",
            VerificationOutcome::Mismatch => "File integrity check failed",
        }
    }
}

/// Trimmed text content of a hash file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredHash(String);

impl StoredHash {
    /// Strip leading and trailing spaces and ASCII control characters
    /// (everything up to U+0020). Other Unicode whitespace is kept.
    pub fn from_text(text: &str) -> Self {
        StoredHash(text.trim_matches(|ch: char| ch <= ' ').to_string())
    }

    /// Read and trim a hash file.
    pub fn load(path: &Path) -> IntegrityResult<Self> {
        let bytes = read_file(path)?;
        Ok(StoredHash::from_text(&String::from_utf8_lossy(&bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the text is exactly 64 hex digits in either case.
    pub fn is_well_formed(&self) -> bool {
        HexDigest::parse(&self.0).is_some()
    }

    /// Case-insensitive exact comparison with a computed digest.
    pub fn matches(&self, computed: &HexDigest) -> bool {
        self.0.eq_ignore_ascii_case(computed.as_str())
    }
}

/// Full report of a completed check.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub outcome: VerificationOutcome,
    pub computed: HexDigest,
    pub stored: StoredHash,
}

/// Hash `file` with SHA-256 and compare it against the hash in `hash_file`.
pub fn check(file: &Path, hash_file: &Path) -> IntegrityResult<CheckReport> {
    check_with(&Sha256Provider, file, hash_file)
}

/// Like [`check`], with an explicit hash provider.
///
/// I/O and provider failures are errors; only a completed comparison yields
/// a [`VerificationOutcome`].
pub fn check_with(
    provider: &dyn DigestProvider,
    file: &Path,
    hash_path: &Path,
) -> IntegrityResult<CheckReport> {
    let computed = hash_file(provider, file)?;
    let stored = StoredHash::load(hash_path)?;
    let outcome = if stored.matches(&computed) {
        VerificationOutcome::Match
    } else {
        VerificationOutcome::Mismatch
    };
    Ok(CheckReport {
        outcome,
        computed,
        stored,
    })
}
