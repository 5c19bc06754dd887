//! Save and verify SHA-256 file digests.
//!
//! `save-file-hash` writes the 64-character lowercase hex digest of a file;
//! `check-integrity` recomputes it and compares against the saved text,
//! ignoring surrounding whitespace and hex case.

pub mod check;
pub mod cli;
pub mod error;
pub mod fsutil;
pub mod generate;
pub mod hashing;

pub use check::{check, CheckReport, StoredHash, VerificationOutcome};
pub use error::{IntegrityError, IntegrityResult};
pub use generate::generate;
pub use hashing::{sha256_hex, Digest, DigestProvider, HexDigest, Sha256Provider};
