//! Digest generator: hash a file and persist the hex digest.

use std::path::Path;

use crate::error::IntegrityResult;
use crate::fsutil::atomic_write;
use crate::hashing::{hash_file, DigestProvider, HexDigest, Sha256Provider};

/// Hash `input` with SHA-256 and write the hex digest to `output`.
pub fn generate(input: &Path, output: &Path) -> IntegrityResult<HexDigest> {
    generate_with(&Sha256Provider, input, output)
}

/// Like [`generate`], with an explicit hash provider.
///
/// The input is fully read and hashed before `output` is touched, so a
/// failed read leaves any existing hash file unchanged.
pub fn generate_with(
    provider: &dyn DigestProvider,
    input: &Path,
    output: &Path,
) -> IntegrityResult<HexDigest> {
    let hex = hash_file(provider, input)?;
    atomic_write(output, hex.as_str().as_bytes())?;
    Ok(hex)
}
