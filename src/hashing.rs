//! SHA-256 digests and their canonical hex form.

use sha2::{Digest as _, Sha256};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{IntegrityError, IntegrityResult};

/// Byte length of a SHA-256 digest.
pub const DIGEST_LEN: usize = 32;
/// Character length of a hex-encoded SHA-256 digest.
pub const HEX_DIGEST_LEN: usize = DIGEST_LEN * 2;

/// Raw SHA-256 output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Digest(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Encode as 64 lowercase hex characters, most significant byte first.
    pub fn to_hex(&self) -> HexDigest {
        HexDigest(hex::encode(self.0))
    }
}

/// Lowercase hex encoding of a [`Digest`]; always 64 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexDigest(String);

impl HexDigest {
    /// Parse hex text in either case back into canonical lowercase form.
    pub fn parse(text: &str) -> Option<HexDigest> {
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(text, &mut bytes).ok()?;
        Some(Digest(bytes).to_hex())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of the hash primitive used by generate and check.
pub trait DigestProvider {
    fn digest(&self, bytes: &[u8]) -> IntegrityResult<Digest>;
}

/// The `sha2` crate's SHA-256; never unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Provider;

impl DigestProvider for Sha256Provider {
    fn digest(&self, bytes: &[u8]) -> IntegrityResult<Digest> {
        Ok(sha256(bytes))
    }
}

fn sha256(bytes: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    Digest(hasher.finalize().into())
}

/// Hash raw bytes and return a lowercase hex string.
pub fn sha256_hex(bytes: &[u8]) -> HexDigest {
    sha256(bytes).to_hex()
}

/// Read a whole file into memory.
pub fn read_file(path: &Path) -> IntegrityResult<Vec<u8>> {
    fs::read(path).map_err(|err| IntegrityError::io(path, err))
}

/// Read and hash a file with the given provider.
pub fn hash_file(provider: &dyn DigestProvider, path: &Path) -> IntegrityResult<HexDigest> {
    let content = read_file(path)?;
    Ok(provider.digest(&content)?.to_hex())
}
