//! Crash-safe output writes.

use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::Builder;

use crate::error::{IntegrityError, IntegrityResult};

/// Mode requested for a newly created file; the process umask still applies.
const NEW_FILE_MODE: u32 = 0o666;

/// Replace `path` with `data` via a temp file in the same directory.
///
/// Readers see either the previous content or the complete new content,
/// never a truncated file. An existing file keeps its permissions; a new one
/// gets the same mode a plain `fs::write` would create.
pub fn atomic_write(path: &Path, data: &[u8]) -> IntegrityResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let existing = fs::metadata(path).ok().map(|metadata| metadata.permissions());
    let mut tmp = Builder::new()
        .permissions(fs::Permissions::from_mode(NEW_FILE_MODE))
        .tempfile_in(dir)
        .map_err(|err| IntegrityError::io(path, err))?;
    tmp.write_all(data)
        .and_then(|()| match existing {
            Some(permissions) => tmp.as_file().set_permissions(permissions),
            None => Ok(()),
        })
        .and_then(|()| tmp.as_file().sync_data())
        .map_err(|err| IntegrityError::io(path, err))?;
    tmp.persist(path)
        .map_err(|err| IntegrityError::io(path, err.error))?;
    Ok(())
}
