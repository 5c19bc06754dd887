//! Error kinds shared by the generator and the checker.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Failures that stop a generate or check run.
#[derive(Debug)]
pub enum IntegrityError {
    /// Wrong number of command-line arguments.
    Usage(String),
    /// A file could not be read or written.
    Io { path: PathBuf, source: io::Error },
    /// The hash primitive is not available.
    AlgorithmUnavailable(String),
}

impl IntegrityError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        IntegrityError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityError::Usage(usage) => write!(f, "{usage}"),
            IntegrityError::Io { path, source } => write!(f, "{}: {source}", path.display()),
            IntegrityError::AlgorithmUnavailable(name) => {
                write!(f, "{name} algorithm not found")
            }
        }
    }
}

impl std::error::Error for IntegrityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntegrityError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience alias for results in this crate.
pub type IntegrityResult<T> = Result<T, IntegrityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_path_and_cause() {
        let err = IntegrityError::io(
            Path::new("missing.bin"),
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(err.to_string(), "missing.bin: No such file or directory");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn algorithm_unavailable_message() {
        let err = IntegrityError::AlgorithmUnavailable("SHA-256".to_string());
        assert_eq!(err.to_string(), "SHA-256 algorithm not found");
    }
}
