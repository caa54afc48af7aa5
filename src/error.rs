//! Error types for coplint operations.
//!
//! This module defines [`CoplintError`], the error type used by the fallible
//! edges of the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! Analysis itself never fails: a node shape that matches no pattern yields no
//! offense, an unreadable path counts as missing, and a conflicting correction
//! is dropped with a log line. Errors only surface where the crate touches the
//! filesystem on the host's behalf (`FixEngine::apply_to_file`).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for coplint operations.
#[derive(Debug, Error)]
pub enum CoplintError {
    /// Failed to read a source file before applying corrections.
    #[error("Failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a corrected source file back.
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for coplint operations.
pub type Result<T> = std::result::Result<T, CoplintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_failed_displays_path() {
        let err = CoplintError::ReadFailed {
            path: PathBuf::from("/app/components/foo.rb"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/app/components/foo.rb"));
    }

    #[test]
    fn write_failed_displays_path_and_cause() {
        let err = CoplintError::WriteFailed {
            path: PathBuf::from("spec/features/x_spec.rb"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("spec/features/x_spec.rb"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn io_error_converts() {
        fn fails() -> Result<()> {
            Err(std::io::Error::other("boom"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(CoplintError::Io(_))));
    }
}
