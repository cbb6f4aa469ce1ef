//! I/O failure taxonomy.
//!
//! Every filesystem failure is reported as an `IoError` naming the operation
//! that failed, the path involved, and the underlying OS error. Display
//! strings keep the wording of the historic tooling so existing consumers
//! that grep its messages keep working.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// The filesystem operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IoOperation {
    /// Opening a file for reading (open-failed).
    OpenFile,
    /// Opening a directory for enumeration (open-failed).
    OpenDir,
    /// Resolving the kind of a directory entry (stat-failed).
    Stat,
    /// Creating a directory (mkdir-failed).
    CreateDir,
}

impl IoOperation {
    /// Human-readable verb phrase used in error messages.
    pub fn describe(self) -> &'static str {
        match self {
            IoOperation::OpenFile => "open file",
            IoOperation::OpenDir => "open dir",
            IoOperation::Stat => "stat",
            IoOperation::CreateDir => "create dir",
        }
    }
}

/// A filesystem failure with the path that caused it.
#[derive(Debug)]
pub struct IoError {
    operation: IoOperation,
    path: PathBuf,
    source: io::Error,
}

impl IoError {
    pub fn new(operation: IoOperation, path: impl Into<PathBuf>, source: io::Error) -> Self {
        IoError {
            operation,
            path: path.into(),
            source,
        }
    }

    pub fn open_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::new(IoOperation::OpenFile, path, source)
    }

    pub fn open_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::new(IoOperation::OpenDir, path, source)
    }

    pub fn stat(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::new(IoOperation::Stat, path, source)
    }

    pub fn create_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::new(IoOperation::CreateDir, path, source)
    }

    pub fn operation(&self) -> IoOperation {
        self.operation
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The OS error kind, for callers that want to branch on it.
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to {} {}: {}",
            self.operation.describe(),
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
