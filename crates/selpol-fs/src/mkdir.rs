//! Single directory creation.
//!
//! `create_dir` is the `Result`-returning core. `make_dir` turns its outcome
//! into a `MakeDirStatus` value for callers that want a boolean and a
//! message rather than an error to propagate.

use std::fs;
use std::io;
use std::path::Path;

use selpol_common::IoError;
use selpol_common::limits::DIR_MODE;

/// Outcome of `make_dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakeDirStatus {
    pub created: bool,
    /// Failure description naming the path and the OS error. `None` on
    /// success.
    pub message: Option<String>,
}

impl MakeDirStatus {
    pub fn is_created(&self) -> bool {
        self.created
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl From<Result<(), IoError>> for MakeDirStatus {
    fn from(result: Result<(), IoError>) -> Self {
        match result {
            Ok(()) => MakeDirStatus {
                created: true,
                message: None,
            },
            Err(err) => MakeDirStatus {
                created: false,
                message: Some(err.to_string()),
            },
        }
    }
}

/// Create `path` with mode 0755. Missing parents are not created.
///
/// The mode is set explicitly after creation, so the result does not depend
/// on the process umask. If that step fails the new directory is removed
/// again, leaving the filesystem as it was.
pub fn create_dir(path: impl AsRef<Path>) -> Result<(), IoError> {
    create_dir_then(path.as_ref(), set_dir_mode)
}

/// Create `path`, then run `finish` on it; a `finish` failure undoes the
/// creation.
pub(crate) fn create_dir_then(
    path: &Path,
    finish: impl FnOnce(&Path) -> io::Result<()>,
) -> Result<(), IoError> {
    let _span = tracing::info_span!("create_dir", path = %path.display()).entered();

    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder
        .create(path)
        .map_err(|err| IoError::create_dir(path, err))?;

    if let Err(err) = finish(path) {
        if let Err(remove_err) = fs::remove_dir(path) {
            tracing::warn!(error = %remove_err, "could not remove partially created directory");
        }
        return Err(IoError::create_dir(path, err));
    }

    tracing::debug!("created directory with mode {DIR_MODE:o}");
    Ok(())
}

#[cfg(unix)]
fn set_dir_mode(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(DIR_MODE))
}

#[cfg(not(unix))]
fn set_dir_mode(_path: &Path) -> io::Result<()> {
    Ok(())
}

/// Create `path`, reporting failure as a value instead of an error.
pub fn make_dir(path: impl AsRef<Path>) -> MakeDirStatus {
    let status = MakeDirStatus::from(create_dir(path));
    if let Some(message) = status.message() {
        tracing::debug!(error = message, "make_dir failed");
    }
    status
}
