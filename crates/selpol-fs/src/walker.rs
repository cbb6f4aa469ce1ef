//! Recursive listing of regular files.
//!
//! Traversal is depth-first in the order the OS returns directory entries;
//! nothing is sorted. `walkdir` keeps pending directories on an explicit
//! stack, so tree depth is not limited by the thread stack.
//!
//! Symbolic links are followed by default: a link to a regular file is
//! listed under the link's path and a link to a directory is descended
//! into. A link cycle is detected by `walkdir` and aborts the walk with a
//! stat error on the looping path.
//!
//! The walk is fail-fast. The first entry whose kind cannot be resolved, or
//! the first directory that cannot be opened, aborts the whole listing and
//! no partial result is returned.

use std::io;
use std::path::{Path, PathBuf};

use selpol_common::IoError;
use walkdir::WalkDir;

/// Options for `list_files_with`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOptions {
    /// Resolve symbolic links and classify entries by their target.
    pub follow_links: bool,
    /// Deepest directory level to list, counting the root's entries as 1.
    /// `None` walks the whole tree.
    pub max_depth: Option<usize>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        WalkOptions {
            follow_links: true,
            max_depth: None,
        }
    }
}

/// List every regular file under `root` with the default options.
pub fn list_files(root: impl AsRef<Path>) -> Result<Vec<PathBuf>, IoError> {
    list_files_with(root, &WalkOptions::default())
}

/// List every regular file under `root`.
///
/// Fails with an `OpenDir` error when `root` is missing or not a directory,
/// with `OpenDir` when a nested directory cannot be read, and with `Stat`
/// when an entry's kind cannot be determined (for example a dangling link).
pub fn list_files_with(
    root: impl AsRef<Path>,
    options: &WalkOptions,
) -> Result<Vec<PathBuf>, IoError> {
    let root = root.as_ref();
    let _span = tracing::info_span!("list_files", root = %root.display()).entered();

    let mut walker = WalkDir::new(root).follow_links(options.follow_links);
    if let Some(max_depth) = options.max_depth {
        walker = walker.max_depth(max_depth);
    }

    let mut files = Vec::new();
    // The directory yielded most recently. `walkdir` reports a failed
    // `read_dir` right after yielding the directory itself, which is how
    // open failures are told apart from stat failures.
    let mut last_dir: Option<PathBuf> = None;

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => return Err(classify_error(root, last_dir.as_deref(), err)),
        };

        let file_type = entry.file_type();
        if entry.depth() == 0 {
            if !file_type.is_dir() {
                return Err(IoError::open_dir(
                    root,
                    io::Error::new(io::ErrorKind::NotADirectory, "Not a directory"),
                ));
            }
            last_dir = Some(entry.into_path());
            continue;
        }

        if file_type.is_dir() {
            last_dir = Some(entry.into_path());
        } else if file_type.is_file() {
            files.push(entry.into_path());
        } else {
            tracing::trace!(path = %entry.path().display(), "skipping non-regular entry");
        }
    }

    tracing::debug!(files = files.len(), "listed files");
    Ok(files)
}

fn classify_error(root: &Path, last_dir: Option<&Path>, err: walkdir::Error) -> IoError {
    let path = err.path().unwrap_or(root).to_path_buf();
    let is_open_failure = err.depth() == 0 || last_dir == Some(path.as_path());

    let source = match err.loop_ancestor() {
        Some(ancestor) => io::Error::other(format!(
            "File system loop found: {} points to an ancestor {}",
            path.display(),
            ancestor.display()
        )),
        None => err
            .into_io_error()
            .unwrap_or_else(|| io::Error::other("unknown walk error")),
    };

    if is_open_failure {
        IoError::open_dir(path, source)
    } else {
        IoError::stat(path, source)
    }
}
