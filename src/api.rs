//! String-typed entry points.
//!
//! These mirror the interface policy scripts were written against: a path in,
//! a list of strings or a success flag out. Token and path text is converted
//! to UTF-8 lossily at this boundary only.

use std::path::Path;

use selpol_common::IoError;
use selpol_scanner::{ScanError, ScannerOptions};

/// Tokenize a policy source file with the default scanner options.
///
/// Sentinel tokens appear as `EOL_SENTINEL` and `COMMENT_SENTINEL`. With the
/// default (unbounded) overflow policy the only possible error is
/// `ScanError::Io`.
pub fn tokenize_file(path: impl AsRef<Path>) -> Result<Vec<String>, ScanError> {
    tokenize_file_with(path, &ScannerOptions::default())
}

/// Tokenize a policy source file with explicit scanner options.
///
/// Each token is converted on its own. A multi-byte UTF-8 character outside
/// a quoted string, comment or path is scanned as one token per byte, so it
/// comes back as one U+FFFD per byte (`café` gives `caf`, `\u{FFFD}`,
/// `\u{FFFD}`). Use `tokenize_file_bytes` when the exact bytes matter.
pub fn tokenize_file_with(
    path: impl AsRef<Path>,
    options: &ScannerOptions,
) -> Result<Vec<String>, ScanError> {
    let tokens = selpol_scanner::tokenize_file(path, options)?;
    Ok(tokens
        .iter()
        .map(|token| token.text().into_owned())
        .collect())
}

/// Tokenize a policy source file, keeping each token's raw bytes.
///
/// Concatenating the tokens of one line (sentinels aside) loses only the
/// blanks between them; no byte is replaced.
pub fn tokenize_file_bytes(
    path: impl AsRef<Path>,
    options: &ScannerOptions,
) -> Result<Vec<Vec<u8>>, ScanError> {
    let tokens = selpol_scanner::tokenize_file(path, options)?;
    Ok(tokens.into_iter().map(|token| token.text).collect())
}

/// Every regular file under `dir`, depth-first, in OS enumeration order.
pub fn get_files(dir: impl AsRef<Path>) -> Result<Vec<String>, IoError> {
    let files = selpol_fs::list_files(dir)?;
    Ok(files
        .iter()
        .map(|path| path.to_string_lossy().into_owned())
        .collect())
}

/// Create `dir` with mode 0755.
///
/// Returns `(true, None)` on success and `(false, Some(message))` on failure;
/// it never returns an error.
pub fn make_dir(dir: impl AsRef<Path>) -> (bool, Option<String>) {
    let status = selpol_fs::make_dir(dir);
    (status.created, status.message)
}
