//! Tokenizer and filesystem helpers for SELinux policy authoring tools.
//!
//! The workspace is split the same way the operations are:
//! - `selpol-scanner` - policy source tokenizer
//! - `selpol-fs` - recursive file listing and directory creation
//! - `selpol-common` - I/O error taxonomy and limits
//!
//! This crate re-exports them and adds the string-typed entry points used by
//! policy scripts (`tokenize_file`, `get_files`, `make_dir`), tracing setup,
//! and the `selpoltools` command line.

pub use selpol_common as common;
pub use selpol_fs as fs;
pub use selpol_scanner as scanner;

pub use selpol_common::{IoError, IoOperation};
pub use selpol_scanner::{COMMENT_SENTINEL, EOL_SENTINEL, ScanError, ScannerOptions, Token};

// String-typed entry points
pub mod api;
pub use api::{get_files, make_dir, tokenize_file};

// Command line support for the selpoltools binary
pub mod cli;

// Tracing subscriber setup (SELPOL_LOG / SELPOL_LOG_FORMAT)
pub mod tracing_config;
