//! Filesystem helpers for the policy toolchain.
//!
//! - `list_files` - recursive enumeration of regular files (`walker`)
//! - `make_dir` / `create_dir` - single directory creation with mode 0755
//!   (`mkdir`)
//!
//! Both report failures through `selpol_common::IoError`.

pub mod walker;
pub use walker::{WalkOptions, list_files, list_files_with};

pub mod mkdir;
pub use mkdir::{MakeDirStatus, create_dir, make_dir};

#[cfg(test)]
#[path = "../tests/walker_tests.rs"]
mod walker_tests;
#[cfg(test)]
#[path = "../tests/mkdir_tests.rs"]
mod mkdir_tests;
