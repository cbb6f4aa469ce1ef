//! Common types for the selpoltools crates.
//!
//! This crate provides the pieces shared by the scanner and the filesystem
//! helpers:
//! - I/O failure taxonomy (`IoError`, `IoOperation`)
//! - Token and directory limits

// I/O error taxonomy shared by every operation that touches the filesystem
pub mod error;
pub use error::{IoError, IoOperation};

// Centralized limits
pub mod limits;

#[cfg(test)]
#[path = "../tests/error_tests.rs"]
mod error_tests;

#[cfg(test)]
#[path = "../tests/limits_tests.rs"]
mod limits_tests;
