//! Policy source tokenizer for selpoltools.
//!
//! This crate provides the lexical analysis used by the policy authoring
//! toolchain:
//! - `Token`, `TokenKind` - Token values and the rule that produced them
//! - `ScannerState` - Tokenizer state machine
//! - `ByteCursor` - Byte cursor with non-destructive lookahead
//! - `char_codes` - ASCII byte classification
//! - `ScannerOptions`, `OverflowPolicy` - Scanner configuration
//!
//! The scanner works on raw bytes. Whitespace between tokens is dropped,
//! line ends become the `EOL_SENTINEL` token, and comments are reported as
//! `COMMENT_SENTINEL` followed by the comment text.

pub mod char_codes;

pub mod cursor;
pub use cursor::ByteCursor;

pub mod options;
pub use options::{OverflowPolicy, ScannerOptions};

pub mod token;
pub use token::{COMMENT_SENTINEL, EOL_SENTINEL, ScanError, Token, TokenKind};

pub mod scanner_impl;
pub use scanner_impl::{ScannerState, tokenize_bytes, tokenize_file};

#[cfg(test)]
#[path = "../tests/char_codes_tests.rs"]
mod char_codes_tests;
#[cfg(test)]
#[path = "../tests/cursor_tests.rs"]
mod cursor_tests;
#[cfg(test)]
#[path = "../tests/scanner_impl_tests.rs"]
mod scanner_impl_tests;
#[cfg(test)]
#[path = "../tests/overflow_tests.rs"]
mod overflow_tests;
#[cfg(test)]
#[path = "../tests/tokenize_file_tests.rs"]
mod tokenize_file_tests;
