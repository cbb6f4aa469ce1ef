//! Scanner configuration.

use selpol_common::limits::MAX_TOKEN_LEN;

/// What the scanner does with a token longer than a configured maximum.
///
/// Only accumulated tokens (words, comments, quoted content, paths, and
/// variable references) can grow; operators and sentinels are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Tokens grow without limit.
    #[default]
    Unbounded,
    /// Keep the first `max_len` bytes. The rest of the run is still consumed
    /// so it cannot start a new token.
    Truncate { max_len: usize },
    /// Abort the scan with `ScanError::TokenTooLong`.
    Reject { max_len: usize },
}

impl OverflowPolicy {
    /// Truncate at the historic buffer capacity.
    pub fn truncate() -> Self {
        OverflowPolicy::Truncate {
            max_len: MAX_TOKEN_LEN,
        }
    }

    /// Reject tokens that would not fit the historic buffer.
    pub fn reject() -> Self {
        OverflowPolicy::Reject {
            max_len: MAX_TOKEN_LEN,
        }
    }

    pub fn max_len(self) -> Option<usize> {
        match self {
            OverflowPolicy::Unbounded => None,
            OverflowPolicy::Truncate { max_len } | OverflowPolicy::Reject { max_len } => {
                Some(max_len)
            }
        }
    }
}

/// Options controlling a single scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerOptions {
    pub overflow: OverflowPolicy,
    /// Treat `$name` as one variable reference token. When off, only `$<digit>`
    /// and `$*` start a reference and `$name` scans as `$`, `name`.
    pub named_variables: bool,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        ScannerOptions {
            overflow: OverflowPolicy::Unbounded,
            named_variables: true,
        }
    }
}

impl ScannerOptions {
    /// Options matching the historic policy tooling: tokens capped at the
    /// 1023-byte buffer and `$name` split into two tokens.
    pub fn historic() -> Self {
        ScannerOptions {
            overflow: OverflowPolicy::truncate(),
            named_variables: false,
        }
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn with_named_variables(mut self, named_variables: bool) -> Self {
        self.named_variables = named_variables;
        self
    }
}
