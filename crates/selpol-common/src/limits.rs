//! Centralized limits for the selpoltools crates.
//!
//! The token sizes mirror the fixed 1 KiB token buffer of the historic
//! policy tooling, so the `Truncate`/`Reject` overflow policies can
//! reproduce its cap exactly.

// =============================================================================
// Scanner Limits
// =============================================================================

/// Size of the historic per-token accumulation buffer, terminator included.
pub const TOKEN_BUFFER_SIZE: usize = 1024;

/// Longest token the historic buffer could hold (one byte is the terminator).
///
/// Used as the default `max_len` of the bounded overflow policies.
pub const MAX_TOKEN_LEN: usize = TOKEN_BUFFER_SIZE - 1;

// =============================================================================
// Filesystem Limits
// =============================================================================

/// Permission bits for directories created by `make_dir`: `rwxr-xr-x`.
pub const DIR_MODE: u32 = 0o755;
