//! Tracing setup for the selpoltools binary.
//!
//! Logging is off unless `SELPOL_LOG` or `RUST_LOG` is set. `SELPOL_LOG`
//! wins when both are present. A bare level such as `SELPOL_LOG=debug`
//! applies to the selpol crates only and keeps everything else at `warn`;
//! a value with explicit targets (`selpol_fs=trace,walkdir=debug`) is used
//! verbatim. `RUST_LOG` is always used verbatim.
//!
//! `SELPOL_LOG_FORMAT` picks the output:
//!
//! - `text` (default): flat `tracing-subscriber` lines
//! - `tree`: indented span tree via `tracing-tree`
//! - `json`: one JSON object per event
//!
//! ```bash
//! SELPOL_LOG=debug SELPOL_LOG_FORMAT=tree selpoltools tokens local.te
//! SELPOL_LOG=warn SELPOL_LOG_FORMAT=json selpoltools tokens local.te
//! SELPOL_LOG="selpol_fs=trace" selpoltools files policy/modules
//! ```
//!
//! Everything is written to stderr; stdout carries only command output.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Targets a bare `SELPOL_LOG` level applies to.
const SELPOL_TARGETS: &[&str] = &["selpoltools", "selpol_scanner", "selpol_fs"];

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Parse a format name. Unknown names fall back to `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Logging settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directives.
    pub directives: String,
    pub format: LogFormat,
}

impl LogConfig {
    /// Resolve from raw variable values. Returns `None` when logging stays
    /// off.
    pub fn from_vars(
        selpol_log: Option<&str>,
        rust_log: Option<&str>,
        format: Option<&str>,
    ) -> Option<Self> {
        let directives = match (selpol_log, rust_log) {
            (Some(value), _) => scope_directives(value),
            (None, Some(value)) => value.to_string(),
            (None, None) => return None,
        };
        Some(LogConfig {
            directives,
            format: LogFormat::parse(format.unwrap_or_default()),
        })
    }

    fn from_env() -> Option<Self> {
        let selpol_log = std::env::var("SELPOL_LOG").ok();
        let rust_log = std::env::var("RUST_LOG").ok();
        let format = std::env::var("SELPOL_LOG_FORMAT").ok();
        Self::from_vars(
            selpol_log.as_deref(),
            rust_log.as_deref(),
            format.as_deref(),
        )
    }
}

/// Expand a bare level into per-crate directives; leave anything else alone.
fn scope_directives(value: &str) -> String {
    let value = value.trim();
    if value.contains('=') || value.contains(',') || value.contains(':') {
        return value.to_string();
    }
    let mut directives = String::from("warn");
    for target in SELPOL_TARGETS {
        directives.push(',');
        directives.push_str(target);
        directives.push('=');
        directives.push_str(value);
    }
    directives
}

/// Install the global subscriber if `SELPOL_LOG` or `RUST_LOG` is set.
pub fn init_tracing() {
    let Some(config) = LogConfig::from_env() else {
        return;
    };
    let filter = EnvFilter::builder().parse_lossy(&config.directives);

    match config.format {
        LogFormat::Tree => {
            let layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);
            Registry::default().with(filter).with(layer).init();
        }
        LogFormat::Json => {
            let layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
