use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use selpol_common::limits::MAX_TOKEN_LEN;
use selpol_fs::WalkOptions;
use selpol_scanner::{OverflowPolicy, ScannerOptions};

/// CLI arguments for the selpoltools binary.
#[derive(Parser, Debug)]
#[command(
    name = "selpoltools",
    version,
    about = "Tokenize policy sources and manage policy source trees"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the tokens of a policy source file.
    Tokens(TokensArgs),
    /// List every regular file under a directory.
    Files(FilesArgs),
    /// Create a directory with mode 0755.
    Mkdir(MkdirArgs),
}

#[derive(Args, Debug)]
pub struct TokensArgs {
    /// Source file to tokenize.
    pub file: PathBuf,

    /// What to do with tokens longer than --max-token-len.
    #[arg(long, value_enum, default_value_t = Overflow::Unbounded)]
    pub overflow: Overflow,

    /// Token length limit for the truncate and reject policies.
    #[arg(long = "max-token-len", default_value_t = MAX_TOKEN_LEN)]
    pub max_token_len: usize,

    /// Only treat `$<digit>` and `$*` as variable references; `$name` is
    /// split into `$` and `name`.
    #[arg(long = "positional-only")]
    pub positional_only: bool,

    /// Print a JSON array of token strings instead of one token per line.
    #[arg(long)]
    pub json: bool,
}

impl TokensArgs {
    pub fn scanner_options(&self) -> ScannerOptions {
        let overflow = match self.overflow {
            Overflow::Unbounded => OverflowPolicy::Unbounded,
            Overflow::Truncate => OverflowPolicy::Truncate {
                max_len: self.max_token_len,
            },
            Overflow::Reject => OverflowPolicy::Reject {
                max_len: self.max_token_len,
            },
        };
        ScannerOptions::default()
            .with_overflow(overflow)
            .with_named_variables(!self.positional_only)
    }
}

#[derive(Args, Debug)]
pub struct FilesArgs {
    /// Root directory to walk.
    pub dir: PathBuf,

    /// Sort the listing instead of keeping directory enumeration order.
    #[arg(long)]
    pub sort: bool,

    /// Do not resolve symbolic links; links are then skipped.
    #[arg(long = "no-follow-links")]
    pub no_follow_links: bool,

    /// Deepest level to list (1 lists only the root's own files).
    #[arg(long = "max-depth")]
    pub max_depth: Option<usize>,

    /// Print a JSON array of paths instead of one path per line.
    #[arg(long)]
    pub json: bool,
}

impl FilesArgs {
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            follow_links: !self.no_follow_links,
            max_depth: self.max_depth,
        }
    }
}

#[derive(Args, Debug)]
pub struct MkdirArgs {
    /// Directory to create. Its parent must already exist.
    pub dir: PathBuf,
}

/// Overflow policy names accepted by `--overflow`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Overflow {
    Unbounded,
    Truncate,
    Reject,
}
