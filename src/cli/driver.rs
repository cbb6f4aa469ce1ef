use anyhow::{Context, Result};

use super::args::{Command, FilesArgs, MkdirArgs, TokensArgs};

/// What a command produced. The binary decides where each part goes.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Text for stdout, newline terminated when non-empty.
    pub stdout: String,
    /// Failure reported as a value (only `mkdir` does this). The binary
    /// prints it to stderr and exits with status 1.
    pub failure: Option<String>,
}

impl CommandOutput {
    fn text(stdout: String) -> Self {
        CommandOutput {
            stdout,
            failure: None,
        }
    }
}

/// Run one subcommand. I/O failures of `tokens` and `files` are errors;
/// `mkdir` failures come back in `CommandOutput::failure`.
pub fn execute(command: &Command) -> Result<CommandOutput> {
    tracing::debug!(?command, "running command");
    match command {
        Command::Tokens(args) => run_tokens(args),
        Command::Files(args) => run_files(args),
        Command::Mkdir(args) => Ok(run_mkdir(args)),
    }
}

fn run_tokens(args: &TokensArgs) -> Result<CommandOutput> {
    let options = args.scanner_options();
    let tokens = selpol_scanner::tokenize_file(&args.file, &options)
        .with_context(|| format!("failed to tokenize {}", args.file.display()))?;

    let texts: Vec<String> = tokens
        .iter()
        .map(|token| token.text().into_owned())
        .collect();
    render_lines(&texts, args.json).map(CommandOutput::text)
}

fn run_files(args: &FilesArgs) -> Result<CommandOutput> {
    let files = selpol_fs::list_files_with(&args.dir, &args.walk_options())
        .with_context(|| format!("failed to list files under {}", args.dir.display()))?;

    let mut paths: Vec<String> = files
        .iter()
        .map(|path| path.to_string_lossy().into_owned())
        .collect();
    if args.sort {
        paths.sort();
    }
    render_lines(&paths, args.json).map(CommandOutput::text)
}

fn run_mkdir(args: &MkdirArgs) -> CommandOutput {
    let status = selpol_fs::make_dir(&args.dir);
    CommandOutput {
        stdout: String::new(),
        failure: status.message,
    }
}

/// One entry per line, or a pretty-printed JSON array.
pub fn render_lines(items: &[String], json: bool) -> Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(items).context("failed to encode JSON")?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    for item in items {
        out.push_str(item);
        out.push('\n');
    }
    Ok(out)
}
