//! Command-line front end for sqlfront.
//!
//! Reads SQLite SQL from a file or stdin and prints one of:
//!
//! - **tokens** - every token except whitespace, with its byte range
//! - **tree** - one parse tree per statement in the compact notation
//! - **json** - the statements and their comments as a JSON array
//! - **highlight** - the input with terminal colors
//!
//! Syntax errors never abort: they are part of the printed trees. With
//! `--fail-on-error` the tool reports them through its exit status.

pub mod error;

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use sqlfront_core::lexer::SourceError;
use sqlfront_core::{Lexer, TokenKind};
use sqlfront_highlight::{highlight, Theme};
use tracing::{debug, info, warn};

pub use error::{CliError, Result};

/// Inspect SQLite SQL: tokens, parse trees, JSON or highlighted source.
#[derive(Debug, Parser)]
#[command(name = "sqlfront")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file; stdin when absent or `-`.
    pub file: Option<PathBuf>,

    /// What to print.
    #[arg(short, long, value_enum, env = "SQLFRONT_FORMAT", default_value_t = Format::Tree)]
    pub format: Format,

    /// Color theme for the highlight format: ansi or rgb.
    #[arg(long, default_value = "ansi")]
    pub theme: String,

    /// When to emit color escapes.
    #[arg(long, value_enum, env = "SQLFRONT_COLOR", default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Exit with status 1 if any statement has a syntax error.
    #[arg(long)]
    pub fail_on_error: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Tokens,
    Tree,
    Json,
    Highlight,
}

/// Color policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolves the policy for an output that is or is not a terminal.
    #[must_use]
    pub const fn enabled(self, terminal: bool) -> bool {
        match self {
            Self::Auto => terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// What a run found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of statements parsed.
    pub statements: usize,
    /// Number of statements containing an error node.
    pub failed: usize,
}

impl Summary {
    /// The exit status for this run.
    #[must_use]
    pub const fn exit_code(&self, fail_on_error: bool) -> u8 {
        if fail_on_error && self.failed > 0 {
            1
        } else {
            0
        }
    }
}

/// Reads the input named on the command line.
///
/// # Errors
///
/// Returns [`CliError::Read`] if the input cannot be read and
/// [`CliError::Source`] if it is not UTF-8.
pub fn read_source(file: Option<&Path>) -> Result<String> {
    let mut bytes = Vec::new();
    match file {
        Some(path) if path != Path::new("-") => {
            bytes = std::fs::read(path).map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        }
        _ => {
            std::io::stdin()
                .read_to_end(&mut bytes)
                .map_err(|source| CliError::Read {
                    path: PathBuf::from("-"),
                    source,
                })?;
        }
    }
    let source = String::from_utf8(bytes).map_err(|err| SourceError::from(err.utf8_error()))?;
    Ok(source)
}

/// Parses `source` and writes the requested format to `out`.
///
/// # Errors
///
/// Returns an error if the theme is unknown or writing fails.
pub fn run(cli: &Cli, source: &str, color: bool, out: &mut dyn Write) -> Result<Summary> {
    let statements = sqlfront_core::parse(source);
    let mut summary = Summary {
        statements: statements.len(),
        failed: 0,
    };
    for (index, statement) in statements.iter().enumerate() {
        let errors = statement.tree.errors();
        if errors.is_empty() {
            debug!(statement = index, "statement parsed");
        } else {
            summary.failed += 1;
            for error in errors {
                warn!(statement = index, "{}", error.message());
            }
        }
    }

    match cli.format {
        Format::Tokens => {
            for token in Lexer::new(source).tokenize() {
                if token.kind() == &TokenKind::Whitespace {
                    continue;
                }
                writeln!(out, "{}\t{}\t{:?}", token.span(), token.kind(), token.text())?;
            }
        }
        Format::Tree => {
            for statement in &statements {
                writeln!(out, "{}", statement.tree)?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, &statements)?;
            writeln!(out)?;
        }
        Format::Highlight => {
            let theme = Theme::by_name(&cli.theme)?;
            if color {
                write!(out, "{}", highlight(source, &theme))?;
            } else {
                write!(out, "{source}")?;
            }
        }
    }

    info!(
        statements = summary.statements,
        failed = summary.failed,
        "parsed input"
    );
    Ok(summary)
}
