//! Command-line surface — flag parsing, target classification, and usage
//! errors.
//!
//! Positional arguments are untyped on purpose: a token containing a
//! wildcard is the filter pattern, any other token is the target directory,
//! in either order.  That split cannot be expressed as two clap positionals,
//! so clap collects the raw tokens and [`classify_targets`] sorts them out.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use colored::Colorize;
use thiserror::Error;

/// Fatal command-line problems.  The `Display` strings are the exact
/// user-facing messages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("Unknown flag: {0}")]
    UnknownFlag(String),
    // These two carry the original's trailing period, doubling up with the
    // one `report` appends — kept for byte-for-byte output compatibility.
    #[error("Multiple patterns are not allowed.")]
    MultiplePatterns,
    #[error("Multiple directories are not allowed.")]
    MultipleDirectories,
    #[error("Directory does not exist: {0}")]
    MissingDirectory(String),
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("{0}")]
    Other(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "c",
    about = "Colorful, emoji-enhanced directory listings",
    disable_help_flag = true
)]
pub struct Cli {
    /// Recursive listing.
    #[arg(short, long)]
    pub recursive: bool,

    /// Display total size of directories.
    #[arg(short, long)]
    pub total: bool,

    /// Force detailed list view.
    #[arg(short, long)]
    pub list: bool,

    /// Force multi-column view.
    #[arg(short, long)]
    pub wide: bool,

    /// Pause after each screen of output.
    #[arg(short, long)]
    pub pause: bool,

    /// Display help information.
    #[arg(short, long)]
    pub help: bool,

    /// Target directory and/or wildcard pattern, in either order.
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,
}

impl Cli {
    pub fn parse_args() -> Result<Self, UsageError> {
        Self::parse_from_iter(std::env::args_os())
    }

    pub fn parse_from_iter<I, T>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args).map_err(map_clap_error)
    }
}

fn map_clap_error(err: clap::Error) -> UsageError {
    if err.kind() == ErrorKind::UnknownArgument {
        if let Some(ContextValue::String(flag)) = err.get(ContextKind::InvalidArg) {
            return UsageError::UnknownFlag(flag.clone());
        }
    }
    UsageError::Other(err.kind().to_string())
}

/// The resolved positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Targets {
    pub dir: PathBuf,
    pub pattern: String,
}

/// Split the raw positional tokens into directory and pattern.
///
/// Defaults: directory `.`, pattern `*`.  A second token of either kind is
/// a usage error.
pub fn classify_targets(targets: &[String]) -> Result<Targets, UsageError> {
    let mut dir: Option<&str> = None;
    let mut pattern: Option<&str> = None;

    for token in targets {
        if token.contains('*') || token.contains('?') {
            if pattern.is_some() {
                return Err(UsageError::MultiplePatterns);
            }
            pattern = Some(token);
        } else {
            if dir.is_some() {
                return Err(UsageError::MultipleDirectories);
            }
            dir = Some(token);
        }
    }

    Ok(Targets {
        dir: PathBuf::from(dir.unwrap_or(".")),
        pattern: pattern.unwrap_or("*").to_string(),
    })
}

/// Check the target exists and is a directory before listing begins.
pub fn validate_dir(dir: &Path) -> Result<(), UsageError> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(UsageError::MissingDirectory(dir.display().to_string()))
    }
}

/// Report a fatal usage error the way the tool always has: a red `Error:`
/// prefix, the message, and a pointer at `-h` — on stdout.
pub fn report(message: impl std::fmt::Display) {
    println!("{} {message}. Try: c -h", "Error:".red());
}
