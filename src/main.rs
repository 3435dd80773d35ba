//! ColorDir — a colorful, emoji-enhanced directory listing tool.
//!
//! Run `c` for a listing of the current directory, `c -h` for the full
//! flag table and usage examples.

mod cli;
mod core;
mod term;
mod ui;

use std::io;
use std::process::ExitCode;

use glob::Pattern;

use crate::cli::{Cli, UsageError};
use crate::core::classify::CategoryTable;
use crate::core::list::{ListOptions, Lister, Totals};
use crate::term::{Pager, TermInfo};

fn main() -> ExitCode {
    // Initialise tracing (only when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            cli::report(&err);
            return ExitCode::FAILURE;
        }
    };

    // Help short-circuits everything, including directory validation.
    if cli.help {
        ui::about::print_about();
        return ExitCode::SUCCESS;
    }

    let targets = match cli::classify_targets(&cli.targets) {
        Ok(targets) => targets,
        Err(err) => {
            cli::report(&err);
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = cli::validate_dir(&targets.dir) {
        cli::report(&err);
        return ExitCode::FAILURE;
    }
    let pattern = match Pattern::new(&targets.pattern) {
        Ok(pattern) => pattern,
        Err(err) => {
            cli::report(&UsageError::InvalidPattern(err.to_string()));
            return ExitCode::FAILURE;
        }
    };

    let options = ListOptions {
        recursive: cli.recursive,
        show_totals: cli.total,
        force_list: cli.list,
        force_wide: cli.wide,
    };
    let term = TermInfo::detect();
    let table = CategoryTable::default();
    let lister = Lister::new(options, &pattern, &table, term);

    let mut totals = Totals::default();
    let mut pager = Pager::new(cli.pause, term.rows);
    if let Err(err) = lister.list(&targets.dir, &mut totals, &mut pager) {
        cli::report(&format!("{err:#}"));
        return ExitCode::FAILURE;
    }

    ui::about::print_summary(&totals);
    ExitCode::SUCCESS
}
