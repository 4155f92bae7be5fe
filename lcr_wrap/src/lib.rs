//! Command line front end shared by `flps_parameters` and `seg_parameters`.

// Warning groups (as of rust 1.55)
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2021_compatibility,
    rust_2018_idioms,
    unused
)]
// Other warnings (as of rust 1.55)
#![deny(
    confusable_idents,
    const_item_mutation,
    deprecated,
    drop_bounds,
    elided_lifetimes_in_paths,
    irrefutable_let_patterns,
    non_shorthand_field_patterns,
    overlapping_range_endpoints,
    renamed_and_removed_lints,
    unconditional_recursion,
    unknown_lints,
    unused_comparisons,
    while_true
)]

pub mod args;
pub mod logging;
pub mod report;

use anyhow::{Context, Result};
use args::{Args, LengthPolicy, UsageError};
use clap::Parser;
use itertools::Itertools;
use lcr_params::Convention;
use log::debug;
use report::JsonReport;
use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

/// How a run ended, short of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    UsageError,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> ExitCode {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::UsageError => ExitCode::FAILURE,
        }
    }
}

/// Parse `argv` (program name first) and write the report to `out`.
/// Help, usage errors and warnings go to `err`.
pub fn run<I, T>(
    convention: Convention,
    argv: I,
    policy: &LengthPolicy,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Status>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(e) => {
            writeln!(err, "{}", UsageError::from_clap(&e))?;
            write!(err, "{}", report::help_text(convention))?;
            return Ok(Status::UsageError);
        }
    };
    if args.help {
        write!(err, "{}", report::help_text(convention))?;
        return Ok(Status::Success);
    }
    if !args.operands.is_empty() {
        debug!("ignoring operands: {}", args.operands.iter().join(" "));
    }

    let focus = args.focus();
    let target = policy.resolve(args.length, err)?;
    let rows = lcr_params::recommend(convention, focus, target);

    if args.json {
        JsonReport::new(convention, focus, target, &rows).write(out)?;
    } else {
        report::write_report(out, convention, focus, target, &rows)?;
    }
    Ok(Status::Success)
}

/// Print an error and the errors that caused it.
pub fn print_error_chain(err: &anyhow::Error) {
    eprintln!("ERROR: {}", err.chain().join("\n\tCaused by: "));
}

fn inner_main(convention: Convention) -> Result<Status> {
    let policy = LengthPolicy::from_parameters()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let stderr = std::io::stderr();
    let mut err = stderr.lock();
    let status = run(convention, std::env::args_os(), &policy, &mut out, &mut err)?;
    out.flush().context("Failed to write to standard output")?;
    Ok(status)
}

/// Entry point of both binaries.
pub fn main_for(convention: Convention) -> ExitCode {
    logging::init_log();
    match inner_main(convention) {
        Ok(status) => status.into(),
        Err(err) => {
            print_error_chain(&err);
            ExitCode::FAILURE
        }
    }
}
