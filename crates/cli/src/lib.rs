#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the thin command-line front-end for the `pathsieve`
//! workspace. The crate is intentionally small: it recognises the
//! ignore-file option (`-f`/`--ignore-file`), the NUL-record switch
//! (`-0`/`--from0`), and `--help`/`--version`, gathers candidate paths from
//! positional arguments or the input stream, and delegates the actual
//! filtering to [`sieve::filter_paths`]. Everything that matters lives in
//! the `sieve` crate; this one only moves bytes between streams.
//!
//! # Design
//!
//! The crate exposes [`run`] as the primary entry point. The function
//! accepts an iterator of arguments together with handles for input,
//! standard output, and standard error, so the whole command surface is
//! testable without spawning a process. Internally a
//! [`clap`](https://docs.rs/clap/) command definition performs the parse;
//! candidate paths come from positional arguments or, when none are given,
//! from whitespace-delimited tokens (NUL-terminated records under
//! `--from0`) read off the input stream.
//!
//! # Invariants
//!
//! - `run` never panics; unexpected I/O failures surface as non-zero exit
//!   codes.
//! - Surviving paths are printed one per line, in candidate order, to the
//!   output handle only; diagnostics and log events go to the error handle
//!   so the output stays machine-consumable.
//! - A missing ignore file is not an error: every candidate survives and
//!   the exit code is `0`.
//!
//! # Errors
//!
//! Argument-processing failures render clap's diagnostic to the error
//! handle and exit with code `1` before any filtering occurs. Filter
//! failures (an unreadable ignore file, a malformed pattern) print a
//! single-line diagnostic and also exit with code `1`.
//!
//! # Examples
//!
//! ```
//! use std::io;
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let code = cli::run(
//!     ["pathsieve", "--version"],
//!     io::empty(),
//!     &mut stdout,
//!     &mut stderr,
//! );
//!
//! assert_eq!(code, 0);
//! assert!(!stdout.is_empty());
//! assert!(stderr.is_empty());
//! ```
//!
//! # See also
//!
//! - [`sieve`] for the pattern compiler and match engine.
//! - `src/bin/pathsieve.rs` in the workspace root for the binary that
//!   wires [`run`] into `main`.

use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};
use sieve::filter_paths;

/// Target name for tracing events emitted by the front-end.
const CLI_TARGET: &str = "pathsieve::cli";

/// Builds the clap command definition for the `pathsieve` binary.
fn command() -> Command {
    Command::new("pathsieve")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Filter candidate paths through an ignore file")
        .arg(
            Arg::new("ignore-file")
                .short('f')
                .long("ignore-file")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .required(true)
                .help("Ignore file whose patterns decide which paths are dropped"),
        )
        .arg(
            Arg::new("from0")
                .short('0')
                .long("from0")
                .action(ArgAction::SetTrue)
                .help("Treat input-stream candidates as NUL-terminated records"),
        )
        .arg(
            Arg::new("paths")
                .value_name("PATH")
                .num_args(0..)
                .help("Candidate paths; read from the input stream when omitted"),
        )
}

/// Runs the command-line front-end and returns the process exit code.
///
/// `args` must include the program name as its first element. Candidate
/// paths that survive the ignore rules are written to `stdout` one per
/// line, in input order; diagnostics go to `stderr`.
pub fn run<Args, T, In, Out, Err>(args: Args, input: In, mut stdout: Out, mut stderr: Err) -> i32
where
    Args: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    In: Read,
    Out: Write,
    Err: Write,
{
    init_tracing();

    let matches = match command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(error) => {
            return match error.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    let _ = write!(stdout, "{error}");
                    0
                }
                _ => {
                    let _ = write!(stderr, "{error}");
                    1
                }
            };
        }
    };

    let ignore_file = matches
        .get_one::<PathBuf>("ignore-file")
        .cloned()
        .expect("clap enforces the required ignore-file option");
    let nul_records = matches.get_flag("from0");

    let candidates: Vec<String> = match matches.get_many::<String>("paths") {
        Some(values) => values.cloned().collect(),
        None => match read_candidates(input, nul_records) {
            Ok(candidates) => candidates,
            Err(error) => {
                let _ = writeln!(stderr, "pathsieve: failed to read candidate paths: {error}");
                return 1;
            }
        },
    };

    tracing::debug!(
        target: CLI_TARGET,
        ignore_file = %ignore_file.display(),
        candidates = candidates.len(),
        "filtering candidates"
    );

    match filter_paths(&ignore_file, candidates) {
        Ok(survivors) => {
            for path in &survivors {
                if writeln!(stdout, "{path}").is_err() {
                    return 1;
                }
            }
            0
        }
        Err(error) => {
            let _ = writeln!(stderr, "pathsieve: {error}");
            1
        }
    }
}

/// Reads candidate paths from the input stream.
///
/// Tokens are whitespace-delimited by default; under `--from0` the stream
/// is split on NUL bytes instead so paths may contain spaces and newlines.
fn read_candidates<R: Read>(mut input: R, nul_records: bool) -> io::Result<Vec<String>> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;

    let candidates = if nul_records {
        text.split('\0')
            .filter(|record| !record.is_empty())
            .map(str::to_owned)
            .collect()
    } else {
        text.split_whitespace().map(str::to_owned).collect()
    };
    Ok(candidates)
}

/// Initializes the `tracing` subscriber from `RUST_LOG`.
///
/// Events go to standard error so the survivor list on standard output
/// stays clean. Repeated initialization (tests call [`run`] many times in
/// one process) is a no-op.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}
