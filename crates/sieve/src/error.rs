use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error produced when a raw pattern cannot be compiled into a rule.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum PatternError {
    /// The pattern contains a `[` character class without a closing `]`.
    #[error("unclosed character class in pattern '{pattern}'")]
    UnclosedClass {
        /// The offending raw pattern text.
        pattern: String,
    },
    /// The pattern is empty once its `!` and `/` markers are stripped.
    #[error("pattern '{pattern}' is empty once its markers are stripped")]
    Empty {
        /// The offending raw pattern text.
        pattern: String,
    },
}

/// Error returned by [`filter_paths`](crate::filter_paths) and
/// [`load_rules`](crate::load_rules).
///
/// A missing ignore file is *not* represented here: absence yields an empty
/// rule set, not an error.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The ignore file exists but could not be opened or read.
    #[error("failed to read ignore file {}: {source}", path.display())]
    Read {
        /// Path of the ignore file that failed to read.
        path: PathBuf,
        /// The underlying I/O fault.
        #[source]
        source: io::Error,
    },
    /// A pattern in the ignore file failed to compile.
    #[error(transparent)]
    Pattern(#[from] PatternError),
}
