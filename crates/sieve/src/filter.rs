use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use crate::error::FilterError;
use crate::set::RuleSet;
use crate::source::read_patterns;
use crate::trace;

/// Loads and compiles the rules of an ignore file.
///
/// An absent ignore file is explicitly not an error: it yields an empty
/// [`RuleSet`], which excludes nothing.
///
/// # Errors
///
/// Returns [`FilterError::Read`] when the file exists but cannot be opened
/// or read, and [`FilterError::Pattern`] when a pattern fails to compile.
pub fn load_rules(ignore_file: &Path) -> Result<RuleSet, FilterError> {
    let file = match File::open(ignore_file) {
        Ok(file) => file,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            trace::trace_rules_loaded(ignore_file, 0);
            return Ok(RuleSet::default());
        }
        Err(source) => {
            return Err(FilterError::Read {
                path: ignore_file.to_owned(),
                source,
            });
        }
    };

    let patterns = read_patterns(BufReader::new(file)).map_err(|source| FilterError::Read {
        path: ignore_file.to_owned(),
        source,
    })?;
    trace::trace_rules_loaded(ignore_file, patterns.len());

    Ok(RuleSet::from_patterns(patterns)?)
}

/// Filters candidate paths through an ignore file.
///
/// Parses and compiles the ignore file once, evaluates every candidate
/// against the resulting [`RuleSet`], and returns the survivors — the
/// candidates the rules did not exclude — in exactly the input order, with
/// their original spelling and without deduplication.
///
/// # Errors
///
/// Propagates [`load_rules`] failures. Filtering is all-or-nothing: on
/// error no partial survivor list is returned.
///
/// # Examples
///
/// ```no_run
/// use sieve::filter_paths;
/// use std::path::Path;
///
/// let survivors = filter_paths(
///     Path::new(".myignore"),
///     ["a.tmp", "readme.md"].map(String::from),
/// )?;
/// # Ok::<(), sieve::FilterError>(())
/// ```
pub fn filter_paths<I>(ignore_file: &Path, candidates: I) -> Result<Vec<String>, FilterError>
where
    I: IntoIterator<Item = String>,
{
    let rules = load_rules(ignore_file)?;

    let mut survivors = Vec::new();
    for candidate in candidates {
        if !rules.excludes(&candidate) {
            survivors.push(candidate);
        }
    }
    Ok(survivors)
}
