//! Line-oriented parsing of ignore-file contents into raw pattern strings.
//!
//! The parser applies only line-level normalization; negation markers and
//! wildcard characters pass through verbatim for the compiler to interpret.

use std::io::{self, BufRead};

use crate::normalize::normalize_path;

/// Reads raw ignore patterns from a line-based byte stream.
///
/// Per-line discipline, in order:
///
/// 1. Line 1 only: a leading UTF-8 byte-order-mark is stripped.
/// 2. A line whose *untrimmed* content starts with `#` is a comment and is
///    discarded. The check precedes trimming, so `"  #x"` is a pattern, not
///    a comment.
/// 3. Surrounding whitespace is trimmed; lines that become empty are
///    discarded.
/// 4. Survivors are normalized with
///    [`normalize_path`](crate::normalize_path) so pattern matching is
///    filesystem-independent. A trailing separator is re-applied after
///    cleaning: it is the directory-only marker the compiler keys on.
///
/// # Errors
///
/// Any failure of the underlying reader (including non-UTF-8 content) is
/// returned as an [`io::Error`]; no partial pattern list is produced.
///
/// # Examples
///
/// ```
/// use sieve::read_patterns;
///
/// let file = "# build artifacts\n\n*.tmp\n./logs/\n";
/// let patterns = read_patterns(file.as_bytes()).expect("read");
/// assert_eq!(patterns, ["*.tmp", "logs/"]);
/// ```
pub fn read_patterns<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut patterns = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = if number == 0 {
            line.strip_prefix('\u{feff}').unwrap_or(&line)
        } else {
            line.as_str()
        };

        // Comment detection happens before trimming: only a literal leading
        // `#` comments a line out.
        if line.starts_with('#') {
            continue;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let normalized = normalize_path(line);
        // Cleaning drops trailing separators, but a trailing `/` is the
        // directory-only marker and must survive for the compiler.
        let dir_marker = line.ends_with('/') || line.ends_with('\\');
        if dir_marker && !normalized.ends_with('/') {
            patterns.push(format!("{normalized}/"));
        } else {
            patterns.push(normalized);
        }
    }

    Ok(patterns)
}
