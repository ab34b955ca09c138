#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `sieve` decides, for a list of candidate file paths, which ones survive
//! after being filtered through an ignore file: a line-based file listing
//! glob patterns that exclude — and, with a leading `!`, re-include —
//! paths, in the familiar `.gitignore`/`.dockerignore` style. The crate
//! owns the whole pipeline: parsing pattern lines, compiling them into an
//! ordered rule set, and evaluating candidate paths against that set with
//! wildcard, directory-scope, and negation semantics. It never walks the
//! filesystem; callers supply the candidate list.
//!
//! # Design
//!
//! - [`read_patterns`] turns an ignore-file byte stream into raw pattern
//!   strings, applying only line-level normalization (byte-order-mark
//!   trim, comment skipping, whitespace trimming, separator
//!   canonicalization, lexical `.`/`..` collapsing via
//!   [`normalize_path`]).
//! - [`Pattern`] is one compiled rule: a segment list with wildcard
//!   markers plus the negation, anchoring, and directory-only flags. The
//!   glob matcher is implemented here rather than delegated, so the
//!   dialect is self-contained and independently testable.
//! - [`RuleSet`] owns the compiled rules in file order and evaluates one
//!   path as an ordered fold — the last matching rule wins. The set is
//!   immutable behind an [`std::sync::Arc`], so concurrent evaluation of
//!   independent paths needs no locking.
//! - [`filter_paths`] orchestrates: load (an absent ignore file means an
//!   empty rule set), compile once, evaluate per candidate, and emit
//!   survivors in the input order.
//!
//! # Invariants
//!
//! - Rule order is preserved exactly as read; later rules override earlier
//!   verdicts for the same path.
//! - [`normalize_path`] is idempotent and separator-agnostic, and the same
//!   transform is applied to patterns and candidates.
//! - An empty or comment-only ignore file excludes nothing.
//! - Survivor order equals candidate order; no re-sorting, no
//!   deduplication.
//!
//! # Errors
//!
//! Parsing and compilation are all-or-nothing per invocation: a read fault
//! surfaces as [`FilterError::Read`] and a malformed pattern (unterminated
//! character class, empty negation) as [`PatternError`], and no partial
//! survivor list is produced. A missing ignore file is not an error.
//!
//! # Examples
//!
//! ```
//! use sieve::RuleSet;
//!
//! let rules = RuleSet::from_patterns([
//!     "*.tmp",
//!     "src/gen/**",
//!     "!src/gen/keep.txt",
//! ]).expect("rules compile");
//!
//! assert!(rules.excludes("a.tmp"));
//! assert!(rules.excludes("src/gen/out.o"));
//! assert!(!rules.excludes("src/gen/keep.txt"));
//! assert!(!rules.excludes("readme.md"));
//! ```
//!
//! # See also
//!
//! - The `cli` crate for the thin command-line front-end over
//!   [`filter_paths`].

mod error;
mod filter;
mod normalize;
mod pattern;
mod set;
mod source;
mod trace;

pub use error::{FilterError, PatternError};
pub use filter::{filter_paths, load_rules};
pub use normalize::normalize_path;
pub use pattern::Pattern;
pub use set::RuleSet;
pub use source::read_patterns;
