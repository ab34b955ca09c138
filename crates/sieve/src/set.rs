use std::sync::Arc;

use crate::error::PatternError;
use crate::normalize::normalize_path;
use crate::pattern::Pattern;
use crate::trace;

/// Compiled, immutable, precedence-ordered collection of ignore rules.
///
/// A `RuleSet` is built once from the patterns of an ignore file and is
/// read-only thereafter. Rules keep their file order because evaluation is
/// an ordered fold: every rule that matches a path overrides the verdict of
/// the rules before it, so `["*.log", "!keep.log"]` and
/// `["!keep.log", "*.log"]` behave differently on `keep.log`.
///
/// `RuleSet` is cheaply cloneable (the rule list is behind an [`Arc`]) and
/// safe to share across threads: evaluation takes `&self` and touches no
/// mutable state, so independent candidate paths may be checked
/// concurrently against one set.
///
/// # Examples
///
/// ```
/// use sieve::RuleSet;
///
/// let rules = RuleSet::from_patterns(["*.log", "!keep.log"]).expect("compiled");
///
/// assert!(rules.excludes("build.log"));
/// assert!(!rules.excludes("keep.log"));
/// assert!(!rules.excludes("readme.md"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    rules: Arc<[Pattern]>,
}

impl RuleSet {
    /// Compiles raw patterns into a rule set, preserving iteration order.
    ///
    /// # Errors
    ///
    /// Returns the first [`PatternError`] encountered; compilation is
    /// all-or-nothing, so no partially usable set is produced.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rules = Vec::new();
        for pattern in patterns {
            let rule = Pattern::new(pattern.as_ref())?;
            trace::trace_rule_added(rule.text(), rule.is_negated(), rule.is_dir_only());
            rules.push(rule);
        }
        Ok(Self {
            rules: rules.into(),
        })
    }

    /// Returns `true` if the set holds no rules.
    ///
    /// An empty set excludes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the number of compiled rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the candidate path is excluded by this rule set.
    ///
    /// The candidate is normalized with
    /// [`normalize_path`](crate::normalize_path) and then folded through
    /// the rules in file order: each matching rule sets the verdict to
    /// excluded (or back to included for a `!` rule), and the last matching
    /// rule wins. No rule matching means the path survives.
    #[must_use]
    pub fn excludes(&self, path: &str) -> bool {
        let path = normalize_path(path);

        let mut excluded = false;
        let mut deciding: Option<&str> = None;
        for rule in self.rules.iter() {
            if rule.matches(&path) {
                excluded = !rule.is_negated();
                deciding = Some(rule.text());
            }
        }

        trace::trace_verdict(&path, excluded, deciding);
        excluded
    }
}
