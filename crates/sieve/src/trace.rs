//! Structured tracing for rule compilation and path evaluation.
//!
//! All tracing is conditionally compiled behind the `tracing` feature flag
//! and produces no-op inline functions when disabled, so the match engine
//! carries no observability cost in default builds.

/// Target name for tracing events emitted by the rule engine.
#[cfg(feature = "tracing")]
const RULES_TARGET: &str = "sieve::rules";

/// Traces a compiled rule being added to a rule set.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_rule_added(pattern: &str, negated: bool, dir_only: bool) {
    tracing::debug!(
        target: RULES_TARGET,
        pattern = %pattern,
        negated = negated,
        dir_only = dir_only,
        "rule_added"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_rule_added(_pattern: &str, _negated: bool, _dir_only: bool) {}

/// Traces the final verdict for a path after the rule fold completes.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_verdict(path: &str, excluded: bool, deciding_rule: Option<&str>) {
    tracing::trace!(
        target: RULES_TARGET,
        path = %path,
        excluded = excluded,
        deciding_rule = ?deciding_rule,
        "verdict"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_verdict(_path: &str, _excluded: bool, _deciding_rule: Option<&str>) {}

/// Traces how many patterns were loaded from an ignore file.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_rules_loaded(path: &std::path::Path, count: usize) {
    tracing::debug!(
        target: RULES_TARGET,
        path = %path.display(),
        count = count,
        "rules_loaded"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_rules_loaded(_path: &std::path::Path, _count: usize) {}
