//! Compilation of raw ignore patterns and per-path match evaluation.
//!
//! A raw pattern string becomes a [`Pattern`]: an ordered list of path
//! segments plus the `!` negation, anchoring, and trailing-`/` directory
//! flags. Matching walks the segment list against the components of a
//! normalized path, with backtracking for the `*` and `**` wildcards. The
//! algorithm follows the glob dialect the pattern grammar specifies:
//!
//! - `*` matches zero or more characters within one component,
//! - `?` matches exactly one character, never `/`,
//! - `[...]` matches one character against a class (`!`/`^` negates),
//! - `**` occupying a whole segment spans entire components; in trailing
//!   position it selects everything *inside* the matched prefix.

use crate::error::PatternError;
use crate::normalize::components;

/// A single compiled ignore rule.
///
/// Immutable once constructed. Matching expects paths in the canonical
/// forward-slash form produced by [`normalize_path`](crate::normalize_path);
/// [`RuleSet`](crate::RuleSet) normalizes candidates before evaluation.
#[derive(Clone, Debug)]
pub struct Pattern {
    text: String,
    segments: Vec<Segment>,
    negated: bool,
    rooted: bool,
    dir_only: bool,
}

/// One path segment of a compiled pattern.
#[derive(Clone, Debug)]
enum Segment {
    /// `**` occupying a whole segment: spans zero or more components.
    AnyDirs,
    /// Tokens matched within exactly one component.
    Component(Vec<Token>),
}

/// One matching unit within a component.
#[derive(Clone, Debug)]
enum Token {
    /// A literal run of characters.
    Literal(String),
    /// `?`: exactly one character.
    AnyChar,
    /// `*`: zero or more characters within the component.
    AnyRun,
    /// `[...]`: one character tested against a class.
    Class(CharClass),
}

#[derive(Clone, Debug, Default)]
struct CharClass {
    negated: bool,
    chars: Vec<char>,
    ranges: Vec<(char, char)>,
}

impl CharClass {
    fn matches(&self, ch: char) -> bool {
        let hit = self.chars.contains(&ch)
            || self.ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(&ch));
        hit != self.negated
    }
}

impl Pattern {
    /// Compiles a raw pattern into a matchable rule.
    ///
    /// The input is expected in the slash-normalized form produced by
    /// [`read_patterns`](crate::read_patterns). Markers are interpreted
    /// here, not by the parser:
    ///
    /// - a leading `!` records negation,
    /// - a trailing `/` records a directory-only rule,
    /// - a leading `/`, or a `/` anywhere else in the body, anchors the
    ///   rule to the start of the path; slash-free patterns match their
    ///   final component at any depth.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::UnclosedClass`] for a `[` class without `]`,
    /// and [`PatternError::Empty`] when nothing remains once the markers
    /// are stripped.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let text = pattern.to_owned();

        let (negated, rest) = match pattern.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, pattern),
        };

        let (dir_only, rest) = match rest.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => (true, stripped),
            _ => (false, rest),
        };

        let (anchored, rest) = match rest.strip_prefix('/') {
            Some(stripped) => (true, stripped),
            None => (false, rest),
        };

        if rest.is_empty() {
            return Err(PatternError::Empty { pattern: text });
        }

        let rooted = anchored || rest.contains('/');

        let mut segments = Vec::new();
        for segment in rest.split('/') {
            if segment == "**" {
                segments.push(Segment::AnyDirs);
            } else {
                segments.push(Segment::Component(compile_tokens(segment, pattern)?));
            }
        }

        Ok(Self {
            text,
            segments,
            negated,
            rooted,
            dir_only,
        })
    }

    /// Returns the raw pattern text this rule was compiled from.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether a match re-includes instead of excluding.
    #[must_use]
    pub const fn is_negated(&self) -> bool {
        self.negated
    }

    /// Returns whether the rule is anchored to the start of the path.
    #[must_use]
    pub const fn is_rooted(&self) -> bool {
        self.rooted
    }

    /// Returns whether the rule only matches paths contained within a
    /// directory of the given name.
    #[must_use]
    pub const fn is_dir_only(&self) -> bool {
        self.dir_only
    }

    /// Evaluates this rule against a normalized candidate path.
    ///
    /// Rooted rules must account for the entire component list (or, for
    /// directory-only rules, a proper prefix of it). Unanchored rules are
    /// tried at every depth.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        let comps = components(path);
        if comps.is_empty() {
            return false;
        }

        if self.rooted {
            match_segments(&self.segments, &comps, self.dir_only)
        } else {
            (0..comps.len()).any(|start| match_segments(&self.segments, &comps[start..], self.dir_only))
        }
    }
}

/// Matches a segment list against path components.
///
/// Success for a plain rule consumes every component; a directory-only rule
/// instead requires leftover components, so the path is strictly *inside*
/// the matched directory.
fn match_segments(segments: &[Segment], comps: &[&str], dir_only: bool) -> bool {
    match segments.split_first() {
        None => {
            if dir_only {
                !comps.is_empty()
            } else {
                comps.is_empty()
            }
        }
        Some((Segment::AnyDirs, rest)) => {
            if rest.is_empty() {
                // A trailing `**` selects everything inside the prefix it
                // follows: at least one component must remain (two for a
                // directory-only rule, whose last matched component must
                // itself contain something).
                return if dir_only {
                    comps.len() >= 2
                } else {
                    !comps.is_empty()
                };
            }
            (0..=comps.len()).any(|skip| match_segments(rest, &comps[skip..], dir_only))
        }
        Some((Segment::Component(tokens), rest)) => comps
            .split_first()
            .is_some_and(|(first, tail)| {
                match_tokens(tokens, first) && match_segments(rest, tail, dir_only)
            }),
    }
}

/// Matches a token list against one path component, backtracking over `*`.
fn match_tokens(tokens: &[Token], text: &str) -> bool {
    match tokens.split_first() {
        None => text.is_empty(),
        Some((Token::Literal(literal), rest)) => text
            .strip_prefix(literal.as_str())
            .is_some_and(|tail| match_tokens(rest, tail)),
        Some((Token::AnyChar, rest)) => {
            let mut chars = text.chars();
            chars.next().is_some() && match_tokens(rest, chars.as_str())
        }
        Some((Token::AnyRun, rest)) => {
            let mut tail = text;
            loop {
                if match_tokens(rest, tail) {
                    return true;
                }
                let mut chars = tail.chars();
                if chars.next().is_none() {
                    return false;
                }
                tail = chars.as_str();
            }
        }
        Some((Token::Class(class), rest)) => {
            let mut chars = text.chars();
            chars
                .next()
                .is_some_and(|ch| class.matches(ch) && match_tokens(rest, chars.as_str()))
        }
    }
}

/// Compiles the glob tokens of one path segment.
fn compile_tokens(segment: &str, pattern: &str) -> Result<Vec<Token>, PatternError> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = segment.chars().peekable();

    fn flush(literal: &mut String, tokens: &mut Vec<Token>) {
        if !literal.is_empty() {
            tokens.push(Token::Literal(std::mem::take(literal)));
        }
    }

    while let Some(ch) = chars.next() {
        match ch {
            '?' => {
                flush(&mut literal, &mut tokens);
                tokens.push(Token::AnyChar);
            }
            '*' => {
                flush(&mut literal, &mut tokens);
                // Adjacent stars inside a component collapse to one run;
                // only a whole-segment `**` spans components.
                while chars.peek() == Some(&'*') {
                    chars.next();
                }
                if !matches!(tokens.last(), Some(Token::AnyRun)) {
                    tokens.push(Token::AnyRun);
                }
            }
            '[' => {
                flush(&mut literal, &mut tokens);
                tokens.push(Token::Class(parse_class(&mut chars, pattern)?));
            }
            other => literal.push(other),
        }
    }

    flush(&mut literal, &mut tokens);
    Ok(tokens)
}

/// Parses a character class body after the opening `[`.
fn parse_class(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    pattern: &str,
) -> Result<CharClass, PatternError> {
    let mut class = CharClass::default();

    if matches!(chars.peek(), Some('!' | '^')) {
        chars.next();
        class.negated = true;
    }

    loop {
        let Some(ch) = chars.next() else {
            return Err(PatternError::UnclosedClass {
                pattern: pattern.to_owned(),
            });
        };

        if ch == ']' {
            return Ok(class);
        }

        if chars.peek() == Some(&'-') {
            chars.next();
            match chars.next() {
                None => {
                    return Err(PatternError::UnclosedClass {
                        pattern: pattern.to_owned(),
                    });
                }
                // `-` before the closing bracket is a literal dash.
                Some(']') => {
                    class.chars.push(ch);
                    class.chars.push('-');
                    return Ok(class);
                }
                Some(end) => {
                    let (lo, hi) = if ch <= end { (ch, end) } else { (end, ch) };
                    class.ranges.push((lo, hi));
                }
            }
        } else {
            class.chars.push(ch);
        }
    }
}
