use crate::constants::WILDCARD;
use regex_automata::meta::{BuildError, Regex};
use std::fmt;

/// Failure to turn a wildcard origin into a matcher.
#[derive(Debug)]
pub enum PatternError {
    Build(Box<BuildError>),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::Build(_) => write!(f, "failed to compile origin pattern"),
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PatternError::Build(err) => Some(err.as_ref()),
        }
    }
}

/// A configured origin, precompiled for matching.
///
/// `*` is the only special character and stands for zero or more characters.
/// Everything else is literal, so `https://sub.example.com` only ever matches
/// itself while `https://*.example.com` matches any subdomain.
#[derive(Clone, Debug)]
pub struct OriginPattern {
    source: String,
    regex: Option<Regex>,
}

impl OriginPattern {
    pub fn compile(pattern: impl Into<String>) -> Result<Self, PatternError> {
        let source = pattern.into();
        let regex = if source.contains(WILDCARD) {
            Some(
                Regex::new(&wildcard_to_regex(&source))
                    .map_err(|err| PatternError::Build(Box::new(err)))?,
            )
        } else {
            None
        };

        Ok(Self { source, regex })
    }

    /// A pattern that only ever compares by equality.
    pub(crate) fn literal(pattern: impl Into<String>) -> Self {
        Self {
            source: pattern.into(),
            regex: None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_wildcard(&self) -> bool {
        self.regex.is_some()
    }

    pub fn matches(&self, candidate: &str) -> bool {
        if self.source == candidate {
            return true;
        }

        self.regex
            .as_ref()
            .is_some_and(|regex| regex.is_match(candidate))
    }
}

/// Anchored, single-line translation of a `*` glob.
pub(crate) fn wildcard_to_regex(pattern: &str) -> String {
    let body = pattern
        .split(WILDCARD)
        .map(regex_syntax::escape)
        .collect::<Vec<_>>()
        .join(".*");

    format!(r"^{body}\z")
}

/// Report whether any of `patterns` accepts `value`.
///
/// A pattern accepts a value it equals exactly, or one it matches in full
/// once `*` is read as "zero or more characters". An empty list accepts
/// nothing.
///
/// Every pattern is compiled on each call, so this is meant for one-off
/// checks and tests. Per-request matching goes through
/// [`OriginList::matches`](crate::OriginList::matches), which holds
/// precompiled [`OriginPattern`]s.
pub fn matches<S: AsRef<str>>(patterns: &[S], value: &str) -> bool {
    patterns.iter().any(|pattern| {
        let pattern = pattern.as_ref();
        pattern == value
            || OriginPattern::compile(pattern).is_ok_and(|compiled| compiled.matches(value))
    })
}

#[cfg(test)]
#[path = "wildcard_test.rs"]
mod wildcard_test;
