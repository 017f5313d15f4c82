//! Path exclusion matching.
//!
//! # Responsibilities
//! - Parse configured exclusion patterns
//! - Decide whether a request path is exempt from locale redirects
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Segment prefixes match whole segments: `/docs` does not match `/docsx`
//! - No regex to guarantee O(n) matching

use std::fmt;

/// One exclusion pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    /// `/docs`: the path itself and everything below it.
    Segment(String),
    /// `/_next*`: any path starting with the text before the `*`.
    Raw(String),
    /// `*.*`: the last path segment contains a dot (a static file).
    Dotted,
}

impl PathPattern {
    /// Parse a configured pattern. Returns `None` for malformed patterns.
    pub fn parse(pattern: &str) -> Option<Self> {
        if pattern == "*.*" {
            return Some(PathPattern::Dotted);
        }

        if !pattern.starts_with('/') {
            return None;
        }

        match pattern.strip_suffix('*') {
            Some(prefix) if !prefix.contains('*') => Some(PathPattern::Raw(prefix.to_string())),
            Some(_) => None,
            None if pattern.contains('*') => None,
            None => Some(PathPattern::Segment(pattern.trim_end_matches('/').to_string())),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Segment(prefix) if prefix.is_empty() => true,
            PathPattern::Segment(prefix) => match path.strip_prefix(prefix.as_str()) {
                Some(rest) => rest.is_empty() || rest.starts_with('/'),
                None => false,
            },
            PathPattern::Raw(prefix) => path.starts_with(prefix.as_str()),
            PathPattern::Dotted => path
                .rsplit('/')
                .next()
                .is_some_and(|last| last.contains('.')),
        }
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathPattern::Segment(prefix) => f.write_str(prefix),
            PathPattern::Raw(prefix) => write!(f, "{prefix}*"),
            PathPattern::Dotted => f.write_str("*.*"),
        }
    }
}

/// The compiled set of exclusion patterns.
#[derive(Debug, Clone, Default)]
pub struct ExclusionList {
    patterns: Vec<PathPattern>,
}

impl ExclusionList {
    pub fn new(patterns: Vec<PathPattern>) -> Self {
        Self { patterns }
    }

    /// Compile configured patterns, skipping malformed ones.
    ///
    /// Validation rejects malformed patterns before this runs; anything that
    /// still slips through is logged and ignored.
    pub fn from_config(patterns: &[String]) -> Self {
        let patterns = patterns
            .iter()
            .filter_map(|raw| {
                let parsed = PathPattern::parse(raw);
                if parsed.is_none() {
                    tracing::warn!(pattern = %raw, "Ignoring malformed exclusion pattern");
                }
                parsed
            })
            .collect();

        Self { patterns }
    }

    /// Returns the first pattern matching `path`, if any.
    pub fn find(&self, path: &str) -> Option<&PathPattern> {
        self.patterns.iter().find(|p| p.matches(path))
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        self.find(path).is_some()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
