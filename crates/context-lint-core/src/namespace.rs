//! Dotted namespace paths (`org.app.context.sub`).
//!
//! A [`NamespacePath`] is the unit every boundary decision is made on: the
//! declaring package of a file and each imported identifier are parsed into
//! one and then compared segment by segment.

use std::fmt;
use std::str::FromStr;

/// Errors produced when a dotted identifier cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The identifier is the empty string.
    #[error("namespace path is empty")]
    Empty,
    /// The identifier has a leading, trailing or doubled `.`.
    #[error("namespace path '{path}' has an empty segment at index {index}")]
    EmptySegment {
        /// The offending identifier.
        path: String,
        /// Index of the first empty segment.
        index: usize,
    },
}

/// An ordered, non-empty sequence of non-empty segments.
///
/// Comparisons are case-sensitive and index-by-index over the raw segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespacePath {
    segments: Vec<String>,
}

impl NamespacePath {
    /// Parses a dotted identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::Empty`] for `""` and [`PathError::EmptySegment`]
    /// when any segment between dots is empty.
    pub fn parse(identifier: &str) -> Result<Self, PathError> {
        if identifier.is_empty() {
            return Err(PathError::Empty);
        }

        let mut segments = Vec::new();
        for (index, segment) in identifier.split('.').enumerate() {
            if segment.is_empty() {
                return Err(PathError::EmptySegment {
                    path: identifier.to_owned(),
                    index,
                });
            }
            segments.push(segment.to_owned());
        }

        Ok(Self { segments })
    }

    /// Number of segments. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`; present to pair with [`len`](Self::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// All segments in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Segment at `index`, or `None` when the path is too short.
    #[must_use]
    pub fn segment_at(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(String::as_str)
    }

    /// True iff both paths have at least `length` segments and agree on the
    /// first `length` of them.
    #[must_use]
    pub fn shares_prefix(&self, other: &Self, length: usize) -> bool {
        if self.len() < length || other.len() < length {
            return false;
        }
        self.segments[..length] == other.segments[..length]
    }
}

impl FromStr for NamespacePath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for NamespacePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
