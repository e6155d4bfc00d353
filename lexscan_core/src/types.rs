//! Entity kinds, spans and the candidate/match records produced by a scan.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// The kind of entity an extractor produces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityKind {
    /// "5th", "1st", "22nd"
    Ordinal,
    /// "80", "123,456,789"
    Integer,
    /// "2018-06-22T18:22:19.123Z"
    DateIso8601,
    /// "25 Jan, 2017"
    DateStringMonth,
    /// Any label supplied by a user-defined extractor.
    Custom(String),
}

impl EntityKind {
    /// Returns the string representation of this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ordinal => "ordinal",
            Self::Integer => "integer",
            Self::DateIso8601 => "date_iso8601",
            Self::DateStringMonth => "date_string_month",
            Self::Custom(name) => name,
        }
    }

    /// Whether this is one of the built-in kinds.
    #[must_use]
    pub const fn is_builtin(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl FromStr for EntityKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<String> for EntityKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "ordinal" => Self::Ordinal,
            "integer" => Self::Integer,
            "date_iso8601" => Self::DateIso8601,
            "date_string_month" => Self::DateStringMonth,
            _ => Self::Custom(s),
        }
    }
}

impl From<&str> for EntityKind {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<EntityKind> for String {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Custom(name) => name,
            builtin => builtin.as_str().to_string(),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Half-open byte interval `[start, end)` into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of bytes covered, zero for empty or reversed spans.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether the two spans share at least one position.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// A potential match, before overlap resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub label: EntityKind,
    pub span: Span,
    /// Literal substring of the input at `span`.
    pub text: String,
    /// Index of the producing extractor in the caller's list; lower wins ties.
    pub priority: usize,
}

/// A candidate that survived overlap resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    pub label: EntityKind,
    pub span: Span,
    pub text: String,
}

impl Match {
    #[must_use]
    pub const fn start(&self) -> usize {
        self.span.start
    }

    #[must_use]
    pub const fn end(&self) -> usize {
        self.span.end
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<Candidate> for Match {
    fn from(candidate: Candidate) -> Self {
        Self {
            label: candidate.label,
            span: candidate.span,
            text: candidate.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_round_trips_through_str() {
        for kind in [
            EntityKind::Ordinal,
            EntityKind::Integer,
            EntityKind::DateIso8601,
            EntityKind::DateStringMonth,
        ] {
            assert_eq!(EntityKind::from(kind.as_str()), kind);
            assert!(kind.is_builtin());
        }
    }

    #[test]
    fn test_unknown_label_is_custom() {
        let kind = EntityKind::from("currency");
        assert_eq!(kind, EntityKind::Custom("currency".to_string()));
        assert!(!kind.is_builtin());
        assert_eq!(kind.to_string(), "currency");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_entity_kind_serializes_as_plain_string() {
        let json = serde_json::to_string(&EntityKind::DateIso8601).expect("kind should serialize");
        assert_eq!(json, "\"date_iso8601\"");

        let custom: EntityKind =
            serde_json::from_str("\"currency\"").expect("valid JSON should deserialize");
        assert_eq!(custom, EntityKind::Custom("currency".to_string()));
    }

    #[test]
    fn test_span_overlap() {
        let a = Span::new(0, 5);
        assert!(a.overlaps(&Span::new(4, 8)));
        assert!(!a.overlaps(&Span::new(5, 8)));
        assert!(!Span::new(5, 8).overlaps(&a));
        assert_eq!(a.len(), 5);
        assert!(Span::new(3, 3).is_empty());
        assert!(Span::new(4, 3).is_empty());
        assert_eq!(Span::from(2..6).to_string(), "2..6");
    }
}
