//! The matcher capability and the `label + matcher` extractor pair.

use std::fmt;
use std::sync::Arc;

use crate::types::{EntityKind, Span};

/// Finds candidate spans of one entity kind.
///
/// Implementations must be stateless: the scan position is passed in and
/// every call with the same arguments returns the same span. A returned span
/// must start at or after `start`, be non-empty and lie on `char` boundaries.
pub trait TextMatcher: Send + Sync {
    /// Next candidate at or after byte offset `start`, or `None`.
    fn find_at(&self, text: &str, start: usize) -> Option<Span>;

    /// Short human-readable description, used in logs and listings.
    fn describe(&self) -> String {
        String::from("<matcher>")
    }
}

impl<F> TextMatcher for F
where
    F: Fn(&str, usize) -> Option<Span> + Send + Sync,
{
    fn find_at(&self, text: &str, start: usize) -> Option<Span> {
        self(text, start)
    }
}

/// A named matcher for one entity kind.
///
/// Cloning is cheap; the matcher is shared.
#[derive(Clone)]
pub struct ExtractorDefinition {
    label: EntityKind,
    matcher: Arc<dyn TextMatcher>,
}

impl ExtractorDefinition {
    #[must_use]
    pub fn new(label: impl Into<EntityKind>, matcher: impl TextMatcher + 'static) -> Self {
        Self {
            label: label.into(),
            matcher: Arc::new(matcher),
        }
    }

    #[must_use]
    pub const fn label(&self) -> &EntityKind {
        &self.label
    }

    #[must_use]
    pub fn matcher(&self) -> &dyn TextMatcher {
        self.matcher.as_ref()
    }

    /// Every span the matcher yields over `text`, left to right.
    ///
    /// Each search resumes at the end of the previous span. A span that does
    /// not advance the position is still returned so the engine can reject
    /// it, but enumeration stops there.
    #[must_use]
    pub fn spans(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut pos = 0;

        while pos <= text.len() {
            let Some(span) = self.matcher.find_at(text, pos) else {
                break;
            };
            spans.push(span);
            if span.end <= pos || span.is_empty() {
                break;
            }
            pos = span.end;
        }

        spans
    }
}

impl fmt::Debug for ExtractorDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractorDefinition")
            .field("label", &self.label)
            .field("matcher", &self.matcher.describe())
            .finish()
    }
}
