//! Scan engine: candidate pooling and the left-to-right overlap sweep.
//!
//! Every extractor runs over the full text on its own. Their candidates are
//! pooled, ordered by start offset (ties go to the extractor listed first) and
//! swept once: a candidate is accepted only if it starts at or after the end
//! of the last accepted match.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::extractor::ExtractorDefinition;
use crate::types::{Candidate, Match};

/// Counters for a single scan call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    pub extractors: usize,
    pub candidates: usize,
    pub accepted: usize,
    pub dropped: usize,
}

/// Matches plus the counters that produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub matches: Vec<Match>,
    pub stats: ScanStats,
}

/// Extract every non-overlapping entity from `text`, in document order.
///
/// The order of `extractors` is their priority: when two candidates start at
/// the same offset, the one from the earlier extractor is kept.
///
/// # Panics
/// Panics if an extractor yields an empty or reversed span, or a span that is
/// out of bounds or not on `char` boundaries.
#[must_use]
pub fn scan(text: &str, extractors: &[ExtractorDefinition]) -> Vec<Match> {
    scan_with_stats(text, extractors).matches
}

/// Like [`scan`], also reporting how many candidates were seen and dropped.
#[must_use]
pub fn scan_with_stats(text: &str, extractors: &[ExtractorDefinition]) -> ScanReport {
    if text.is_empty() || extractors.is_empty() {
        return ScanReport {
            matches: Vec::new(),
            stats: ScanStats {
                extractors: extractors.len(),
                ..ScanStats::default()
            },
        };
    }

    let pool = collect_candidates(text, extractors);
    let candidates = pool.len();
    let matches = resolve(text, pool);

    let stats = ScanStats {
        extractors: extractors.len(),
        candidates,
        accepted: matches.len(),
        dropped: candidates - matches.len(),
    };
    debug!(
        "Scanned {} bytes with {} extractors: {} candidates, {} accepted, {} dropped",
        text.len(),
        stats.extractors,
        stats.candidates,
        stats.accepted,
        stats.dropped
    );

    ScanReport { matches, stats }
}

/// Run every extractor over `text` and pool the results.
///
/// Candidates keep the index of their extractor as `priority`. The pool is in
/// extractor order, not document order; [`resolve`] sorts it.
///
/// # Panics
/// Panics on an empty or reversed span, or one that is out of bounds or does
/// not fall on `char` boundaries.
#[must_use]
pub fn collect_candidates(text: &str, extractors: &[ExtractorDefinition]) -> Vec<Candidate> {
    let mut pool = Vec::new();

    for (priority, extractor) in extractors.iter().enumerate() {
        let spans = extractor.spans(text);
        trace!("Extractor {} produced {} candidates", extractor.label(), spans.len());

        for span in spans {
            assert!(
                span.start < span.end,
                "extractor `{}` produced an empty or reversed span {span}",
                extractor.label()
            );
            let Some(slice) = text.get(span.range()) else {
                panic!(
                    "extractor `{}` produced span {span} outside the text or off a char boundary",
                    extractor.label()
                );
            };
            pool.push(Candidate {
                label: extractor.label().clone(),
                span,
                text: slice.to_string(),
                priority,
            });
        }
    }

    pool
}

/// Reduce a candidate pool to ordered, non-overlapping matches.
///
/// # Panics
/// Panics on an empty or reversed span, or when a candidate's text is not the
/// literal substring of `text` at its span.
#[must_use]
pub fn resolve(text: &str, mut pool: Vec<Candidate>) -> Vec<Match> {
    pool.sort_by_key(|c| (c.span.start, c.priority));

    let mut accepted: Vec<Match> = Vec::with_capacity(pool.len());
    let mut frontier = 0;

    for candidate in pool {
        assert!(
            candidate.span.start < candidate.span.end,
            "extractor `{}` produced an empty or reversed span {}",
            candidate.label,
            candidate.span
        );
        assert!(
            text.get(candidate.span.range()) == Some(candidate.text.as_str()),
            "candidate text {:?} does not match the input at {}",
            candidate.text,
            candidate.span
        );

        if candidate.span.start < frontier {
            trace!(
                "Dropping {} {:?} at {}: overlaps accepted match ending at {frontier}",
                candidate.label, candidate.text, candidate.span
            );
            continue;
        }

        frontier = candidate.span.end;
        accepted.push(Match::from(candidate));
    }

    accepted
}

/// An ordered extractor list bound to the engine.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    extractors: Vec<ExtractorDefinition>,
}

impl Scanner {
    #[must_use]
    pub const fn new(extractors: Vec<ExtractorDefinition>) -> Self {
        Self { extractors }
    }

    /// Append an extractor with the lowest priority so far.
    #[must_use]
    pub fn with_extractor(mut self, extractor: ExtractorDefinition) -> Self {
        self.extractors.push(extractor);
        self
    }

    #[must_use]
    pub fn extractors(&self) -> &[ExtractorDefinition] {
        &self.extractors
    }

    #[must_use]
    pub fn scan(&self, text: &str) -> Vec<Match> {
        scan(text, &self.extractors)
    }

    #[must_use]
    pub fn scan_with_stats(&self, text: &str) -> ScanReport {
        scan_with_stats(text, &self.extractors)
    }
}
