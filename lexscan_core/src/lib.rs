#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Scan engine for typed lexical entities.
//!
//! Extractors are independent `label + matcher` pairs. The engine runs every
//! extractor over the whole text, pools the candidates and sweeps them left to
//! right so the result is one non-overlapping sequence in document order.

pub mod engine;
pub mod extractor;
pub mod types;

pub use engine::{ScanReport, ScanStats, Scanner, collect_candidates, resolve, scan, scan_with_stats};
pub use extractor::{ExtractorDefinition, TextMatcher};
pub use types::{Candidate, EntityKind, Match, Span};
