#![warn(
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

//! Extractor definitions for the lexscan engine.
//!
//! Built-in extractors for ordinals, integers and dates, the regex matcher
//! they are built on, and a registry that also accepts patterns from config.

pub mod builtin;
pub mod matcher;
pub mod patterns;
mod registry;

pub use builtin::{
    DEFAULT_ORDER, all, builtin_defs, dates_iso8601, dates_string_month, integers, mixed_ordinals,
};
pub use matcher::RegexMatcher;
pub use patterns::{BuildError, PatternDef};
pub use registry::ExtractorRegistry;
