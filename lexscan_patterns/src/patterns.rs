//! Serializable pattern definitions.
//!
//! A [`PatternDef`] is the configuration form of a regex extractor. Built-in
//! extractors are defined the same way, so user patterns loaded from config go
//! through exactly the same compilation and checks.

use lexscan_core::{EntityKind, ExtractorDefinition};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::matcher::RegexMatcher;

/// Error type for pattern building and extractor lookup.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The pattern or its guard is not a valid regex.
    #[error("invalid regex in pattern `{name}`: {source}")]
    Regex {
        name: String,
        #[source]
        source: regex::Error,
    },

    /// The pattern can match the empty string.
    #[error("pattern `{0}` matches the empty string")]
    MatchesEmpty(String),

    /// No extractor is registered under this name.
    #[error("unknown extractor: {0}")]
    UnknownExtractor(String),

    /// An extractor is already registered under this name.
    #[error("extractor already registered: {0}")]
    DuplicateExtractor(String),
}

/// Definition of a single regex extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDef {
    /// Registry name, e.g. `integers`.
    pub name: String,

    /// Entity kind attached to every match.
    pub label: String,

    /// Regex matched against the text.
    pub pattern: String,

    /// Anchored regex that must not match right after a candidate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_followed_by: Option<String>,
}

impl PatternDef {
    #[must_use]
    pub fn new(name: &str, label: &str, pattern: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            pattern: pattern.to_string(),
            not_followed_by: None,
        }
    }

    #[must_use]
    pub fn with_guard(mut self, not_followed_by: &str) -> Self {
        self.not_followed_by = Some(not_followed_by.to_string());
        self
    }

    #[must_use]
    pub fn kind(&self) -> EntityKind {
        EntityKind::from(self.label.as_str())
    }

    /// Compile into an extractor.
    ///
    /// # Errors
    /// Returns an error if the pattern or guard is not a valid regex, or if
    /// the pattern matches the empty string.
    pub fn build(&self) -> Result<ExtractorDefinition, BuildError> {
        Ok(ExtractorDefinition::new(self.kind(), self.compile()?))
    }

    /// Compile into a bare matcher.
    ///
    /// # Errors
    /// Same conditions as [`PatternDef::build`].
    pub fn compile(&self) -> Result<RegexMatcher, BuildError> {
        let regex = self.regex(&self.pattern)?;
        if regex.is_match("") {
            return Err(BuildError::MatchesEmpty(self.name.clone()));
        }

        let mut matcher = RegexMatcher::new(regex);
        if let Some(guard) = &self.not_followed_by {
            matcher = matcher.not_followed_by(self.regex(guard)?);
        }
        Ok(matcher)
    }

    fn regex(&self, pattern: &str) -> Result<Regex, BuildError> {
        Regex::new(pattern).map_err(|source| BuildError::Regex {
            name: self.name.clone(),
            source,
        })
    }
}
