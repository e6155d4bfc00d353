use lexscan_core::ExtractorDefinition;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::builtin;
use crate::patterns::{BuildError, PatternDef};

/// Extractors addressable by name.
pub struct ExtractorRegistry {
    extractors: HashMap<String, ExtractorDefinition>,
}

impl ExtractorRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Registry pre-loaded with the four built-in extractors.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for name in builtin::DEFAULT_ORDER {
            if let Some(extractor) = builtin::by_name(name) {
                registry.extractors.insert(name.to_string(), extractor);
            }
        }
        registry
    }

    /// Register an extractor under `name`.
    ///
    /// # Errors
    /// Returns [`BuildError::DuplicateExtractor`] if the name is taken.
    pub fn register(&mut self, name: &str, extractor: ExtractorDefinition) -> Result<(), BuildError> {
        if self.extractors.contains_key(name) {
            return Err(BuildError::DuplicateExtractor(name.to_string()));
        }
        debug!("Registering extractor: {name} ({})", extractor.label());
        self.extractors.insert(name.to_string(), extractor);
        Ok(())
    }

    /// Compile and register a pattern definition under its own name.
    ///
    /// # Errors
    /// Returns an error if the pattern fails to build or the name is taken.
    pub fn register_pattern(&mut self, def: &PatternDef) -> Result<(), BuildError> {
        let extractor = def.build()?;
        info!("Registering custom pattern: {} -> {}", def.name, def.label);
        self.register(&def.name, extractor)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ExtractorDefinition> {
        self.extractors.get(name)
    }

    /// Look up `names` in order; the result order is the scan priority.
    ///
    /// # Errors
    /// Returns [`BuildError::UnknownExtractor`] for the first unknown name.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<ExtractorDefinition>, BuildError> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name)
                    .cloned()
                    .ok_or_else(|| BuildError::UnknownExtractor(name.to_string()))
            })
            .collect()
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.extractors.keys().cloned().collect();
        names.sort();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexscan_core::EntityKind;

    #[test]
    fn test_with_builtins() {
        let registry = ExtractorRegistry::with_builtins();
        assert_eq!(registry.len(), 4);
        assert_eq!(
            registry.names(),
            vec!["dates_iso8601", "dates_string_month", "integers", "mixed_ordinals"]
        );
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_resolve_preserves_requested_order() {
        let registry = ExtractorRegistry::with_builtins();
        let extractors = registry
            .resolve(&["integers", "mixed_ordinals"])
            .expect("built-in names should resolve");
        let labels: Vec<_> = extractors.iter().map(|e| e.label().clone()).collect();
        assert_eq!(labels, vec![EntityKind::Integer, EntityKind::Ordinal]);
    }

    #[test]
    fn test_resolve_unknown_name() {
        let registry = ExtractorRegistry::with_builtins();
        let err = registry.resolve(&["integers", "roman"]).err();
        assert!(matches!(err, Some(BuildError::UnknownExtractor(ref n)) if n == "roman"));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_register_pattern() {
        let mut registry = ExtractorRegistry::new();
        assert!(registry.is_empty());

        let def = PatternDef::new("percentages", "percent", r"\b\d+(?:\.\d+)?%");
        registry.register_pattern(&def).expect("valid pattern should register");

        let extractor = registry.get("percentages").expect("pattern should be registered");
        assert_eq!(extractor.label(), &EntityKind::Custom("percent".to_string()));
    }

    #[test]
    fn test_register_duplicate_name() {
        let mut registry = ExtractorRegistry::with_builtins();
        let def = PatternDef::new("integers", "integer", r"\d+");
        assert!(matches!(
            registry.register_pattern(&def),
            Err(BuildError::DuplicateExtractor(_))
        ));
    }
}
