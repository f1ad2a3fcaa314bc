// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model registry keyed by model id.
//!
//! The registry is populated once at startup and treated as read-only
//! afterward: counters borrow it immutably, so the borrow checker rules out
//! registration racing with lookups. Listing preserves registration order.

use std::collections::{BTreeMap, HashMap};

use tokmeter_core::{Provider, TokmeterError};
use tracing::debug;

use crate::model::ModelConfig;

/// Catalog of model configurations, keyed by `model_id`.
///
/// `register` inserts or replaces; a replaced model keeps its original
/// position in the listing order. Lookups of unknown ids always fail —
/// there is no fallback configuration.
#[derive(Debug)]
pub struct ModelRegistry {
    entries: HashMap<String, ModelConfig>,
    /// First-registration order of model ids, for stable listing.
    order: Vec<String>,
}

impl ModelRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create a registry pre-populated with the stock catalog.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for config in crate::builtin::builtin_models() {
            registry.register(config);
        }
        registry
    }

    /// Insert or replace the entry for `config.model_id`.
    pub fn register(&mut self, config: ModelConfig) {
        let model_id = config.model_id.clone();
        let replaced = self.entries.insert(model_id.clone(), config).is_some();
        debug!(model_id = %model_id, replaced, "model registered");
        if !replaced {
            self.order.push(model_id);
        }
    }

    /// Look up a model's configuration.
    pub fn get(&self, model_id: &str) -> Result<&ModelConfig, TokmeterError> {
        self.entries
            .get(model_id)
            .ok_or_else(|| TokmeterError::UnknownModel {
                model_id: model_id.to_string(),
            })
    }

    /// Whether a model id is registered.
    pub fn contains(&self, model_id: &str) -> bool {
        self.entries.contains_key(model_id)
    }

    /// All registered model ids, in registration order.
    pub fn list_models(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// Model ids grouped by provider, each group in registration order.
    pub fn group_by_provider(&self) -> BTreeMap<Provider, Vec<&str>> {
        let mut groups: BTreeMap<Provider, Vec<&str>> = BTreeMap::new();
        for config in self.iter() {
            groups
                .entry(config.provider)
                .or_default()
                .push(config.model_id.as_str());
        }
        groups
    }

    /// Iterate configurations in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ModelConfig> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    /// Returns the number of registered models.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no models are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use tokmeter_core::TokenizerKind;

    use super::*;

    fn test_config(model_id: &str, provider: Provider, price_in: f64) -> ModelConfig {
        ModelConfig {
            model_id: model_id.to_string(),
            provider,
            tokenizer_type: TokenizerKind::Whitespace,
            context_length: 8192,
            price_per_1k_input: price_in,
            price_per_1k_output: price_in * 3.0,
        }
    }

    #[test]
    fn register_and_get_roundtrip() {
        let mut registry = ModelRegistry::new();
        registry.register(test_config("test-model", Provider::Generic, 0.01));

        let config = registry.get("test-model").unwrap();
        assert_eq!(config.model_id, "test-model");
        assert_eq!(config.provider, Provider::Generic);
    }

    #[test]
    fn get_unknown_model_fails() {
        let registry = ModelRegistry::new();
        let err = registry.get("never-registered").unwrap_err();
        assert!(matches!(err, TokmeterError::UnknownModel { .. }));
        assert!(err.to_string().contains("never-registered"));
    }

    #[test]
    fn reregistration_replaces_config() {
        let mut registry = ModelRegistry::new();
        registry.register(test_config("dupe", Provider::Generic, 0.01));
        registry.register(test_config("dupe", Provider::OpenAi, 0.99));

        assert_eq!(registry.len(), 1);
        let config = registry.get("dupe").unwrap();
        assert_eq!(config.provider, Provider::OpenAi);
        assert!((config.price_per_1k_input - 0.99).abs() < f64::EPSILON);
    }

    #[test]
    fn list_models_in_registration_order() {
        let mut registry = ModelRegistry::new();
        registry.register(test_config("zebra", Provider::Generic, 0.01));
        registry.register(test_config("alpha", Provider::Generic, 0.01));
        registry.register(test_config("middle", Provider::Generic, 0.01));

        assert_eq!(registry.list_models(), vec!["zebra", "alpha", "middle"]);
        // Stable across calls.
        assert_eq!(registry.list_models(), vec!["zebra", "alpha", "middle"]);
    }

    #[test]
    fn reregistration_keeps_first_position() {
        let mut registry = ModelRegistry::new();
        registry.register(test_config("first", Provider::Generic, 0.01));
        registry.register(test_config("second", Provider::Generic, 0.01));
        registry.register(test_config("first", Provider::OpenAi, 0.5));

        assert_eq!(registry.list_models(), vec!["first", "second"]);
        assert_eq!(registry.get("first").unwrap().provider, Provider::OpenAi);
    }

    #[test]
    fn group_by_provider_preserves_registration_order_within_groups() {
        let mut registry = ModelRegistry::new();
        registry.register(test_config("o-2", Provider::OpenAi, 0.01));
        registry.register(test_config("a-1", Provider::Anthropic, 0.01));
        registry.register(test_config("o-1", Provider::OpenAi, 0.01));

        let groups = registry.group_by_provider();
        assert_eq!(groups[&Provider::OpenAi], vec!["o-2", "o-1"]);
        assert_eq!(groups[&Provider::Anthropic], vec!["a-1"]);
        assert!(!groups.contains_key(&Provider::Google));
    }

    #[test]
    fn len_and_is_empty() {
        let mut registry = ModelRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);

        registry.register(test_config("one", Provider::Generic, 0.01));
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 1);
    }

    /// The registry is `Debug` so test assertions (`unwrap_err`,
    /// `expect_err`) can print it on failure.
    #[test]
    fn debug_format_names_registered_models() {
        let mut registry = ModelRegistry::new();
        registry.register(test_config("printable", Provider::Generic, 0.01));

        let rendered = format!("{registry:?}");
        assert!(
            rendered.contains("printable"),
            "missing model id in {rendered}"
        );
    }
}
