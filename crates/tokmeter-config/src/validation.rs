// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Semantic validation of deserialized catalog configuration.
//!
//! Figment and serde catch structural problems (unknown keys, wrong types);
//! this pass catches semantic ones: unknown provider or tokenizer names,
//! empty ids, zero context windows, negative prices. All problems are
//! collected so the user sees every mistake in one run.

use std::str::FromStr;

use strum::VariantNames;

use tokmeter_catalog::ModelConfig;
use tokmeter_core::types::{Provider, TokenizerKind};

use crate::diagnostic::{suggest_name, CatalogError};
use crate::model::CatalogConfig;

/// Validate a catalog config without building anything.
///
/// Returns all collected errors rather than failing on the first.
pub fn validate_catalog(config: &CatalogConfig) -> Result<(), Vec<CatalogError>> {
    resolve_models(config).map(|_| ())
}

/// Resolve every `[[catalog.models]]` entry into a typed [`ModelConfig`].
///
/// String-typed provider and tokenizer names are parsed here; failures get a
/// fuzzy-match suggestion. Entries come back in file order so registration
/// order matches the config file.
pub fn resolve_models(config: &CatalogConfig) -> Result<Vec<ModelConfig>, Vec<CatalogError>> {
    let mut errors = Vec::new();
    let mut models = Vec::new();

    for entry in &config.catalog.models {
        let mut entry_ok = true;

        // Validate model id
        if entry.model_id.trim().is_empty() {
            errors.push(CatalogError::Validation {
                message: "catalog.models entries must have a non-empty model_id".to_string(),
            });
            entry_ok = false;
        }

        // Resolve provider name
        let provider = match Provider::from_str(&entry.provider) {
            Ok(provider) => Some(provider),
            Err(_) => {
                errors.push(CatalogError::UnknownProvider {
                    model_id: entry.model_id.clone(),
                    value: entry.provider.clone(),
                    suggestion: suggest_name(&entry.provider, Provider::VARIANTS),
                    valid: Provider::VARIANTS.join(", "),
                });
                entry_ok = false;
                None
            }
        };

        // Resolve tokenizer name
        let tokenizer_type = match TokenizerKind::from_str(&entry.tokenizer_type) {
            Ok(kind) => Some(kind),
            Err(_) => {
                errors.push(CatalogError::UnknownTokenizer {
                    model_id: entry.model_id.clone(),
                    value: entry.tokenizer_type.clone(),
                    suggestion: suggest_name(&entry.tokenizer_type, TokenizerKind::VARIANTS),
                    valid: TokenizerKind::VARIANTS.join(", "),
                });
                entry_ok = false;
                None
            }
        };

        // Validate context window
        if entry.context_length == 0 {
            errors.push(CatalogError::Validation {
                message: format!("model `{}`: context_length must be positive", entry.model_id),
            });
            entry_ok = false;
        }

        // Validate prices
        for (field, value) in [
            ("price_per_1k_input", entry.price_per_1k_input),
            ("price_per_1k_output", entry.price_per_1k_output),
        ] {
            if !value.is_finite() || value < 0.0 {
                errors.push(CatalogError::Validation {
                    message: format!(
                        "model `{}`: {field} must be a non-negative number, got {value}",
                        entry.model_id
                    ),
                });
                entry_ok = false;
            }
        }

        if entry_ok
            && let (Some(provider), Some(tokenizer_type)) = (provider, tokenizer_type)
        {
            models.push(ModelConfig {
                model_id: entry.model_id.clone(),
                provider,
                tokenizer_type,
                context_length: entry.context_length,
                price_per_1k_input: entry.price_per_1k_input,
                price_per_1k_output: entry.price_per_1k_output,
            });
        }
    }

    if errors.is_empty() {
        Ok(models)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CatalogModelEntry, CatalogSection};

    fn entry(model_id: &str, provider: &str, tokenizer: &str) -> CatalogModelEntry {
        CatalogModelEntry {
            model_id: model_id.to_string(),
            provider: provider.to_string(),
            tokenizer_type: tokenizer.to_string(),
            context_length: 8192,
            price_per_1k_input: 0.001,
            price_per_1k_output: 0.002,
        }
    }

    fn config_with(models: Vec<CatalogModelEntry>) -> CatalogConfig {
        CatalogConfig {
            catalog: CatalogSection {
                include_builtin: false,
                models,
            },
        }
    }

    #[test]
    fn valid_entry_resolves_to_typed_config() {
        let config = config_with(vec![entry("my-model", "openai", "cl100k_base")]);
        let models = resolve_models(&config).expect("entry should resolve");
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].provider, Provider::OpenAi);
        assert_eq!(models[0].tokenizer_type, TokenizerKind::Cl100kBase);
    }

    #[test]
    fn unknown_provider_gets_suggestion() {
        let config = config_with(vec![entry("my-model", "anthropi", "whitespace")]);
        let errors = resolve_models(&config).expect_err("bad provider should fail");
        assert_eq!(errors.len(), 1);
        match &errors[0] {
            CatalogError::UnknownProvider {
                model_id,
                suggestion,
                ..
            } => {
                assert_eq!(model_id, "my-model");
                assert_eq!(suggestion.as_deref(), Some("anthropic"));
            }
            other => panic!("expected UnknownProvider, got {other:?}"),
        }
    }

    #[test]
    fn all_problems_are_collected_in_one_pass() {
        let mut bad = entry("", "nobody", "morse_code");
        bad.context_length = 0;
        bad.price_per_1k_input = -1.0;
        let config = config_with(vec![bad]);

        let errors = resolve_models(&config).expect_err("entry should fail validation");
        // empty id, bad provider, bad tokenizer, zero context, negative price
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn entries_keep_file_order() {
        let config = config_with(vec![
            entry("first", "generic", "whitespace"),
            entry("second", "google", "char_heuristic"),
        ]);
        let models = resolve_models(&config).expect("entries should resolve");
        let ids: Vec<&str> = models.iter().map(|m| m.model_id.as_str()).collect();
        assert_eq!(ids, ["first", "second"]);
    }

    #[test]
    fn non_finite_price_is_rejected() {
        let mut bad = entry("my-model", "openai", "o200k_base");
        bad.price_per_1k_output = f64::NAN;
        let config = config_with(vec![bad]);
        let errors = resolve_models(&config).expect_err("NaN price should fail");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("validation error"));
    }
}
