// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reporting views over the catalog and batch costing.

use serde::Serialize;

use tokmeter_catalog::ModelRegistry;
use tokmeter_core::error::TokmeterError;
use tokmeter_core::types::{Provider, TokenizerKind};

use crate::counter::{non_negative, TokenCounter};

/// Reporting view of one model's pricing and tokenizer setup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSummary {
    /// Model identifier.
    pub model_id: String,
    /// Vendor owning the model.
    pub provider: Provider,
    /// Tokenizer kind used for counting.
    pub tokenizer_type: TokenizerKind,
    /// Whether counts for this model are exact or approximate.
    pub exact_tokenizer: bool,
    /// Maximum tokens per request.
    pub context_length: u32,
    /// USD per 1000 input tokens.
    pub price_per_1k_input: f64,
    /// USD per 1000 output tokens.
    pub price_per_1k_output: f64,
    /// Cost of a nominal 1000-in/1000-out exchange, for quick comparisons
    /// across models.
    pub sample_cost_1k_in_1k_out: f64,
}

/// Build a summary for `model_id` from the registry.
pub fn model_summary(
    registry: &ModelRegistry,
    model_id: &str,
) -> Result<ModelSummary, TokmeterError> {
    let config = registry.get(model_id)?;
    Ok(ModelSummary {
        model_id: config.model_id.clone(),
        provider: config.provider,
        tokenizer_type: config.tokenizer_type,
        exact_tokenizer: config.tokenizer_type.is_exact(),
        context_length: config.context_length,
        price_per_1k_input: config.price_per_1k_input,
        price_per_1k_output: config.price_per_1k_output,
        sample_cost_1k_in_1k_out: config.price_per_1k_input + config.price_per_1k_output,
    })
}

/// Aggregated tokens and cost for a batch of texts against one model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchCost {
    /// Sum of input tokens across all texts.
    pub total_input_tokens: u64,
    /// Sum of planned output tokens across all texts.
    pub total_output_tokens: u64,
    /// Total estimated USD cost for the batch.
    pub total_cost: f64,
    /// Per-text input token counts, in input order.
    pub input_tokens_per_text: Vec<u64>,
}

/// Cost a batch of texts on `counter`'s model, assuming the same planned
/// output size for each text.
///
/// Each text is counted once. Fails with
/// [`TokmeterError::InvalidArgument`] before counting anything when
/// `output_tokens_each` is negative or the summed output total would
/// overflow.
pub fn batch_cost(
    counter: &TokenCounter<'_>,
    texts: &[&str],
    output_tokens_each: i64,
) -> Result<BatchCost, TokmeterError> {
    let output_each = non_negative(output_tokens_each, "output_tokens_each")?;
    let total_output_tokens = output_each.checked_mul(texts.len() as u64).ok_or_else(|| {
        TokmeterError::InvalidArgument(format!(
            "output_tokens_each {output_each} overflows across {} texts",
            texts.len()
        ))
    })?;

    let mut input_tokens_per_text = Vec::with_capacity(texts.len());
    let mut total_input_tokens = 0u64;
    for text in texts {
        let tokens = counter.count(text) as u64;
        total_input_tokens += tokens;
        input_tokens_per_text.push(tokens);
    }

    Ok(BatchCost {
        total_input_tokens,
        total_output_tokens,
        total_cost: counter.price_tokens(total_input_tokens, total_output_tokens),
        input_tokens_per_text,
    })
}

#[cfg(test)]
mod tests {
    use tokmeter_catalog::ModelConfig;

    use super::*;

    fn test_registry() -> ModelRegistry {
        let mut registry = ModelRegistry::new();
        registry.register(ModelConfig {
            model_id: "word-model".to_string(),
            provider: Provider::Generic,
            tokenizer_type: TokenizerKind::Whitespace,
            context_length: 100,
            price_per_1k_input: 0.01,
            price_per_1k_output: 0.03,
        });
        registry
    }

    #[test]
    fn summary_flags_approximate_tokenizers() {
        let registry = ModelRegistry::builtin();

        let haiku = model_summary(&registry, "claude-3-haiku").expect("stock model");
        assert_eq!(haiku.provider, Provider::Anthropic);
        assert!(!haiku.exact_tokenizer);

        let gpt4o = model_summary(&registry, "gpt-4o").expect("stock model");
        assert!(gpt4o.exact_tokenizer);
        assert!(
            (gpt4o.sample_cost_1k_in_1k_out - 0.02).abs() < 1e-12,
            "0.005 in + 0.015 out"
        );
    }

    #[test]
    fn summary_for_unknown_model_fails() {
        let registry = test_registry();
        let err = model_summary(&registry, "missing").expect_err("should fail");
        assert!(matches!(err, TokmeterError::UnknownModel { .. }));
    }

    #[test]
    fn batch_cost_sums_counts_and_prices_once() {
        let registry = test_registry();
        let counter = TokenCounter::new(&registry, "word-model").expect("model is registered");

        let batch = batch_cost(&counter, &["one two", "three four five"], 10)
            .expect("batch should cost");
        assert_eq!(batch.input_tokens_per_text, [2, 3]);
        assert_eq!(batch.total_input_tokens, 5);
        assert_eq!(batch.total_output_tokens, 20);
        // 5/1000 * 0.01 + 20/1000 * 0.03
        let expected = 0.00005 + 0.0006;
        assert!(
            (batch.total_cost - expected).abs() < 1e-12,
            "expected {expected}, got {}",
            batch.total_cost
        );
    }

    #[test]
    fn empty_batch_costs_nothing() {
        let registry = test_registry();
        let counter = TokenCounter::new(&registry, "word-model").expect("model is registered");
        let batch = batch_cost(&counter, &[], 100).expect("empty batch is valid");
        assert_eq!(batch.total_input_tokens, 0);
        assert_eq!(batch.total_output_tokens, 0);
        assert!(batch.total_cost.abs() < f64::EPSILON);
        assert!(batch.input_tokens_per_text.is_empty());
    }

    #[test]
    fn negative_output_each_rejected_before_counting() {
        let registry = test_registry();
        let counter = TokenCounter::new(&registry, "word-model").expect("model is registered");
        let err = batch_cost(&counter, &["text"], -1).expect_err("negative output should fail");
        assert!(matches!(err, TokmeterError::InvalidArgument(_)));
    }

    /// A per-text output size whose batch total exceeds `u64` is an
    /// argument error, not a wrapping multiply.
    #[test]
    fn output_total_overflow_is_rejected() {
        let registry = test_registry();
        let counter = TokenCounter::new(&registry, "word-model").expect("model is registered");

        let err = batch_cost(&counter, &["a", "b", "c"], i64::MAX)
            .expect_err("overflowing output total should fail");
        assert!(matches!(err, TokmeterError::InvalidArgument(_)));
        assert!(err.to_string().contains("output_tokens_each"));

        // The same size on a single text still fits.
        let single = batch_cost(&counter, &["a"], i64::MAX).expect("single text fits in u64");
        assert_eq!(single.total_output_tokens, i64::MAX as u64);
    }
}
