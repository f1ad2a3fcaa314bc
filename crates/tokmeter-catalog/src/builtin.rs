// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stock model catalog.
//!
//! Prices are USD per 1000 tokens, checked against the public OpenAI,
//! Anthropic, and Google price pages. Anthropic and Google models use the
//! character-ratio heuristic because their exact tokenizers are not
//! published; their counts and costs are approximate by contract.

use tokmeter_core::{Provider, TokenizerKind};

use crate::model::ModelConfig;

fn model(
    model_id: &str,
    provider: Provider,
    tokenizer_type: TokenizerKind,
    context_length: u32,
    price_per_1k_input: f64,
    price_per_1k_output: f64,
) -> ModelConfig {
    ModelConfig {
        model_id: model_id.to_string(),
        provider,
        tokenizer_type,
        context_length,
        price_per_1k_input,
        price_per_1k_output,
    }
}

/// The stock catalog, in the order models are registered.
pub fn builtin_models() -> Vec<ModelConfig> {
    use Provider::{Anthropic, Google, OpenAi};
    use TokenizerKind::{CharHeuristic, Cl100kBase, O200kBase};

    vec![
        model("gpt-3.5-turbo", OpenAi, Cl100kBase, 16_385, 0.0005, 0.0015),
        model("gpt-4-turbo", OpenAi, Cl100kBase, 128_000, 0.01, 0.03),
        model("gpt-4o", OpenAi, O200kBase, 128_000, 0.005, 0.015),
        model("gpt-4o-mini", OpenAi, O200kBase, 128_000, 0.000_15, 0.0006),
        model("gpt-4.1", OpenAi, O200kBase, 1_047_576, 0.002, 0.008),
        model("gpt-4.1-mini", OpenAi, O200kBase, 1_047_576, 0.0004, 0.0016),
        model("gpt-4.1-nano", OpenAi, O200kBase, 1_047_576, 0.0001, 0.0004),
        model(
            "claude-3-haiku",
            Anthropic,
            CharHeuristic,
            200_000,
            0.000_25,
            0.001_25,
        ),
        model(
            "claude-3-sonnet",
            Anthropic,
            CharHeuristic,
            200_000,
            0.003,
            0.015,
        ),
        model(
            "claude-3-7-sonnet",
            Anthropic,
            CharHeuristic,
            200_000,
            0.003,
            0.015,
        ),
        model(
            "claude-sonnet-4",
            Anthropic,
            CharHeuristic,
            200_000,
            0.003,
            0.015,
        ),
        model(
            "claude-opus-4",
            Anthropic,
            CharHeuristic,
            200_000,
            0.015,
            0.075,
        ),
        model(
            "gemini-1.5-pro",
            Google,
            CharHeuristic,
            2_097_152,
            0.001_25,
            0.005,
        ),
        model(
            "gemini-1.5-flash",
            Google,
            CharHeuristic,
            1_048_576,
            0.000_075,
            0.0003,
        ),
    ]
}
