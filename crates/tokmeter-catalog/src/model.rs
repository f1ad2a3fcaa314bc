// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-model configuration entries.

use serde::{Deserialize, Serialize};
use tokmeter_core::{Provider, TokenizerKind};

/// Configuration for one supported model.
///
/// Pure data: the catalog performs no tokenization or pricing computation.
/// Serialized field names are stable — downstream comparison tooling parses
/// catalog exports by name, so renames are breaking changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Unique model identifier, e.g. `gpt-4o` or `claude-sonnet-4`.
    pub model_id: String,
    /// Vendor owning the model.
    pub provider: Provider,
    /// Tokenizer family used to count tokens for this model.
    pub tokenizer_type: TokenizerKind,
    /// Maximum tokens (input + output) the model accepts.
    pub context_length: u32,
    /// USD per 1000 input tokens.
    pub price_per_1k_input: f64,
    /// USD per 1000 output tokens.
    pub price_per_1k_output: f64,
}
