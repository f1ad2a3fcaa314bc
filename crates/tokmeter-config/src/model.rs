// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog configuration model.
//!
//! These structs mirror the on-disk `tokmeter.toml` layout. Provider and
//! tokenizer names stay plain strings at this layer so validation can
//! collect every bad name in one pass and attach a suggestion, instead of
//! failing on the first entry serde happens to reach.

use serde::{Deserialize, Serialize};

/// Top-level tokmeter configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Model catalog contents and merge behavior.
    #[serde(default)]
    pub catalog: CatalogSection,
}

/// The `[catalog]` section: stock-catalog toggle plus extra model entries.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogSection {
    /// Whether the stock catalog is registered before config entries.
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,

    /// Extra model entries. An entry whose id matches an already registered
    /// model replaces it, so config files can reprice stock models.
    #[serde(default)]
    pub models: Vec<CatalogModelEntry>,
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            include_builtin: default_include_builtin(),
            models: Vec::new(),
        }
    }
}

fn default_include_builtin() -> bool {
    true
}

/// One `[[catalog.models]]` entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogModelEntry {
    /// Unique model identifier, e.g. `gpt-4o`.
    pub model_id: String,

    /// Provider name: `openai`, `anthropic`, `google`, or `generic`.
    pub provider: String,

    /// Tokenizer kind: `cl100k_base`, `o200k_base`, `char_heuristic`,
    /// or `whitespace`.
    pub tokenizer_type: String,

    /// Maximum number of tokens the model accepts in one request.
    pub context_length: u32,

    /// USD per 1000 input tokens.
    pub price_per_1k_input: f64,

    /// USD per 1000 output tokens.
    pub price_per_1k_output: f64,
}
