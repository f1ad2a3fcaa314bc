// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Token counting, cost estimation, and usage limits for LLM API text.
//!
//! The entry points are [`ModelRegistry`] (which models exist, how they
//! tokenize, what they cost) and [`TokenCounter`] (counting and costing
//! against one registered model). Counters optionally carry a token limit,
//! an alert handler fired when a check exceeds it, and a usage sink that
//! receives one append-only record per check.
//!
//! ```
//! use tokmeter::{ModelRegistry, TokenCounter};
//!
//! # fn main() -> Result<(), tokmeter::TokmeterError> {
//! let registry = ModelRegistry::builtin();
//! let counter = TokenCounter::new(&registry, "gpt-4o")?;
//!
//! let tokens = counter.count("How many tokens is this?");
//! let cost = counter.estimate_cost("How many tokens is this?", 256)?;
//! println!("{tokens} tokens, about ${cost:.6}");
//! # Ok(())
//! # }
//! ```
//!
//! Catalog contents can also come from `tokmeter.toml` via
//! [`load_registry`], which layers TOML files and `TOKMETER_*` environment
//! variables and validates every entry before returning.

pub mod counter;
pub mod limit;
pub mod summary;

pub use counter::TokenCounter;
pub use limit::LimitMonitor;
pub use summary::{batch_cost, model_summary, BatchCost, ModelSummary};

pub use tokmeter_catalog::{
    builtin_models, catalog_export, catalog_export_json, ModelConfig, ModelRegistry,
};
pub use tokmeter_config::{
    load_registry, load_registry_from_str, render_errors, CatalogConfig, CatalogError,
};
pub use tokmeter_core::error::{SinkError, TokmeterError};
pub use tokmeter_core::record::UsageRecord;
pub use tokmeter_core::traits::{LimitAlert, TokenEncoder, UsageSink};
pub use tokmeter_core::types::{Provider, TokenizerKind};
pub use tokmeter_sink::{read_records, JsonlSink, MemorySink};
pub use tokmeter_tokenizers::{encoder_for, validate_adapters};
