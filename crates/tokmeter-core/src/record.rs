// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Usage records emitted to sinks after limit evaluations.

use serde::{Deserialize, Serialize};

/// One persisted entry describing a single counting/cost/limit evaluation.
///
/// Append-only: records are never updated or deleted once written. Field
/// names are stable; downstream log tooling parses them by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Unique record identifier (UUID v4).
    pub id: String,
    /// ISO 8601 UTC timestamp of the evaluation.
    pub timestamp: String,
    /// Model the text was counted against.
    pub model_id: String,
    /// Input token count for the evaluated text.
    pub input_tokens: u64,
    /// Planned output tokens, when the caller supplied them. Omitted from
    /// serialized records when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_tokens: Option<u64>,
    /// Estimated cost in USD for the recorded tokens.
    pub cost: f64,
    /// Whether a configured limit was exceeded by this evaluation.
    pub over_limit: bool,
}

impl UsageRecord {
    /// Create a new record with a fresh id and the current UTC timestamp.
    pub fn new(
        model_id: String,
        input_tokens: u64,
        output_tokens: Option<u64>,
        cost: f64,
        over_limit: bool,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now()
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
            model_id,
            input_tokens,
            output_tokens,
            cost,
            over_limit,
        }
    }
}
