// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the tokmeter workspace.

use thiserror::Error;

use crate::types::TokenizerKind;

/// The primary error type for catalog lookups, counting, and cost operations.
#[derive(Debug, Error)]
pub enum TokmeterError {
    /// Model id not present in the registry. Never defaulted to a stand-in model.
    #[error("unknown model: {model_id}")]
    UnknownModel { model_id: String },

    /// Caller passed a value outside the operation's domain (negative token
    /// counts, non-finite prices).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Remaining-token query on a counter that has no limit configured.
    #[error("no token limit configured for model {model_id}")]
    NoLimitConfigured { model_id: String },

    /// A declared tokenizer kind could not be backed by a working encoder.
    /// Configuration-integrity failure; surfaced by startup validation.
    #[error("tokenizer {kind} unavailable: {reason}")]
    TokenizerUnavailable {
        kind: TokenizerKind,
        reason: String,
    },

    /// Catalog configuration errors (invalid TOML, bad values, unparseable names).
    #[error("configuration error: {0}")]
    Config(String),
}

/// Error raised by a usage sink append.
///
/// Kept separate from [`TokmeterError`] because sink failures are non-fatal:
/// the caller's count/cost result is still returned and the failure is only
/// reported as a warning.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Underlying file or device write failed.
    #[error("sink write failed: {0}")]
    Io(#[from] std::io::Error),

    /// Record could not be serialized for persistence.
    #[error("sink serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writer lock was poisoned by a panicked thread.
    #[error("sink writer lock poisoned")]
    Poisoned,
}
