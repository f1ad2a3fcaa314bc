// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Closed kind-to-encoder dispatch.
//!
//! The tokenizer kind on a model's catalog entry deterministically selects
//! exactly one encoder through the fixed table below. Model names are never
//! pattern-matched at call time.

use tokmeter_catalog::ModelRegistry;
use tokmeter_core::{TokenEncoder, TokenizerKind, TokmeterError};
use tracing::debug;

use crate::bpe::{Cl100kEncoder, O200kEncoder};
use crate::heuristic::CharHeuristicEncoder;
use crate::whitespace::WhitespaceEncoder;

static CHAR_HEURISTIC: CharHeuristicEncoder = CharHeuristicEncoder;
static WHITESPACE: WhitespaceEncoder = WhitespaceEncoder;

/// Resolve a tokenizer kind to its encoder.
///
/// BPE kinds build (or reuse) their shared vocabulary here, so resolution
/// fails fast with `TokenizerUnavailable` if a vocabulary cannot load.
pub fn encoder_for(kind: TokenizerKind) -> Result<&'static dyn TokenEncoder, TokmeterError> {
    match kind {
        TokenizerKind::Cl100kBase => Ok(Cl100kEncoder::shared()?),
        TokenizerKind::O200kBase => Ok(O200kEncoder::shared()?),
        TokenizerKind::CharHeuristic => Ok(&CHAR_HEURISTIC),
        TokenizerKind::Whitespace => Ok(&WHITESPACE),
    }
}

/// Startup validation: every kind declared in the registry resolves to a
/// live encoder.
///
/// Run this after the registry is finalized and before counters are built;
/// a failure here is a configuration-integrity error, not a per-call
/// condition.
pub fn validate_adapters(registry: &ModelRegistry) -> Result<(), TokmeterError> {
    for config in registry.iter() {
        let encoder = encoder_for(config.tokenizer_type)?;
        debug!(
            model_id = %config.model_id,
            kind = %encoder.kind(),
            "tokenizer adapter resolved"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_resolves_to_its_own_encoder() {
        for kind in [
            TokenizerKind::Cl100kBase,
            TokenizerKind::O200kBase,
            TokenizerKind::CharHeuristic,
            TokenizerKind::Whitespace,
        ] {
            let encoder = encoder_for(kind).unwrap();
            assert_eq!(encoder.kind(), kind);
        }
    }

    #[test]
    fn builtin_catalog_passes_validation() {
        let registry = ModelRegistry::builtin();
        assert!(validate_adapters(&registry).is_ok());
    }

    #[test]
    fn empty_registry_passes_validation() {
        let registry = ModelRegistry::new();
        assert!(validate_adapters(&registry).is_ok());
    }
}
