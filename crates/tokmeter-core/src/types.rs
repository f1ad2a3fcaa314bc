// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common enums shared across the tokmeter workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

/// Vendor owning a model family.
///
/// Ordered derives let provider groupings render deterministically
/// (declaration order) in catalog exports.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    Anthropic,
    Google,
    Generic,
}

/// Tokenizer family used to count tokens for a model.
///
/// A closed set: every model declares exactly one kind, and the kind alone
/// selects the encoder. Model names are never pattern-matched at call time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, VariantNames, Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TokenizerKind {
    /// Exact byte-pair encoding with the cl100k vocabulary (GPT-3.5/GPT-4 era).
    Cl100kBase,
    /// Exact byte-pair encoding with the o200k vocabulary (GPT-4o era).
    O200kBase,
    /// Approximate character-ratio count for vendors without a public tokenizer.
    CharHeuristic,
    /// Whitespace word-split approximation; the fallback of last resort.
    Whitespace,
}

impl TokenizerKind {
    /// Whether counts from this kind are exact or a documented approximation.
    pub fn is_exact(self) -> bool {
        matches!(self, TokenizerKind::Cl100kBase | TokenizerKind::O200kBase)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn provider_wire_names_are_lowercase() {
        assert_eq!(Provider::OpenAi.to_string(), "openai");
        assert_eq!(Provider::Anthropic.to_string(), "anthropic");
        assert_eq!(Provider::Google.to_string(), "google");
        assert_eq!(Provider::Generic.to_string(), "generic");
    }

    #[test]
    fn provider_parses_back_from_wire_name() {
        for provider in [
            Provider::OpenAi,
            Provider::Anthropic,
            Provider::Google,
            Provider::Generic,
        ] {
            let parsed = Provider::from_str(&provider.to_string()).expect("should parse back");
            assert_eq!(provider, parsed);
        }
    }

    #[test]
    fn tokenizer_kind_wire_names_are_snake_case() {
        assert_eq!(TokenizerKind::Cl100kBase.to_string(), "cl100k_base");
        assert_eq!(TokenizerKind::O200kBase.to_string(), "o200k_base");
        assert_eq!(TokenizerKind::CharHeuristic.to_string(), "char_heuristic");
        assert_eq!(TokenizerKind::Whitespace.to_string(), "whitespace");
    }

    #[test]
    fn tokenizer_kind_serde_matches_strum() {
        let json = serde_json::to_string(&TokenizerKind::Cl100kBase).expect("should serialize");
        assert_eq!(json, "\"cl100k_base\"");
        let parsed: TokenizerKind =
            serde_json::from_str("\"char_heuristic\"").expect("should deserialize");
        assert_eq!(parsed, TokenizerKind::CharHeuristic);
    }

    #[test]
    fn variant_name_lists_match_wire_names() {
        assert_eq!(
            Provider::VARIANTS,
            ["openai", "anthropic", "google", "generic"]
        );
        assert_eq!(
            TokenizerKind::VARIANTS,
            ["cl100k_base", "o200k_base", "char_heuristic", "whitespace"]
        );
    }

    #[test]
    fn exactness_split() {
        assert!(TokenizerKind::Cl100kBase.is_exact());
        assert!(TokenizerKind::O200kBase.is_exact());
        assert!(!TokenizerKind::CharHeuristic.is_exact());
        assert!(!TokenizerKind::Whitespace.is_exact());
    }
}
