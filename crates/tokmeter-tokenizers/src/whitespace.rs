// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Whitespace word-split fallback.

use tokmeter_core::{TokenEncoder, TokenizerKind};

/// The fallback of last resort: one token per whitespace-separated word.
///
/// Crude even by heuristic standards (real tokenizers split inside words
/// and merge punctuation); only generic models with no closer match use
/// it, and selection is observable through the reported kind.
pub struct WhitespaceEncoder;

impl TokenEncoder for WhitespaceEncoder {
    fn count(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }

    fn kind(&self) -> TokenizerKind {
        TokenizerKind::Whitespace
    }
}
