// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Character-ratio token estimation.

use tokmeter_core::{TokenEncoder, TokenizerKind};

/// Characters of typical prose per token. Tracks English text within
/// roughly ±20%; dense code or CJK text can deviate further.
const CHARS_PER_TOKEN: usize = 4;

/// Approximate encoder for vendors whose exact tokenizer is not published
/// (Anthropic, Google).
///
/// Counts `ceil(chars / 4)`. These are estimates, not billing figures;
/// callers can detect the approximation via
/// [`TokenizerKind::is_exact`] on the reported kind.
pub struct CharHeuristicEncoder;

impl TokenEncoder for CharHeuristicEncoder {
    fn count(&self, text: &str) -> usize {
        text.chars().count().div_ceil(CHARS_PER_TOKEN)
    }

    fn kind(&self) -> TokenizerKind {
        TokenizerKind::CharHeuristic
    }
}
