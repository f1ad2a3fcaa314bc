// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text-to-token-count strategy seam.

use crate::types::TokenizerKind;

/// A tokenizer adapter: maps text to a token count for one tokenizer family.
///
/// Implementations must be deterministic: identical text yields an identical
/// count on every call. Whether the count is exact or approximate is carried
/// by [`TokenizerKind::is_exact`] on the reported kind, so callers can always
/// observe which counting mode they got.
pub trait TokenEncoder: Send + Sync {
    /// Count the tokens the model would see for `text`. Empty text is 0.
    fn count(&self, text: &str) -> usize;

    /// The tokenizer family this encoder implements.
    fn kind(&self) -> TokenizerKind;
}
