// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Exact byte-pair encoders backed by tiktoken vocabularies.
//!
//! Vocabulary construction is expensive, so each encoder is built once per
//! process behind a `OnceLock` and shared. A failed build is cached too and
//! surfaces as `TokenizerUnavailable` on every resolution attempt, which
//! startup validation turns into a fatal configuration error.

use std::sync::OnceLock;

use tiktoken_rs::CoreBPE;
use tokmeter_core::{TokenEncoder, TokenizerKind, TokmeterError};

static CL100K: OnceLock<Result<Cl100kEncoder, String>> = OnceLock::new();
static O200K: OnceLock<Result<O200kEncoder, String>> = OnceLock::new();

/// Exact encoder over the cl100k vocabulary (GPT-3.5/GPT-4 era models).
pub struct Cl100kEncoder {
    bpe: CoreBPE,
}

impl Cl100kEncoder {
    /// The shared process-wide instance.
    pub fn shared() -> Result<&'static Self, TokmeterError> {
        CL100K
            .get_or_init(|| {
                tiktoken_rs::cl100k_base()
                    .map(|bpe| Self { bpe })
                    .map_err(|e| e.to_string())
            })
            .as_ref()
            .map_err(|reason| TokmeterError::TokenizerUnavailable {
                kind: TokenizerKind::Cl100kBase,
                reason: reason.clone(),
            })
    }
}

impl TokenEncoder for Cl100kEncoder {
    fn count(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        self.bpe.encode_ordinary(text).len()
    }

    fn kind(&self) -> TokenizerKind {
        TokenizerKind::Cl100kBase
    }
}

/// Exact encoder over the o200k vocabulary (GPT-4o era models).
pub struct O200kEncoder {
    bpe: CoreBPE,
}

impl O200kEncoder {
    /// The shared process-wide instance.
    pub fn shared() -> Result<&'static Self, TokmeterError> {
        O200K
            .get_or_init(|| {
                tiktoken_rs::o200k_base()
                    .map(|bpe| Self { bpe })
                    .map_err(|e| e.to_string())
            })
            .as_ref()
            .map_err(|reason| TokmeterError::TokenizerUnavailable {
                kind: TokenizerKind::O200kBase,
                reason: reason.clone(),
            })
    }
}

impl TokenEncoder for O200kEncoder {
    fn count(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        self.bpe.encode_ordinary(text).len()
    }

    fn kind(&self) -> TokenizerKind {
        TokenizerKind::O200kBase
    }
}
