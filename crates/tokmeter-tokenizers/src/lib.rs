// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tokenizer adapters for the tokmeter workspace.
//!
//! One encoder per [`tokmeter_core::TokenizerKind`]: exact byte-pair
//! encoders over the tiktoken vocabularies, a character-ratio heuristic for
//! vendors without a public tokenizer, and a whitespace fallback. The
//! dispatch table in [`dispatch`] is the only place kinds map to encoders.

pub mod bpe;
pub mod dispatch;
pub mod heuristic;
pub mod whitespace;

pub use bpe::{Cl100kEncoder, O200kEncoder};
pub use dispatch::{encoder_for, validate_adapters};
pub use heuristic::CharHeuristicEncoder;
pub use whitespace::WhitespaceEncoder;
