// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Usage sinks for the tokmeter workspace.
//!
//! Implementations of the [`tokmeter_core::UsageSink`] boundary: a JSONL
//! file sink for persistence and an in-memory sink for tests. Sink failures
//! are non-fatal by contract — callers log them and keep their results.

pub mod jsonl;
pub mod memory;

pub use jsonl::{read_records, JsonlSink};
pub use memory::MemorySink;
