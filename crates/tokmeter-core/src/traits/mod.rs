// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between the counting core and its collaborators.
//!
//! Everything here is synchronous: counting is pure computation, sink
//! appends are bounded file writes, and alerts run on the caller's thread.

pub mod alert;
pub mod encoder;
pub mod sink;

pub use alert::LimitAlert;
pub use encoder::TokenEncoder;
pub use sink::UsageSink;
