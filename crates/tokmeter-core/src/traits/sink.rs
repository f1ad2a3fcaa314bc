// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Append-only usage recording seam.

use crate::error::SinkError;
use crate::record::UsageRecord;

/// Append-only recorder of usage events.
///
/// Contract: `append` writes the record as one atomic unit or fails; a
/// failure must never corrupt previously written records. Callers treat
/// failures as non-fatal — the counting result is returned regardless and
/// the failure is surfaced as a warning.
pub trait UsageSink: Send + Sync {
    /// Append one record. Best effort, no retry.
    fn append(&self, record: &UsageRecord) -> Result<(), SinkError>;
}
