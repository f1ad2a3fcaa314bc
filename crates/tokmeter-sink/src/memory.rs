// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory sink for tests and embedding.

use std::sync::Mutex;

use tokmeter_core::{SinkError, UsageRecord, UsageSink};

/// Usage sink that collects records in memory.
///
/// Useful as a recording stub in tests and for embedders that want usage
/// data without a file on disk.
#[derive(Default)]
pub struct MemorySink {
    records: Mutex<Vec<UsageRecord>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records appended so far.
    pub fn records(&self) -> Result<Vec<UsageRecord>, SinkError> {
        let records = self.records.lock().map_err(|_| SinkError::Poisoned)?;
        Ok(records.clone())
    }

    /// Number of records appended so far.
    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// Whether no records have been appended.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UsageSink for MemorySink {
    fn append(&self, record: &UsageRecord) -> Result<(), SinkError> {
        let mut records = self.records.lock().map_err(|_| SinkError::Poisoned)?;
        records.push(record.clone());
        Ok(())
    }
}
