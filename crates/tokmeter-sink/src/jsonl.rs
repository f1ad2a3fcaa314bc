// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Append-only JSONL usage log.
//!
//! One JSON object per line. All appends go through a single mutex-guarded
//! file handle, so concurrent limit checks serialize their writes and each
//! record lands as one atomic line — never interleaved mid-record.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tokmeter_core::{SinkError, UsageRecord, UsageSink};
use tracing::{debug, warn};

/// File-backed usage sink writing one JSON line per record.
pub struct JsonlSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl JsonlSink {
    /// Open the sink, creating parent directories and the file as needed.
    /// Existing content is preserved; records are only ever appended.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self, SinkError> {
        let path = path.into();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// The path this sink writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UsageSink for JsonlSink {
    fn append(&self, record: &UsageRecord) -> Result<(), SinkError> {
        // Serialize before taking the lock; a single write_all keeps the
        // line atomic even with concurrent writers on other handles.
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = self.file.lock().map_err(|_| SinkError::Poisoned)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;
        debug!(
            model_id = %record.model_id,
            cost = record.cost,
            over_limit = record.over_limit,
            "usage record appended"
        );
        Ok(())
    }
}

/// Read all records back from a JSONL usage log.
///
/// Lines that fail to parse are skipped with a warning so one corrupt line
/// never hides the rest of the log.
pub fn read_records(path: &Path) -> Result<Vec<UsageRecord>, SinkError> {
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match serde_json::from_str(line) {
            Ok(record) => Some(record),
            Err(error) => {
                warn!(%error, "skipping unparseable usage record line");
                None
            }
        })
        .collect())
}
