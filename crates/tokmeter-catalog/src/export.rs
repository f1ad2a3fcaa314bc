// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog export for downstream comparison tooling.
//!
//! Exports are a flat sequence of model configurations in registration
//! order. Field names come from [`ModelConfig`] and are stable across
//! versions.

use crate::model::ModelConfig;
use crate::registry::ModelRegistry;

/// Snapshot the registry as a sequence of configuration records.
pub fn catalog_export(registry: &ModelRegistry) -> Vec<ModelConfig> {
    registry.iter().cloned().collect()
}

/// Render the catalog as pretty-printed JSON.
pub fn catalog_export_json(registry: &ModelRegistry) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&catalog_export(registry))
}
