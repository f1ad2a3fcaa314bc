// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model catalog for the tokmeter workspace.
//!
//! Maps model ids to their provider, tokenizer kind, context length, and
//! per-1000-token prices. The catalog is configuration data: populated once
//! at startup (stock catalog, optionally extended from config files) and
//! read-only afterward.

pub mod builtin;
pub mod export;
pub mod model;
pub mod registry;

pub use builtin::builtin_models;
pub use export::{catalog_export, catalog_export_json};
pub use model::ModelConfig;
pub use registry::ModelRegistry;
