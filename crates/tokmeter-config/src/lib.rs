// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog configuration for tokmeter.
//!
//! Provides TOML catalog parsing with strict validation (`deny_unknown_fields`),
//! XDG file hierarchy lookup, environment variable overrides, and diagnostic
//! error rendering with typo suggestions. The high-level entry points return a
//! finalized [`ModelRegistry`] whose tokenizer adapters have already been
//! resolved, so a successful load means every registered model can count.
//!
//! # Usage
//!
//! ```no_run
//! use tokmeter_config::load_registry;
//!
//! let registry = load_registry().expect("catalog errors");
//! println!("{} models available", registry.len());
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use tracing::info;

use tokmeter_catalog::ModelRegistry;

pub use diagnostic::{render_errors, CatalogError};
pub use loader::{load_catalog, load_catalog_from_path, load_catalog_from_str};
pub use model::{CatalogConfig, CatalogModelEntry, CatalogSection};

/// Load the catalog from the XDG hierarchy and build a validated registry.
///
/// This is the high-level entry point that:
/// 1. Loads catalog config from TOML files + env vars via Figment
/// 2. On success: resolves entries and builds the registry
/// 3. On Figment error: converts to miette diagnostics with typo suggestions
///
/// Returns either a ready-to-use registry or a list of diagnostic errors.
pub fn load_registry() -> Result<ModelRegistry, Vec<CatalogError>> {
    match loader::load_catalog() {
        Ok(config) => build_registry(&config),
        Err(err) => Err(diagnostic::figment_to_catalog_errors(err)),
    }
}

/// Load the catalog from a TOML string and build a validated registry.
///
/// Useful for testing and embedded configuration.
pub fn load_registry_from_str(toml_content: &str) -> Result<ModelRegistry, Vec<CatalogError>> {
    match loader::load_catalog_from_str(toml_content) {
        Ok(config) => build_registry(&config),
        Err(err) => Err(diagnostic::figment_to_catalog_errors(err)),
    }
}

/// Build a registry from an already-parsed catalog config.
///
/// Resolves the config entries, registers them on top of the stock catalog
/// (unless `include_builtin = false`), then verifies that every registered
/// model's tokenizer adapter actually loads. Failing adapter validation here
/// means no counting path can hit an unusable tokenizer later.
pub fn build_registry(config: &CatalogConfig) -> Result<ModelRegistry, Vec<CatalogError>> {
    let models = validation::resolve_models(config)?;

    let mut registry = if config.catalog.include_builtin {
        ModelRegistry::builtin()
    } else {
        ModelRegistry::new()
    };
    for model in models {
        registry.register(model);
    }

    if let Err(err) = tokmeter_tokenizers::validate_adapters(&registry) {
        return Err(vec![CatalogError::Validation {
            message: err.to_string(),
        }]);
    }

    info!(models = registry.len(), "model catalog loaded");
    Ok(registry)
}
