// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./tokmeter.toml` > `~/.config/tokmeter/tokmeter.toml`
//! > `/etc/tokmeter/tokmeter.toml` with environment variable overrides via
//! `TOKMETER_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::CatalogConfig;

/// Load catalog configuration from the standard XDG hierarchy with env var
/// overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/tokmeter/tokmeter.toml` (system-wide)
/// 3. `~/.config/tokmeter/tokmeter.toml` (user XDG config)
/// 4. `./tokmeter.toml` (local directory)
/// 5. `TOKMETER_*` environment variables
pub fn load_catalog() -> Result<CatalogConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CatalogConfig::default()))
        .merge(Toml::file("/etc/tokmeter/tokmeter.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("tokmeter/tokmeter.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("tokmeter.toml"))
        .merge(env_provider())
        .extract()
}

/// Load catalog configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and embedded configuration.
pub fn load_catalog_from_str(toml_content: &str) -> Result<CatalogConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CatalogConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load catalog configuration from a specific file path with env var overrides.
pub fn load_catalog_from_path(path: &Path) -> Result<CatalogConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CatalogConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `TOKMETER_CATALOG_INCLUDE_BUILTIN` must
/// map to `catalog.include_builtin`, not `catalog.include.builtin`.
fn env_provider() -> Env {
    Env::prefixed("TOKMETER_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: TOKMETER_CATALOG_INCLUDE_BUILTIN -> "catalog_include_builtin"
        let mapped = key.as_str().replacen("catalog_", "catalog.", 1);
        mapped.into()
    })
}
