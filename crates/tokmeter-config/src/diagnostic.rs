// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-to-miette error bridge with fuzzy match suggestions.
//!
//! Converts Figment deserialization errors and semantic catalog problems
//! into miette diagnostics with valid name listings and "did you mean?"
//! suggestions using Jaro-Winkler string similarity.

use miette::Diagnostic;
use thiserror::Error;

/// Minimum Jaro-Winkler similarity score to suggest a correction.
/// 0.75 catches common typos like `anthropi` -> `anthropic` and
/// `include_bultin` -> `include_builtin` while filtering noise.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A catalog configuration error with diagnostic context.
///
/// Validation collects these instead of failing fast, so one pass over a
/// broken `tokmeter.toml` reports every problem at once.
#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    /// An unknown key was found in the configuration.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(tokmeter::catalog::unknown_key),
        help("{}", format_name_help(suggestion.as_deref(), "keys", valid_keys))
    )]
    UnknownKey {
        /// The unrecognized key name.
        key: String,
        /// Suggested correction via fuzzy matching, if any.
        suggestion: Option<String>,
        /// List of valid keys for the section.
        valid_keys: String,
    },

    /// A model entry names a provider outside the supported set.
    #[error("model `{model_id}` names unknown provider `{value}`")]
    #[diagnostic(
        code(tokmeter::catalog::unknown_provider),
        help("{}", format_name_help(suggestion.as_deref(), "providers", valid))
    )]
    UnknownProvider {
        /// The entry the bad name appears in.
        model_id: String,
        /// The unrecognized provider name.
        value: String,
        /// Suggested correction via fuzzy matching, if any.
        suggestion: Option<String>,
        /// List of supported provider names.
        valid: String,
    },

    /// A model entry names a tokenizer kind outside the supported set.
    #[error("model `{model_id}` names unknown tokenizer `{value}`")]
    #[diagnostic(
        code(tokmeter::catalog::unknown_tokenizer),
        help("{}", format_name_help(suggestion.as_deref(), "tokenizers", valid))
    )]
    UnknownTokenizer {
        /// The entry the bad name appears in.
        model_id: String,
        /// The unrecognized tokenizer name.
        value: String,
        /// Suggested correction via fuzzy matching, if any.
        suggestion: Option<String>,
        /// List of supported tokenizer names.
        valid: String,
    },

    /// A required configuration key is missing.
    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(tokmeter::catalog::missing_key),
        help("add `{key} = <value>` to your tokmeter.toml")
    )]
    MissingKey {
        /// The missing key name.
        key: String,
    },

    /// A configuration value has the wrong type.
    #[error("invalid type for key `{key}`: {detail}")]
    #[diagnostic(
        code(tokmeter::catalog::invalid_type),
        help("expected {expected}")
    )]
    InvalidType {
        /// The key with the wrong type.
        key: String,
        /// Description of the type mismatch.
        detail: String,
        /// What type was expected.
        expected: String,
    },

    /// A validation error for a catalog value.
    #[error("validation error: {message}")]
    #[diagnostic(code(tokmeter::catalog::validation))]
    Validation {
        /// Description of the validation failure.
        message: String,
    },

    /// Catch-all for other configuration errors.
    #[error("configuration error: {0}")]
    #[diagnostic(code(tokmeter::catalog::other))]
    Other(String),
}

/// Format the help message for an unknown name in a known set.
fn format_name_help(suggestion: Option<&str>, what: &str, valid: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? Valid {what}: {valid}"),
        None => format!("valid {what}: {valid}"),
    }
}

/// Convert a `figment::Error` into a list of `CatalogError` diagnostics.
///
/// Iterates through all errors in the figment error (which may contain
/// multiple), converting each to an appropriate `CatalogError` variant with
/// fuzzy match suggestions for unknown field errors.
pub fn figment_to_catalog_errors(err: figment::Error) -> Vec<CatalogError> {
    use figment::error::Kind;

    let mut errors = Vec::new();

    for error in err {
        let catalog_error = match &error.kind {
            Kind::UnknownField(field, expected) => {
                // expected is &'static [&'static str]
                let valid_keys: Vec<&str> = expected.to_vec();
                let suggestion = suggest_name(field, &valid_keys);

                CatalogError::UnknownKey {
                    key: field.clone(),
                    suggestion,
                    valid_keys: valid_keys.join(", "),
                }
            }
            Kind::MissingField(field) => CatalogError::MissingKey {
                key: field.clone().into_owned(),
            },
            Kind::InvalidType(actual, expected) => {
                let key = error
                    .path
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join(".");
                CatalogError::InvalidType {
                    key,
                    detail: format!("found {actual}, expected {expected}"),
                    expected: expected.to_string(),
                }
            }
            _ => CatalogError::Other(format!("{error}")),
        };

        errors.push(catalog_error);
    }

    errors
}

/// Suggest a similar name using Jaro-Winkler string similarity.
///
/// Returns the best match above the similarity threshold, or `None` if
/// nothing in the valid set is close enough to the unknown name.
pub fn suggest_name(unknown: &str, valid: &[&str]) -> Option<String> {
    let mut best_score = SUGGESTION_THRESHOLD;
    let mut best_match = None;

    for &name in valid {
        let score = strsim::jaro_winkler(unknown, name);
        if score > best_score {
            best_score = score;
            best_match = Some(name.to_string());
        }
    }

    best_match
}

/// Render a list of `CatalogError`s to stderr using miette's graphical handler.
pub fn render_errors(errors: &[CatalogError]) {
    use miette::GraphicalReportHandler;

    let handler = GraphicalReportHandler::new();
    for error in errors {
        let mut buf = String::new();
        let diagnostic: &dyn Diagnostic = error;
        if handler.render_report(&mut buf, diagnostic).is_ok() {
            eprint!("{buf}");
        } else {
            eprintln!("Error: {error}");
        }
    }
}
