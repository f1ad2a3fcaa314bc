// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the tokmeter workspace.
//!
//! This crate provides the error types, the usage record, the shared enums,
//! and the trait seams (`TokenEncoder`, `UsageSink`, `LimitAlert`) that the
//! catalog, tokenizer, sink, and façade crates build on.

pub mod error;
pub mod record;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{SinkError, TokmeterError};
pub use record::UsageRecord;
pub use traits::{LimitAlert, TokenEncoder, UsageSink};
pub use types::{Provider, TokenizerKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokmeter_error_has_all_variants() {
        // Verify all 5 error variants exist and can be constructed.
        let _unknown = TokmeterError::UnknownModel {
            model_id: "nope".into(),
        };
        let _invalid = TokmeterError::InvalidArgument("negative output_tokens".into());
        let _no_limit = TokmeterError::NoLimitConfigured {
            model_id: "gpt-4o".into(),
        };
        let _unavailable = TokmeterError::TokenizerUnavailable {
            kind: TokenizerKind::Cl100kBase,
            reason: "vocabulary failed to load".into(),
        };
        let _config = TokmeterError::Config("bad price".into());
    }

    #[test]
    fn error_messages_name_the_offender() {
        let err = TokmeterError::UnknownModel {
            model_id: "gpt-99".into(),
        };
        assert_eq!(err.to_string(), "unknown model: gpt-99");

        let err = TokmeterError::NoLimitConfigured {
            model_id: "gpt-4o".into(),
        };
        assert!(err.to_string().contains("gpt-4o"));

        let err = TokmeterError::TokenizerUnavailable {
            kind: TokenizerKind::O200kBase,
            reason: "load failed".into(),
        };
        assert!(err.to_string().contains("o200k_base"));
    }

    #[test]
    fn sink_error_wraps_io() {
        let err = SinkError::from(std::io::Error::other("disk full"));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn closures_satisfy_limit_alert() {
        fn assert_alert<T: LimitAlert>(_: &T) {}

        let noticed = std::sync::Mutex::new(Vec::new());
        let handler = |tokens: usize, limit: usize, model_id: &str| {
            noticed
                .lock()
                .expect("lock poisoned")
                .push((tokens, limit, model_id.to_string()));
        };
        assert_alert(&handler);

        handler.notify(25, 20, "gpt-4o");
        let seen = noticed.lock().expect("lock poisoned");
        assert_eq!(seen.as_slice(), &[(25, 20, "gpt-4o".to_string())]);
    }
}
