// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Token counting, cost estimation, and limit checks for one model.

use std::fmt;
use std::sync::Arc;

use tracing::warn;

use tokmeter_catalog::{ModelConfig, ModelRegistry};
use tokmeter_core::error::TokmeterError;
use tokmeter_core::record::UsageRecord;
use tokmeter_core::traits::{LimitAlert, TokenEncoder, UsageSink};
use tokmeter_core::types::TokenizerKind;
use tokmeter_tokenizers::encoder_for;

use crate::limit::LimitMonitor;

/// Counts tokens and estimates costs for a single model.
///
/// The counter borrows its model configuration from a [`ModelRegistry`]; it
/// owns nothing catalog-related and sees registry contents as of its
/// construction. Construction is fail-fast: an unknown model id or an
/// unusable tokenizer is reported immediately, never at counting time.
pub struct TokenCounter<'r> {
    config: &'r ModelConfig,
    encoder: &'static dyn TokenEncoder,
    monitor: LimitMonitor,
    sink: Option<Arc<dyn UsageSink>>,
}

impl<'r> TokenCounter<'r> {
    /// Bind a counter to `model_id` in `registry`.
    ///
    /// Fails with [`TokmeterError::UnknownModel`] when the id is not
    /// registered and [`TokmeterError::TokenizerUnavailable`] when the
    /// model's tokenizer cannot be loaded.
    pub fn new(registry: &'r ModelRegistry, model_id: &str) -> Result<Self, TokmeterError> {
        let config = registry.get(model_id)?;
        let encoder = encoder_for(config.tokenizer_type)?;
        Ok(Self {
            config,
            encoder,
            monitor: LimitMonitor::unlimited(),
            sink: None,
        })
    }

    /// Set the token limit used by limit checks.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.monitor = self.monitor.with_limit(limit);
        self
    }

    /// Set the alert handler fired when a limit check finds an over-limit
    /// count.
    pub fn with_alert(mut self, alert: Arc<dyn LimitAlert>) -> Self {
        self.monitor = self.monitor.with_alert(alert);
        self
    }

    /// Set the usage sink that receives one record per limit check.
    pub fn with_sink(mut self, sink: Arc<dyn UsageSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Count the tokens in `text` with the model's tokenizer.
    ///
    /// Empty text is zero tokens for every tokenizer kind.
    pub fn count(&self, text: &str) -> usize {
        self.encoder.count(text)
    }

    /// Estimated USD cost of sending `text` and receiving `output_tokens`.
    ///
    /// `output_tokens` may be zero (input-only estimate) but not negative;
    /// negative values fail with [`TokmeterError::InvalidArgument`].
    pub fn estimate_cost(&self, text: &str, output_tokens: i64) -> Result<f64, TokmeterError> {
        let output = non_negative(output_tokens, "output_tokens")?;
        Ok(self.price_tokens(self.count(text) as u64, output))
    }

    /// USD cost of already-counted tokens at this model's prices.
    ///
    /// Useful when token counts come from an API response rather than from
    /// local counting.
    pub fn price_tokens(&self, input_tokens: u64, output_tokens: u64) -> f64 {
        (input_tokens as f64 / 1000.0) * self.config.price_per_1k_input
            + (output_tokens as f64 / 1000.0) * self.config.price_per_1k_output
    }

    /// Whether `text` exceeds the configured token limit.
    ///
    /// Always `false` when no limit is configured. Fires no alert and writes
    /// no usage record; use [`TokenCounter::check_limit`] for the full
    /// pipeline.
    pub fn is_over_limit(&self, text: &str) -> bool {
        self.monitor.is_over(self.count(text))
    }

    /// Tokens left under the limit after counting `text`.
    ///
    /// Negative when the text is already over. Fails with
    /// [`TokmeterError::NoLimitConfigured`] when the counter has no limit;
    /// there is no sentinel value standing in for "unlimited".
    pub fn remaining_tokens(&self, text: &str) -> Result<i64, TokmeterError> {
        let Some(limit) = self.monitor.limit() else {
            return Err(TokmeterError::NoLimitConfigured {
                model_id: self.config.model_id.clone(),
            });
        };
        Ok(limit as i64 - self.count(text) as i64)
    }

    /// Run the full limit pipeline for `text` and return whether it is over.
    ///
    /// Counts once. When the count exceeds the limit, the alert handler is
    /// invoked synchronously, exactly once, with the count, the limit, and
    /// the model id. Afterwards one usage record is appended to the sink
    /// (when one is bound) whether or not the text was over. A sink write
    /// failure is logged as a warning and does not change the result.
    pub fn check_limit(&self, text: &str) -> bool {
        let tokens = self.count(text);
        let over = self.monitor.is_over(tokens);

        if over {
            self.monitor.notify_exceeded(tokens, &self.config.model_id);
        }

        if let Some(sink) = &self.sink {
            let record = UsageRecord::new(
                self.config.model_id.clone(),
                tokens as u64,
                None,
                self.price_tokens(tokens as u64, 0),
                over,
            );
            if let Err(error) = sink.append(&record) {
                warn!(
                    model_id = %self.config.model_id,
                    %error,
                    "usage sink append failed; check result unaffected"
                );
            }
        }

        over
    }

    /// Whether `text` plus a planned response fits the model's context
    /// window.
    ///
    /// Fails with [`TokmeterError::InvalidArgument`] for negative
    /// `output_tokens`.
    pub fn fits_context(&self, text: &str, output_tokens: i64) -> Result<bool, TokmeterError> {
        let output = non_negative(output_tokens, "output_tokens")?;
        let total = self.count(text) as u64 + output;
        Ok(total <= u64::from(self.config.context_length))
    }

    /// The model id this counter is bound to.
    pub fn model_id(&self) -> &str {
        &self.config.model_id
    }

    /// The full model configuration this counter was built from.
    pub fn config(&self) -> &ModelConfig {
        self.config
    }

    /// The tokenizer kind doing the counting.
    pub fn tokenizer_kind(&self) -> TokenizerKind {
        self.encoder.kind()
    }

    /// The configured token limit, if any.
    pub fn limit(&self) -> Option<usize> {
        self.monitor.limit()
    }
}

impl fmt::Debug for TokenCounter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCounter")
            .field("model_id", &self.config.model_id)
            .field("tokenizer", &self.config.tokenizer_type)
            .field("limit", &self.monitor.limit())
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}

/// Reject negative values at the API edge, where counts arrive as signed
/// numbers from callers.
pub(crate) fn non_negative(value: i64, what: &str) -> Result<u64, TokmeterError> {
    u64::try_from(value).map_err(|_| {
        TokmeterError::InvalidArgument(format!("{what} must be non-negative, got {value}"))
    })
}
