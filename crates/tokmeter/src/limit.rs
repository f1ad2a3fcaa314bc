// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Token limit tracking and alert dispatch.

use std::fmt;
use std::sync::Arc;

use tokmeter_core::traits::LimitAlert;

/// Tracks a counter's optional token limit and alert handler.
///
/// A monitor without a limit never reports anything as over. The limit is
/// inclusive: a count exactly at the limit is within budget.
#[derive(Clone, Default)]
pub struct LimitMonitor {
    limit: Option<usize>,
    alert: Option<Arc<dyn LimitAlert>>,
}

impl LimitMonitor {
    /// A monitor with no limit and no alert handler.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Set the token limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the alert handler fired on over-limit measurements.
    pub fn with_alert(mut self, alert: Arc<dyn LimitAlert>) -> Self {
        self.alert = Some(alert);
        self
    }

    /// The configured limit, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Whether `tokens` exceeds the configured limit.
    ///
    /// Always `false` when no limit is set.
    pub fn is_over(&self, tokens: usize) -> bool {
        match self.limit {
            Some(limit) => tokens > limit,
            None => false,
        }
    }

    /// Fire the alert handler for an over-limit measurement.
    ///
    /// Runs synchronously on the calling thread. Panics from the handler
    /// propagate to the caller; the monitor does not suppress them.
    pub(crate) fn notify_exceeded(&self, tokens: usize, model_id: &str) {
        if let Some(alert) = &self.alert
            && let Some(limit) = self.limit
        {
            alert.notify(tokens, limit, model_id);
        }
    }
}

impl fmt::Debug for LimitMonitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LimitMonitor")
            .field("limit", &self.limit)
            .field("has_alert", &self.alert.is_some())
            .finish()
    }
}
