// SPDX-FileCopyrightText: 2026 Tokmeter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Limit-exceeded alert seam.

/// Receiver for limit-exceeded notifications.
///
/// `notify` runs synchronously on the thread that performed the limit check,
/// exactly once per over-limit check. The core performs no suppression: a
/// panic inside the handler propagates to the caller of the check.
pub trait LimitAlert: Send + Sync {
    /// Called with the measured token count, the configured limit, and the
    /// model id the counter is bound to.
    fn notify(&self, tokens: usize, limit: usize, model_id: &str);
}

/// Plain closures work as alert handlers.
impl<F> LimitAlert for F
where
    F: Fn(usize, usize, &str) + Send + Sync,
{
    fn notify(&self, tokens: usize, limit: usize, model_id: &str) {
        self(tokens, limit, model_id);
    }
}
