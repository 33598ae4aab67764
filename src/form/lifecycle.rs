//! Form lifecycle states and the confirmation reset timer

use std::time::{Duration, Instant};

/// What the ticket form is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormLifecycle {
    /// Fields are editable
    #[default]
    Editing,
    /// A submission is in flight; the submit control is disabled
    Submitting,
    /// The confirmation panel replaces the form
    Submitted,
}

impl FormLifecycle {
    pub fn is_busy(&self) -> bool {
        matches!(self, FormLifecycle::Submitting)
    }
}

/// Deadline for returning from `Submitted` to `Editing`.
///
/// Owned by the form state; dropping it cancels the reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTimer {
    deadline: Instant,
}

impl ResetTimer {
    pub fn start(now: Instant, timeout: Duration) -> Self {
        Self {
            deadline: now + timeout,
        }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Time left before expiry, zero once expired
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}
