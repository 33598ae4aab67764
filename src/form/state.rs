//! Ticket form state machine
//!
//! Pure state: no egui, no runtime, and the clock is passed in. The
//! [`super::TicketForm`] controller drives it from the UI loop.

use super::lifecycle::{FormLifecycle, ResetTimer};
use crate::error::Result;
use crate::ticket::{
    DraftField, SubmissionReceipt, TicketDraft, TicketPayload, UrgencyLevel, ValidationErrors,
};
use std::time::{Duration, Instant};

/// A failed submission waiting to be acknowledged by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionAlert {
    /// Underlying error text, for logs and tooltips
    pub detail: String,
}

/// Draft, lifecycle and feedback owned by one ticket form
#[derive(Debug)]
pub struct TicketFormState {
    draft: TicketDraft,
    lifecycle: FormLifecycle,
    errors: ValidationErrors,
    alert: Option<SubmissionAlert>,
    reset_timer: Option<ResetTimer>,
    last_receipt: Option<SubmissionReceipt>,
    confirmation_timeout: Duration,
}

impl TicketFormState {
    pub fn new(confirmation_timeout: Duration) -> Self {
        Self {
            draft: TicketDraft::default(),
            lifecycle: FormLifecycle::Editing,
            errors: ValidationErrors::default(),
            alert: None,
            reset_timer: None,
            last_receipt: None,
            confirmation_timeout,
        }
    }

    pub fn draft(&self) -> &TicketDraft {
        &self.draft
    }

    pub fn lifecycle(&self) -> FormLifecycle {
        self.lifecycle
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn alert(&self) -> Option<&SubmissionAlert> {
        self.alert.as_ref()
    }

    pub fn last_receipt(&self) -> Option<&SubmissionReceipt> {
        self.last_receipt.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.lifecycle.is_busy()
    }

    pub fn shows_confirmation(&self) -> bool {
        self.lifecycle == FormLifecycle::Submitted
    }

    /// Replace one text field and clear its validation error
    pub fn set_field(&mut self, field: DraftField, value: String) {
        self.draft.set_field(field, value);
        self.errors.clear_field(field);
    }

    pub fn set_urgency(&mut self, level: UrgencyLevel) {
        self.draft.urgency_level = level;
    }

    /// Validate the draft and, if it passes, move to `Submitting`.
    ///
    /// Returns the payload to send. Outside `Editing` this is a no-op.
    pub fn begin_submit(&mut self) -> Option<TicketPayload> {
        if self.lifecycle != FormLifecycle::Editing {
            tracing::debug!("Ignoring submit while {:?}", self.lifecycle);
            return None;
        }

        match self.draft.validate() {
            Ok(payload) => {
                self.errors.clear();
                self.alert = None;
                self.lifecycle = FormLifecycle::Submitting;
                Some(payload)
            }
            Err(errors) => {
                tracing::debug!("Submit blocked by {} invalid field(s)", errors.len());
                self.errors = errors;
                None
            }
        }
    }

    /// Apply the outcome of the in-flight submission.
    ///
    /// Success shows the confirmation, empties the draft and arms the reset
    /// timer. Failure returns to editing with the draft untouched and raises
    /// an alert. Either way the form is no longer busy.
    pub fn complete_submit(&mut self, result: Result<SubmissionReceipt>, now: Instant) {
        if self.lifecycle != FormLifecycle::Submitting {
            tracing::warn!("Discarding submission result received while {:?}", self.lifecycle);
            return;
        }

        match result {
            Ok(receipt) => {
                tracing::info!(
                    "Ticket accepted (id {:?}, status {})",
                    receipt.ticket_id,
                    receipt.status
                );
                self.draft = TicketDraft::default();
                self.reset_timer = Some(ResetTimer::start(now, self.confirmation_timeout));
                self.last_receipt = Some(receipt);
                self.lifecycle = FormLifecycle::Submitted;
            }
            Err(e) => {
                tracing::error!("Ticket submission failed: {}", e);
                self.alert = Some(SubmissionAlert {
                    detail: e.to_string(),
                });
                self.lifecycle = FormLifecycle::Editing;
            }
        }
    }

    /// Advance time. Returns true when the confirmation was dismissed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = self
            .reset_timer
            .is_some_and(|timer| timer.is_expired(now));

        if expired && self.lifecycle == FormLifecycle::Submitted {
            self.reset_timer = None;
            self.lifecycle = FormLifecycle::Editing;
            return true;
        }

        false
    }

    /// Remaining confirmation time, if the reset timer is armed
    pub fn time_until_reset(&self, now: Instant) -> Option<Duration> {
        self.reset_timer.map(|timer| timer.remaining(now))
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
