//! Ticket form component
//!
//! [`TicketForm`] owns one form's [`TicketFormState`], the in-flight
//! [`PendingSubmission`] and a handle to the shared [`Translator`]. The UI
//! loop calls [`TicketForm::poll`] every frame; rendering lives in
//! `frontend::ticket_form`.
//!
//! Everything a form schedules is owned by it: dropping the form drops the
//! reset timer and the result receiver, so nothing can touch it afterwards.

pub mod lifecycle;
pub mod state;

pub use lifecycle::{FormLifecycle, ResetTimer};
pub use state::{SubmissionAlert, TicketFormState};

use crate::i18n::Translator;
use crate::ticket::{PendingSubmission, SubmissionDispatcher, UrgencyLevel};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Ticket intake form: state, translation and submission plumbing
pub struct TicketForm {
    state: TicketFormState,
    translator: Arc<Translator>,
    dispatcher: SubmissionDispatcher,
    pending: Option<PendingSubmission>,
}

impl TicketForm {
    pub fn new(
        translator: Arc<Translator>,
        dispatcher: SubmissionDispatcher,
        confirmation_timeout: Duration,
    ) -> Self {
        Self {
            state: TicketFormState::new(confirmation_timeout),
            translator,
            dispatcher,
            pending: None,
        }
    }

    pub fn state(&self) -> &TicketFormState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut TicketFormState {
        &mut self.state
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Shorthand for translating with the form's translator
    pub fn t(&self, key: &str) -> String {
        self.translator.t(key)
    }

    pub fn has_pending_submission(&self) -> bool {
        self.pending.is_some()
    }

    /// Submit action: validate, then hand the ticket to the dispatcher
    pub fn handle_submit(&mut self) {
        let Some(payload) = self.state.begin_submit() else {
            return;
        };

        tracing::debug!("Submitting ticket: {:?}", payload);
        self.pending = Some(self.dispatcher.dispatch(payload));
    }

    /// Collect a finished submission and advance the reset timer.
    ///
    /// Returns true when the visible state changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Some(result) = self.pending.as_ref().and_then(PendingSubmission::try_take) {
            self.pending = None;
            self.state.complete_submit(result, now);
            changed = true;
        }

        changed | self.state.tick(now)
    }

    /// Block until the in-flight submission completes, up to `timeout`.
    ///
    /// Returns false if nothing was pending or the wait timed out.
    #[cfg(test)]
    pub fn wait_for_submission(&mut self, timeout: Duration) -> bool {
        let Some(result) = self.pending.as_ref().and_then(|p| p.wait(timeout)) else {
            return false;
        };

        self.pending = None;
        self.state.complete_submit(result, Instant::now());
        true
    }

    /// How soon the UI must wake up again on its own, if at all
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        if self.pending.is_some() {
            return Some(Duration::from_millis(50));
        }
        self.state.time_until_reset(now)
    }

    /// Urgency levels paired with their labels in the active language
    pub fn urgency_options(&self) -> Vec<(UrgencyLevel, String)> {
        UrgencyLevel::all()
            .iter()
            .map(|level| (*level, self.translator.t(level.label_key())))
            .collect()
    }
}

impl Drop for TicketForm {
    fn drop(&mut self) {
        if self.pending.is_some() {
            tracing::debug!("Ticket form dropped with a submission in flight");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IntakeError;
    use crate::i18n::{Language, MemoryBackend};
    use crate::ticket::submit::MockTicketSubmitter;
    use crate::ticket::{DraftField, SimulatedSubmitter};

    const HE: &str = r#"{"ticketForm":{"urgencyLow":"נמוכה","urgencyMedium":"בינונית","urgencyHigh":"דיון בבית משפט קרוב"}}"#;
    const RU: &str = r#"{"ticketForm":{"urgencyLow":"Низкая","urgencyMedium":"Средняя","urgencyHigh":"Скоро суд"}}"#;

    fn translator() -> Arc<Translator> {
        let backend = MemoryBackend::new()
            .with_catalog(Language::Hebrew, HE)
            .with_catalog(Language::Russian, RU);
        Arc::new(Translator::new(Box::new(backend), Language::Hebrew, Language::Hebrew))
    }

    fn fill(form: &mut TicketForm) {
        let state = form.state_mut();
        state.set_field(DraftField::ClientName, "Dana Cohen".to_string());
        state.set_field(DraftField::ClientEmail, "dana@example.com".to_string());
        state.set_field(DraftField::ClientPhone, "0501234567".to_string());
        state.set_field(DraftField::EventSummary, "Dispute over contract".to_string());
    }

    #[test]
    fn test_urgency_options_follow_language() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let translator = translator();
        let dispatcher = SubmissionDispatcher::new(
            Arc::new(SimulatedSubmitter::new(Duration::ZERO)),
            runtime.handle().clone(),
        );
        let form = TicketForm::new(Arc::clone(&translator), dispatcher, Duration::from_secs(3));

        let labels: Vec<String> = form.urgency_options().into_iter().map(|(_, l)| l).collect();
        assert_eq!(labels, vec!["נמוכה", "בינונית", "דיון בבית משפט קרוב"]);

        translator.change_language(Language::Russian);
        let options = form.urgency_options();
        assert_eq!(options[2], (UrgencyLevel::CourtDateSoon, "Скоро суд".to_string()));
    }

    #[test]
    fn test_invalid_draft_never_dispatches() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut mock = MockTicketSubmitter::new();
        mock.expect_submit().times(0);

        let dispatcher = SubmissionDispatcher::new(Arc::new(mock), runtime.handle().clone());
        let mut form = TicketForm::new(translator(), dispatcher, Duration::from_secs(3));

        form.handle_submit();
        assert!(!form.has_pending_submission());
        assert_eq!(form.state().lifecycle(), FormLifecycle::Editing);
        assert_eq!(form.state().errors().len(), 4);
    }

    #[test]
    fn test_failed_submission_round_trip() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut mock = MockTicketSubmitter::new();
        mock.expect_submit()
            .times(1)
            .returning(|_| Err(IntakeError::Submission("timeout".to_string())));

        let dispatcher = SubmissionDispatcher::new(Arc::new(mock), runtime.handle().clone());
        let mut form = TicketForm::new(translator(), dispatcher, Duration::from_secs(3));
        fill(&mut form);
        let before = form.state().draft().clone();

        form.handle_submit();
        assert!(form.state().is_busy());
        assert_eq!(form.next_wakeup(Instant::now()), Some(Duration::from_millis(50)));

        assert!(form.wait_for_submission(Duration::from_secs(5)));
        assert!(!form.has_pending_submission());
        assert_eq!(form.state().lifecycle(), FormLifecycle::Editing);
        assert_eq!(form.state().draft(), &before);
        assert!(form.state().alert().is_some());
    }

    #[test]
    fn test_poll_applies_success_and_reset() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let dispatcher = SubmissionDispatcher::new(
            Arc::new(SimulatedSubmitter::new(Duration::ZERO)),
            runtime.handle().clone(),
        );
        let mut form = TicketForm::new(translator(), dispatcher, Duration::from_millis(100));
        fill(&mut form);
        form.handle_submit();

        let started = Instant::now();
        while !form.poll(Instant::now()) {
            assert!(started.elapsed() < Duration::from_secs(5), "submission never finished");
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(form.state().shows_confirmation());

        let later = Instant::now() + Duration::from_millis(100);
        assert!(form.poll(later));
        assert_eq!(form.state().lifecycle(), FormLifecycle::Editing);
        assert!(form.state().draft().is_blank());
        assert!(form.next_wakeup(later).is_none());
    }
}
