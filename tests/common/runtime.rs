//! Form construction helpers

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use ticket_intake::form::TicketForm;
use ticket_intake::i18n::{Language, MemoryBackend, Translator};
use ticket_intake::ticket::{SimulatedSubmitter, SubmissionDispatcher, TicketSubmitter};

use super::HEBREW_CATALOG;

/// Small runtime for driving submissions in tests
pub fn test_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .unwrap()
}

pub fn hebrew_translator() -> Arc<Translator> {
    Arc::new(Translator::new(
        Box::new(MemoryBackend::new().with_catalog(Language::Hebrew, HEBREW_CATALOG)),
        Language::Hebrew,
        Language::Hebrew,
    ))
}

/// Form backed by `submitter` with the given confirmation timeout
pub fn form_with(
    runtime: &tokio::runtime::Runtime,
    submitter: Arc<dyn TicketSubmitter>,
    confirmation_timeout: Duration,
) -> TicketForm {
    let dispatcher = SubmissionDispatcher::new(submitter, runtime.handle().clone());
    TicketForm::new(hebrew_translator(), dispatcher, confirmation_timeout)
}

/// Form backed by a fast simulated submitter
pub fn simulated_form(runtime: &tokio::runtime::Runtime, confirmation_timeout: Duration) -> TicketForm {
    form_with(
        runtime,
        Arc::new(SimulatedSubmitter::new(Duration::from_millis(20))),
        confirmation_timeout,
    )
}

/// Poll the form the way the UI loop does until its submission settles.
///
/// Returns false if nothing was pending or `timeout` elapsed first.
pub fn settle(form: &mut TicketForm, timeout: Duration) -> bool {
    if !form.has_pending_submission() {
        return false;
    }

    let deadline = Instant::now() + timeout;
    while form.has_pending_submission() {
        if Instant::now() >= deadline {
            return false;
        }
        form.poll(Instant::now());
        thread::sleep(Duration::from_millis(2));
    }
    true
}
