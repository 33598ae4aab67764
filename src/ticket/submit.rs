//! Submission boundary
//!
//! [`TicketSubmitter`] is the seam a real backend client plugs into. The
//! only implementation today is [`SimulatedSubmitter`], which waits for a
//! fixed delay and accepts every ticket.
//!
//! [`SubmissionDispatcher`] runs a submitter on the tokio runtime and hands
//! the UI thread a [`PendingSubmission`] to poll once per frame. Dropping
//! the pending handle discards the result.

use super::TicketPayload;
use crate::error::{IntakeError, Result};
use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, TryRecvError};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Acknowledgement returned for an accepted ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub message: String,
    pub ticket_id: Option<u64>,
    pub status: String,
    pub submitted_at: DateTime<Utc>,
}

/// Delivers a validated ticket somewhere
#[cfg_attr(test, mockall::automock)]
pub trait TicketSubmitter: Send + Sync {
    /// Submit a ticket, blocking until the outcome is known
    fn submit(&self, payload: &TicketPayload) -> Result<SubmissionReceipt>;
}

/// Stand-in for the intake endpoint: sleeps, then accepts the ticket
#[derive(Debug)]
pub struct SimulatedSubmitter {
    delay: Duration,
    next_id: AtomicU64,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_id: AtomicU64::new(1),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl TicketSubmitter for SimulatedSubmitter {
    fn submit(&self, payload: &TicketPayload) -> Result<SubmissionReceipt> {
        tracing::debug!(
            "Simulating submission for {:?} ({})",
            payload.client_name,
            payload.urgency_level.as_str()
        );
        std::thread::sleep(self.delay);

        Ok(SubmissionReceipt {
            message: "Ticket submitted successfully".to_string(),
            ticket_id: Some(self.next_id.fetch_add(1, Ordering::Relaxed)),
            status: "New".to_string(),
            submitted_at: Utc::now(),
        })
    }
}

/// Runs submissions off the UI thread
#[derive(Clone)]
pub struct SubmissionDispatcher {
    submitter: Arc<dyn TicketSubmitter>,
    runtime: tokio::runtime::Handle,
}

impl SubmissionDispatcher {
    pub fn new(submitter: Arc<dyn TicketSubmitter>, runtime: tokio::runtime::Handle) -> Self {
        Self { submitter, runtime }
    }

    /// Start submitting `payload`. The outcome arrives on the returned handle.
    pub fn dispatch(&self, payload: TicketPayload) -> PendingSubmission {
        let (tx, rx) = bounded(1);
        let submitter = Arc::clone(&self.submitter);

        self.runtime.spawn_blocking(move || {
            let result = submitter.submit(&payload);
            if tx.send(result).is_err() {
                tracing::debug!("Submission finished after its form was dropped");
            }
        });

        PendingSubmission { rx }
    }
}

impl std::fmt::Debug for SubmissionDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionDispatcher").finish_non_exhaustive()
    }
}

/// An in-flight submission
#[derive(Debug)]
pub struct PendingSubmission {
    rx: Receiver<Result<SubmissionReceipt>>,
}

impl PendingSubmission {
    /// Take the outcome if the submission has finished.
    ///
    /// A worker that went away without reporting counts as a failure.
    pub fn try_take(&self) -> Option<Result<SubmissionReceipt>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(IntakeError::Channel(
                "submission worker exited without a result".to_string(),
            ))),
        }
    }

    /// Block until the outcome is available or `timeout` elapses
    #[cfg(test)]
    pub fn wait(&self, timeout: Duration) -> Option<Result<SubmissionReceipt>> {
        match self.rx.recv_timeout(timeout) {
            Ok(result) => Some(result),
            Err(crossbeam_channel::RecvTimeoutError::Timeout) => None,
            Err(crossbeam_channel::RecvTimeoutError::Disconnected) => Some(Err(
                IntakeError::Channel("submission worker exited without a result".to_string()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket::UrgencyLevel;

    fn payload() -> TicketPayload {
        TicketPayload {
            client_name: "Dana Cohen".to_string(),
            client_email: "dana@example.com".to_string(),
            client_phone: "0501234567".to_string(),
            event_summary: "Dispute over contract".to_string(),
            urgency_level: UrgencyLevel::Medium,
        }
    }

    fn receipt() -> SubmissionReceipt {
        SubmissionReceipt {
            message: "ok".to_string(),
            ticket_id: Some(7),
            status: "New".to_string(),
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn test_simulated_submitter_assigns_sequential_ids() {
        let submitter = SimulatedSubmitter::new(Duration::ZERO);
        let first = submitter.submit(&payload()).unwrap();
        let second = submitter.submit(&payload()).unwrap();

        assert_eq!(first.ticket_id, Some(1));
        assert_eq!(second.ticket_id, Some(2));
        assert_eq!(first.status, "New");
        assert_eq!(first.message, "Ticket submitted successfully");
    }

    #[test]
    fn test_dispatch_delivers_success() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut mock = MockTicketSubmitter::new();
        mock.expect_submit()
            .withf(|p| p.client_email == "dana@example.com")
            .times(1)
            .returning(|_| Ok(receipt()));

        let dispatcher = SubmissionDispatcher::new(Arc::new(mock), runtime.handle().clone());
        let pending = dispatcher.dispatch(payload());

        let result = pending.wait(Duration::from_secs(5)).expect("timed out");
        assert_eq!(result.unwrap().ticket_id, Some(7));
    }

    #[test]
    fn test_dispatch_delivers_failure() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut mock = MockTicketSubmitter::new();
        mock.expect_submit()
            .returning(|_| Err(IntakeError::Submission("503".to_string())));

        let dispatcher = SubmissionDispatcher::new(Arc::new(mock), runtime.handle().clone());
        let pending = dispatcher.dispatch(payload());

        let err = pending.wait(Duration::from_secs(5)).expect("timed out").unwrap_err();
        assert!(matches!(err, IntakeError::Submission(_)));
    }

    #[test]
    fn test_try_take_empty_while_running() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let dispatcher = SubmissionDispatcher::new(
            Arc::new(SimulatedSubmitter::new(Duration::from_millis(200))),
            runtime.handle().clone(),
        );

        let pending = dispatcher.dispatch(payload());
        assert!(pending.try_take().is_none());
        assert!(pending.wait(Duration::from_secs(5)).unwrap().is_ok());
    }

    #[test]
    fn test_disconnected_channel_is_failure() {
        let (tx, rx) = bounded::<Result<SubmissionReceipt>>(1);
        drop(tx);
        let pending = PendingSubmission { rx };
        assert!(matches!(
            pending.try_take(),
            Some(Err(IntakeError::Channel(_)))
        ));
    }
}
