//! # ticket-intake: Localized Ticket Intake Form
//!
//! A desktop intake window where a prospective client describes their case.
//! The form collects contact details, an event summary and an urgency
//! level, validates them and submits the ticket through a pluggable
//! submission boundary.
//!
//! ## Architecture
//!
//! - **Ticket**: draft model, validation and the submission boundary
//! - **Form**: the `Editing → Submitting → Submitted` lifecycle
//! - **I18n**: language detection and an injected translation service
//!   (Hebrew and Russian)
//! - **Frontend**: eframe/egui rendering, header and dialogs
//! - **Communication**: submissions run on a tokio runtime and report back
//!   over crossbeam channels
//!
//! ## Configuration
//!
//! Application state (selected language) and the optional
//! `config.toml` are stored in the platform-appropriate data directory
//! under `dev.ticket-intake`:
//!
//! - **Linux**: `~/.local/share/dev.ticket-intake/`
//! - **macOS**: `~/Library/Application Support/dev.ticket-intake/`
//! - **Windows**: `%APPDATA%\dev.ticket-intake\`
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use ticket_intake::{
//!     config::{AppConfig, AppState},
//!     form::TicketForm,
//!     i18n::{self, DetectionInputs},
//!     ticket::{SimulatedSubmitter, SubmissionDispatcher},
//! };
//!
//! let config = AppConfig::load_or_default();
//! let mut state = AppState::load_or_default();
//! let inputs = DetectionInputs::gather(&state, config.i18n.document_language.as_deref());
//! let backend = i18n::default_backend(&config.i18n);
//! let (translator, _) = i18n::init_translator(&config.i18n, &inputs, backend, &mut state);
//!
//! let runtime = tokio::runtime::Runtime::new()?;
//! let dispatcher = SubmissionDispatcher::new(
//!     Arc::new(SimulatedSubmitter::new(config.form.submission_delay())),
//!     runtime.handle().clone(),
//! );
//! let form = TicketForm::new(translator, dispatcher, config.form.confirmation_timeout());
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod frontend;
pub mod i18n;
pub mod ticket;

// Re-export commonly used types
pub use app::TicketIntakeApp;
pub use config::{AppConfig, AppState};
pub use error::{IntakeError, Result};
pub use form::{FormLifecycle, TicketForm};
pub use i18n::{Language, Translator};
pub use ticket::{TicketDraft, UrgencyLevel};
