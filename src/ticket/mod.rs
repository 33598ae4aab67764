//! Ticket draft model and client-side validation
//!
//! A [`TicketDraft`] is the in-progress data held by the form. Validating a
//! draft yields the [`TicketPayload`] sent across the submission boundary,
//! or a [`ValidationErrors`] map keyed by [`DraftField`].

pub mod submit;

pub use submit::{
    PendingSubmission, SimulatedSubmitter, SubmissionDispatcher, SubmissionReceipt,
    TicketSubmitter,
};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How urgent the client's matter is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UrgencyLevel {
    #[default]
    Low,
    Medium,
    #[serde(rename = "Court Date Soon")]
    CourtDateSoon,
}

impl UrgencyLevel {
    /// All levels in display order
    pub fn all() -> &'static [UrgencyLevel] {
        &[
            UrgencyLevel::Low,
            UrgencyLevel::Medium,
            UrgencyLevel::CourtDateSoon,
        ]
    }

    /// Wire value of the level
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Low => "Low",
            UrgencyLevel::Medium => "Medium",
            UrgencyLevel::CourtDateSoon => "Court Date Soon",
        }
    }

    /// Translation key for the level's label
    pub fn label_key(&self) -> &'static str {
        match self {
            UrgencyLevel::Low => "ticketForm.urgencyLow",
            UrgencyLevel::Medium => "ticketForm.urgencyMedium",
            UrgencyLevel::CourtDateSoon => "ticketForm.urgencyHigh",
        }
    }
}

/// The free-text fields of a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftField {
    ClientName,
    ClientEmail,
    ClientPhone,
    EventSummary,
}

impl DraftField {
    pub fn all() -> &'static [DraftField] {
        &[
            DraftField::ClientName,
            DraftField::ClientEmail,
            DraftField::ClientPhone,
            DraftField::EventSummary,
        ]
    }

    /// Translation key of the field label
    pub fn label_key(&self) -> &'static str {
        match self {
            DraftField::ClientName => "ticketForm.name",
            DraftField::ClientEmail => "ticketForm.email",
            DraftField::ClientPhone => "ticketForm.phone",
            DraftField::EventSummary => "ticketForm.summary",
        }
    }

    /// Translation key of the field placeholder
    pub fn placeholder_key(&self) -> &'static str {
        match self {
            DraftField::ClientName => "ticketForm.namePlaceholder",
            DraftField::ClientEmail => "ticketForm.emailPlaceholder",
            DraftField::ClientPhone => "ticketForm.phonePlaceholder",
            DraftField::EventSummary => "ticketForm.summaryPlaceholder",
        }
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
}

impl FieldError {
    /// Translation key of the message shown under the field
    pub fn message_key(&self) -> &'static str {
        match self {
            FieldError::Required => "ticketForm.required",
            FieldError::InvalidEmail => "ticketForm.invalidEmail",
        }
    }
}

/// Per-field validation failures
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<DraftField, FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: DraftField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn insert(&mut self, field: DraftField, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn clear_field(&mut self, field: DraftField) {
        self.errors.remove(&field);
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (DraftField, FieldError)> + '_ {
        self.errors.iter().map(|(f, e)| (*f, *e))
    }
}

/// In-progress ticket data owned by a form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketDraft {
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub event_summary: String,
    pub urgency_level: UrgencyLevel,
}

impl TicketDraft {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::ClientName => &self.client_name,
            DraftField::ClientEmail => &self.client_email,
            DraftField::ClientPhone => &self.client_phone,
            DraftField::EventSummary => &self.event_summary,
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::ClientName => self.client_name = value,
            DraftField::ClientEmail => self.client_email = value,
            DraftField::ClientPhone => self.client_phone = value,
            DraftField::EventSummary => self.event_summary = value,
        }
    }

    /// Whether every field still holds its initial value
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    /// Check every field. Whitespace-only text counts as empty.
    pub fn validate(&self) -> std::result::Result<TicketPayload, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        for field in DraftField::all() {
            if self.field(*field).trim().is_empty() {
                errors.insert(*field, FieldError::Required);
            }
        }

        if errors.get(DraftField::ClientEmail).is_none()
            && !looks_like_email(self.client_email.trim())
        {
            errors.insert(DraftField::ClientEmail, FieldError::InvalidEmail);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(TicketPayload {
            client_name: self.client_name.trim().to_string(),
            client_email: self.client_email.trim().to_string(),
            client_phone: self.client_phone.trim().to_string(),
            event_summary: self.event_summary.trim().to_string(),
            urgency_level: self.urgency_level,
        })
    }
}

/// `local@domain` with no whitespace and a single `@`
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.chars().any(char::is_whitespace)
}

/// Validated ticket as sent across the submission boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketPayload {
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub event_summary: String,
    pub urgency_level: UrgencyLevel,
}
