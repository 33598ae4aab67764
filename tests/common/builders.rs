//! Test data builders for creating test objects

use ticket_intake::ticket::{DraftField, TicketDraft, UrgencyLevel};

/// Builder for creating test ticket drafts
#[derive(Default)]
pub struct DraftBuilder {
    draft: TicketDraft,
}

impl DraftBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A complete, valid intake for a client named Dana
    pub fn dana() -> Self {
        Self::new()
            .name("Dana")
            .email("d@x.io")
            .phone("050-1234567")
            .summary("Hearing on Monday")
            .urgency(UrgencyLevel::CourtDateSoon)
    }

    pub fn name(mut self, value: &str) -> Self {
        self.draft.set_field(DraftField::ClientName, value.to_string());
        self
    }

    pub fn email(mut self, value: &str) -> Self {
        self.draft.set_field(DraftField::ClientEmail, value.to_string());
        self
    }

    pub fn phone(mut self, value: &str) -> Self {
        self.draft.set_field(DraftField::ClientPhone, value.to_string());
        self
    }

    pub fn summary(mut self, value: &str) -> Self {
        self.draft.set_field(DraftField::EventSummary, value.to_string());
        self
    }

    pub fn urgency(mut self, level: UrgencyLevel) -> Self {
        self.draft.urgency_level = level;
        self
    }

    pub fn build(self) -> TicketDraft {
        self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dana_builder() {
        let draft = DraftBuilder::dana().build();

        assert_eq!(draft.client_name, "Dana");
        assert_eq!(draft.urgency_level, UrgencyLevel::CourtDateSoon);
        assert!(draft.validate().is_ok());
    }
}
