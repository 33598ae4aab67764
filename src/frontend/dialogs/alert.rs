//! Submission failure alert
//!
//! Shown when a ticket could not be submitted. The form behind it stays
//! blocked until the user acknowledges the message; the draft is kept.

use super::{Dialog, DialogAction, DialogState};
use crate::frontend::bidi::visual;
use crate::i18n::Translator;
use egui::{RichText, Ui};

/// State for the submission alert
#[derive(Debug, Default)]
pub struct SubmissionAlertState {
    /// Error text behind the alert, shown on hover
    pub detail: Option<String>,
}

impl DialogState for SubmissionAlertState {}

impl SubmissionAlertState {
    pub fn with_detail(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
        }
    }
}

/// Action from the submission alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertAction {
    /// User acknowledged the alert
    Dismissed,
}

/// The submission failure alert dialog
pub struct SubmissionAlertDialog;

impl Dialog for SubmissionAlertDialog {
    type State = SubmissionAlertState;
    type Action = AlertAction;
    type Context<'a> = &'a Translator;

    fn title(_state: &Self::State, translator: &Self::Context<'_>) -> String {
        translator.t("alert.title")
    }

    fn width() -> f32 {
        360.0
    }

    fn render(
        state: &mut Self::State,
        translator: Self::Context<'_>,
        ui: &mut Ui,
    ) -> DialogAction<Self::Action> {
        let message = ui.label(RichText::new(visual(&translator.t("ticketForm.error"))).strong());
        if let Some(detail) = &state.detail {
            message.on_hover_text(detail);
        }

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button(visual(&translator.t("alert.ok"))).clicked() {
                return DialogAction::CloseWithAction(AlertAction::Dismissed);
            }
            DialogAction::None
        })
        .inner
    }
}
