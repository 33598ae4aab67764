//! Ticket form panel
//!
//! Renders either the editable form or, while the ticket is confirmed, the
//! confirmation panel. Edits are collected during rendering and applied to
//! the form afterwards.

use egui::{Color32, RichText, Ui};

use super::bidi::visual;
use crate::form::TicketForm;
use crate::frontend::widgets::{InputKind, Select, SelectOption, TextArea, TextInput};
use crate::ticket::{DraftField, UrgencyLevel};

/// Rows shown by the event summary text area
const SUMMARY_ROWS: usize = 6;

/// Edits made while rendering one frame
#[derive(Debug, Default)]
pub struct FormEdits {
    pub fields: Vec<(DraftField, String)>,
    pub urgency: Option<UrgencyLevel>,
    pub submit: bool,
}

impl FormEdits {
    /// Apply the edits to the form, submitting last
    pub fn apply(self, form: &mut TicketForm) {
        for (field, value) in self.fields {
            form.state_mut().set_field(field, value);
        }
        if let Some(level) = self.urgency {
            form.state_mut().set_urgency(level);
        }
        if self.submit {
            form.handle_submit();
        }
    }
}

/// Render the ticket form and apply whatever the user did
pub fn render_ticket_form(ui: &mut Ui, form: &mut TicketForm) {
    if form.state().shows_confirmation() {
        render_confirmation(ui, form);
        return;
    }

    let edits = render_editable(ui, form);
    edits.apply(form);
}

fn render_confirmation(ui: &mut Ui, form: &TicketForm) {
    egui::Frame::new()
        .fill(Color32::from_rgb(240, 253, 244))
        .stroke(egui::Stroke::new(1.0, Color32::from_rgb(187, 247, 208)))
        .inner_margin(32.0)
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("✓").size(48.0).color(Color32::from_rgb(22, 163, 74)));
                ui.add_space(8.0);
                ui.label(
                    RichText::new(visual(&form.t("ticketForm.success")))
                        .heading()
                        .color(Color32::from_rgb(22, 101, 52)),
                );
                if let Some(id) = form.state().last_receipt().and_then(|r| r.ticket_id) {
                    ui.add_space(4.0);
                    let number = form
                        .translator()
                        .t_with("ticketForm.ticketNumber", &[("id", &id.to_string())]);
                    ui.label(visual(&number));
                }
            });
        });
}

fn render_editable(ui: &mut Ui, form: &TicketForm) -> FormEdits {
    let mut edits = FormEdits::default();
    let state = form.state();
    let draft = state.draft();
    let error_text = |field: DraftField| {
        state
            .errors()
            .get(field)
            .map(|error| form.t(error.message_key()))
    };

    ui.heading(visual(&form.t("ticketForm.title")));
    ui.add_space(12.0);

    for (field, kind) in [
        (DraftField::ClientName, InputKind::Text),
        (DraftField::ClientEmail, InputKind::Email),
        (DraftField::ClientPhone, InputKind::Tel),
    ] {
        ui.add(
            TextInput::new(draft.field(field), |value| edits.fields.push((field, value)))
                .label(form.t(field.label_key()))
                .placeholder(form.t(field.placeholder_key()))
                .error(error_text(field))
                .required(true)
                .kind(kind),
        );
    }

    let summary = DraftField::EventSummary;
    ui.add(
        TextArea::new(draft.field(summary), |value| {
            edits.fields.push((summary, value))
        })
        .label(form.t(summary.label_key()))
        .placeholder(form.t(summary.placeholder_key()))
        .error(error_text(summary))
        .rows(SUMMARY_ROWS)
        .required(true),
    );

    let options: Vec<SelectOption<UrgencyLevel>> = form
        .urgency_options()
        .into_iter()
        .map(|(level, label)| SelectOption::new(level, label))
        .collect();
    ui.add(
        Select::new("urgency_level", &options, &draft.urgency_level, |level| {
            edits.urgency = Some(level)
        })
        .label(form.t("ticketForm.urgency"))
        .required(true),
    );

    ui.add_space(8.0);

    let busy = state.is_busy();
    let caption = if busy {
        form.t("ticketForm.submitting")
    } else {
        form.t("ticketForm.submit")
    };

    let button = egui::Button::new(RichText::new(visual(&caption)).strong())
        .min_size(egui::vec2(ui.available_width(), 36.0));
    if ui.add_enabled(!busy, button).clicked() {
        edits.submit = true;
    }

    edits
}
