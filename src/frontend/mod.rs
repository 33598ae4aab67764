//! Frontend module for egui UI
//!
//! # Layout
//!
//! - Top panel: [`header`] with title, language switcher and login stub
//! - Central panel: the [`ticket_form`]
//! - Dialogs: submission failure alert (modal)
//!
//! # Main Types
//!
//! - [`TicketIntakeApp`] - Main application state implementing [`eframe::App`]
//!
//! # Submodules
//!
//! - [`bidi`] - Display ordering for Hebrew text
//! - [`dialogs`] - Dialog trait system and dialog implementations
//! - [`fonts`] - Font definitions with Hebrew coverage
//! - [`header`] - Header bar
//! - [`ticket_form`] - Ticket form rendering
//! - [`widgets`] - Field primitives (text input, text area, select)

pub mod bidi;
pub mod dialogs;
pub mod fonts;
pub mod header;
pub mod ticket_form;
pub mod widgets;

pub use header::HeaderAction;
pub use widgets::*;

use dialogs::{show_dialog, AlertAction, SubmissionAlertDialog, SubmissionAlertState};

use crate::config::AppState;
use crate::form::TicketForm;
use crate::i18n::{Language, LanguageCache, Translator};
use std::sync::Arc;
use std::time::Instant;

/// Widest the form column grows, in points
const FORM_MAX_WIDTH: f32 = 560.0;

/// Main application state for the intake window
pub struct TicketIntakeApp {
    translator: Arc<Translator>,
    app_state: AppState,
    form: TicketForm,

    // === Dialogs ===
    alert_open: bool,
    alert_state: SubmissionAlertState,
}

impl TicketIntakeApp {
    /// Create a new application instance
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        translator: Arc<Translator>,
        app_state: AppState,
        form: TicketForm,
    ) -> Self {
        Self::with_context(&cc.egui_ctx, translator, app_state, form)
    }

    fn with_context(
        ctx: &egui::Context,
        translator: Arc<Translator>,
        app_state: AppState,
        form: TicketForm,
    ) -> Self {
        fonts::install(ctx);
        ctx.set_visuals(egui::Visuals::light());

        Self {
            translator,
            app_state,
            form,
            alert_open: false,
            alert_state: SubmissionAlertState::default(),
        }
    }

    /// Whether the form accepts input. False while the alert is up.
    pub fn form_enabled(&self) -> bool {
        !self.alert_open
    }

    /// Switch the UI language and remember the choice
    fn change_language(&mut self, language: Language) {
        if language == self.translator.language() {
            return;
        }

        self.translator.change_language(language);
        self.app_state.cache_language(language);

        if let Err(e) = self.app_state.save() {
            tracing::warn!("Failed to save app state: {}", e);
        }
    }

    fn handle_header_action(&mut self, action: HeaderAction) {
        match action {
            HeaderAction::SwitchLanguage(language) => self.change_language(language),
            HeaderAction::Login => {
                tracing::info!("Login requested; authentication is not available");
            }
        }
    }

    /// Open the alert when the form raised one
    fn sync_alert(&mut self) {
        if self.alert_open {
            return;
        }
        if let Some(alert) = self.form.state().alert() {
            self.alert_state = SubmissionAlertState::with_detail(alert.detail.clone());
            self.alert_open = true;
        }
    }

    /// Draw one frame
    fn show(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        self.form.poll(now);
        self.sync_alert();

        if let Some(wakeup) = self.form.next_wakeup(now) {
            ctx.request_repaint_after(wakeup);
        }

        let header_action = egui::TopBottomPanel::top("header")
            .show(ctx, |ui| {
                ui.add_space(6.0);
                let action = header::render_header(ui, &self.translator);
                ui.add_space(6.0);
                action
            })
            .inner;

        if let Some(action) = header_action {
            self.handle_header_action(action);
        }

        let enabled = self.form_enabled();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(FORM_MAX_WIDTH);
                    ui.add_space(16.0);
                    ui.add_enabled_ui(enabled, |ui| {
                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                            ticket_form::render_ticket_form(ui, &mut self.form);
                        });
                    });
                });
            });
        });

        if let Some(AlertAction::Dismissed) = show_dialog::<SubmissionAlertDialog>(
            ctx,
            &mut self.alert_open,
            &mut self.alert_state,
            self.translator.as_ref(),
        ) {
            tracing::debug!("Submission alert dismissed");
        }
        // Any way of closing the alert counts as acknowledging it
        if !self.alert_open && self.form.state().alert().is_some() {
            self.form.state_mut().dismiss_alert();
        }
    }
}

impl eframe::App for TicketIntakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.app_state.save() {
            tracing::warn!("Failed to save app state: {}", e);
        }
        tracing::info!("Intake window closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IntakeError;
    use crate::form::FormLifecycle;
    use crate::i18n::MemoryBackend;
    use crate::ticket::submit::MockTicketSubmitter;
    use crate::ticket::{DraftField, SubmissionDispatcher, UrgencyLevel};
    use std::time::Duration;

    fn failing_app(runtime: &tokio::runtime::Runtime, ctx: &egui::Context) -> TicketIntakeApp {
        let translator = Arc::new(Translator::new(
            Box::new(MemoryBackend::bundled()),
            Language::Hebrew,
            Language::Hebrew,
        ));

        let mut submitter = MockTicketSubmitter::new();
        submitter
            .expect_submit()
            .returning(|_| Err(IntakeError::Submission("503 Service Unavailable".to_string())));
        let dispatcher = SubmissionDispatcher::new(Arc::new(submitter), runtime.handle().clone());
        let form = TicketForm::new(Arc::clone(&translator), dispatcher, Duration::from_secs(3));

        TicketIntakeApp::with_context(ctx, translator, AppState::default(), form)
    }

    fn fill(form: &mut TicketForm) {
        let state = form.state_mut();
        state.set_field(DraftField::ClientName, "Dana Cohen".to_string());
        state.set_field(DraftField::ClientEmail, "dana@example.com".to_string());
        state.set_field(DraftField::ClientPhone, "050-1234567".to_string());
        state.set_field(DraftField::EventSummary, "Hearing on Monday".to_string());
        state.set_urgency(UrgencyLevel::CourtDateSoon);
    }

    fn frame(ctx: &egui::Context, app: &mut TicketIntakeApp) {
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.show(ctx));
    }

    #[test]
    fn test_failed_submission_blocks_form_until_alert_closes() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let ctx = egui::Context::default();
        let mut app = failing_app(&runtime, &ctx);

        fill(&mut app.form);
        let draft = app.form.state().draft().clone();
        app.form.handle_submit();
        assert!(app.form.wait_for_submission(Duration::from_secs(5)));

        frame(&ctx, &mut app);
        assert!(app.alert_open);
        assert!(!app.form_enabled());
        assert!(app.alert_state.detail.is_some());
        assert!(app.form.state().alert().is_some());

        // Backdrop click or Escape clears the open flag the same way
        app.alert_open = false;
        frame(&ctx, &mut app);

        assert!(app.form_enabled());
        assert!(app.form.state().alert().is_none());
        assert_eq!(app.form.state().draft(), &draft);
        assert_eq!(app.form.state().lifecycle(), FormLifecycle::Editing);
    }

    #[test]
    fn test_idle_frame_leaves_form_enabled() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let ctx = egui::Context::default();
        let mut app = failing_app(&runtime, &ctx);

        frame(&ctx, &mut app);

        assert!(app.form_enabled());
        assert!(app.form.state().draft().is_blank());
    }
}
