//! Ticket Intake - Main Entry Point
//!
//! Loads configuration, detects the UI language, starts the submission
//! runtime and opens the intake window.

use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use ticket_intake::{
    config::{ensure_app_data_dir, AppConfig, AppState, LOG_DIR},
    form::TicketForm,
    frontend::TicketIntakeApp,
    i18n::{self, DetectionInputs},
    ticket::{SimulatedSubmitter, SubmissionDispatcher},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install stderr and rolling-file logging.
///
/// The returned guard flushes the file writer when dropped.
fn init_logging() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ticket_intake=debug"));

    let appender = ensure_app_data_dir().ok().and_then(|dir| {
        RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("ticket-intake")
            .filename_suffix("log")
            .build(dir.join(LOG_DIR))
            .ok()
    });

    let (file_layer, guard) = match appender {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    guard
}

fn main() -> anyhow::Result<()> {
    let _log_guard = init_logging();

    tracing::info!("Starting Ticket Intake");

    let config = AppConfig::load_or_default();
    let mut app_state = AppState::load_or_default();

    // Detect the language before any UI exists and remember it
    let inputs = DetectionInputs::gather(&app_state, config.i18n.document_language.as_deref());
    let backend = i18n::default_backend(&config.i18n);
    let (translator, _detection) =
        i18n::init_translator(&config.i18n, &inputs, backend, &mut app_state);

    if let Err(e) = app_state.save() {
        tracing::warn!("Failed to save app state: {}", e);
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("intake-submit")
        .enable_time()
        .build()
        .context("Failed to start submission runtime")?;

    let dispatcher = SubmissionDispatcher::new(
        Arc::new(SimulatedSubmitter::new(config.form.submission_delay())),
        runtime.handle().clone(),
    );
    let form = TicketForm::new(
        Arc::clone(&translator),
        dispatcher,
        config.form.confirmation_timeout(),
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 820.0])
            .with_min_inner_size([420.0, 560.0])
            .with_title("Ticket Intake"),
        ..Default::default()
    };

    eframe::run_native(
        "Ticket Intake",
        native_options,
        Box::new(move |cc| Ok(Box::new(TicketIntakeApp::new(cc, translator, app_state, form)))),
    )
    .map_err(|e| anyhow::anyhow!("UI event loop failed: {}", e))?;

    tracing::info!("Shutting down...");
    runtime.shutdown_timeout(Duration::from_secs(2));

    Ok(())
}
