//! Dialog trait system for unified dialog management
//!
//! Each dialog implements the [`Dialog`] trait, encapsulating its state,
//! actions and rendering. [`show_dialog`] drives the modal lifecycle.

use egui::{Context, Ui};

use super::bidi::visual;

/// Actions that a dialog can return after rendering
#[derive(Debug, Clone, Default)]
pub enum DialogAction<A> {
    /// Keep the dialog open, no action needed
    #[default]
    None,
    /// Close the dialog without performing any action
    Close,
    /// Close the dialog and perform the specified action
    CloseWithAction(A),
}

impl<A> DialogAction<A> {
    /// Check if the action indicates the dialog should close
    pub fn should_close(&self) -> bool {
        matches!(self, DialogAction::Close | DialogAction::CloseWithAction(_))
    }

    /// Extract the action if present
    pub fn into_action(self) -> Option<A> {
        match self {
            DialogAction::CloseWithAction(a) => Some(a),
            _ => None,
        }
    }
}

/// Trait for dialog state management
pub trait DialogState: Default {
    /// Reset the dialog state to its default values
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Main dialog trait for implementing dialogs
///
/// # Example
///
/// ```ignore
/// pub struct MyDialog;
///
/// impl Dialog for MyDialog {
///     type State = MyDialogState;
///     type Action = MyDialogAction;
///     type Context<'a> = &'a Translator;
///
///     fn title(_state: &Self::State, t: &Self::Context<'_>) -> String {
///         t.t("myDialog.title")
///     }
///
///     fn render(
///         state: &mut Self::State,
///         ctx: Self::Context<'_>,
///         ui: &mut Ui,
///     ) -> DialogAction<Self::Action> {
///         DialogAction::None
///     }
/// }
/// ```
pub trait Dialog {
    /// The state type for this dialog
    type State: DialogState;

    /// The action type this dialog can produce
    type Action;

    /// The context type needed to render this dialog
    type Context<'a>;

    /// Window title, usually translated
    fn title(state: &Self::State, ctx: &Self::Context<'_>) -> String;

    /// Width of the dialog body in points
    fn width() -> f32 {
        400.0
    }

    /// Render the dialog content
    fn render(
        state: &mut Self::State,
        ctx: Self::Context<'_>,
        ui: &mut Ui,
    ) -> DialogAction<Self::Action>;
}

/// Show a dialog using the Dialog trait
///
/// - Only renders if `is_open` is true
/// - Dialogs are modal: they dim and block the rest of the UI, and
///   dismissing the backdrop (click outside, Escape) counts as
///   [`DialogAction::Close`]
/// - Handles closing and state reset
///
/// Returns `Some(action)` if the dialog produced an action, `None` otherwise.
pub fn show_dialog<D: Dialog>(
    ctx: &Context,
    is_open: &mut bool,
    state: &mut D::State,
    dialog_ctx: D::Context<'_>,
) -> Option<D::Action> {
    if !*is_open {
        return None;
    }

    let title = D::title(state, &dialog_ctx);

    let modal = egui::Modal::new(egui::Id::new(("modal_dialog", title.as_str()))).show(
        ctx,
        |ui| {
            ui.set_width(D::width());
            ui.heading(visual(&title));
            ui.separator();
            D::render(state, dialog_ctx, ui)
        },
    );

    let dismissed = modal.should_close();
    let action = match modal.inner {
        DialogAction::None if dismissed => DialogAction::Close,
        action => action,
    };

    if action.should_close() {
        *is_open = false;
        state.reset();
    }

    action.into_action()
}

pub mod alert;

pub use alert::{AlertAction, SubmissionAlertDialog, SubmissionAlertState};
