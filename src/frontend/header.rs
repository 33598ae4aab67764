//! Header bar: application title, language switcher and login stub.

use egui::{RichText, Ui};

use super::bidi::visual;
use crate::i18n::{Language, Translator};

/// Something the user asked for in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    SwitchLanguage(Language),
    /// Login is not implemented; the button only reports the click
    Login,
}

/// Render the header. Returns the action triggered this frame, if any.
pub fn render_header(ui: &mut Ui, translator: &Translator) -> Option<HeaderAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.heading(visual(&translator.t("header.title")));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button(RichText::new(visual(&translator.t("header.login"))).strong())
                .clicked()
            {
                action = Some(HeaderAction::Login);
            }

            if let Some(language) = render_language_switcher(ui, translator.language()) {
                action = Some(HeaderAction::SwitchLanguage(language));
            }
        });
    });

    action
}

/// Drop-down of the supported languages, shown by their native names
pub fn render_language_switcher(ui: &mut Ui, current: Language) -> Option<Language> {
    let mut selected = current;

    egui::ComboBox::from_id_salt("header_language_switcher")
        .selected_text(visual(current.display_name()))
        .show_ui(ui, |ui| {
            for language in Language::all() {
                ui.selectable_value(&mut selected, *language, visual(language.display_name()));
            }
        });

    (selected != current).then_some(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::MemoryBackend;

    #[test]
    fn test_header_renders_without_action() {
        let translator = Translator::new(
            Box::new(MemoryBackend::new().with_catalog(
                Language::Russian,
                r#"{"header":{"title":"Приём заявок","login":"Войти"}}"#,
            )),
            Language::Russian,
            Language::Hebrew,
        );
        let ctx = egui::Context::default();
        let mut action = None;

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::TopBottomPanel::top("header").show(ctx, |ui| {
                action = render_header(ui, &translator);
            });
        });

        assert!(action.is_none());
    }
}
