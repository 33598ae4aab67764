//! Field primitives for the intake UI
//!
//! Stateless egui widgets. Each renders a label with an optional required
//! marker, the control itself and an optional validation message, and
//! reports edits through the `on_change` callback it was built with.
//! Captions are reordered with [`visual`]; typed text is left as entered.
//!
//! # Widgets
//!
//! - [`TextInput`] - Single-line text field
//! - [`TextArea`] - Multi-line text field
//! - [`Select`] - Drop-down over a list of [`SelectOption`]s

use egui::{Color32, Response, RichText, Ui, Widget};

use super::bidi::visual;

/// Colour of the required marker and validation messages
pub const ERROR_COLOR: Color32 = Color32::from_rgb(220, 38, 38);

/// Kind of single-line input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Tel,
}

/// A value/label pair offered by a [`Select`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption<T> {
    pub value: T,
    pub label: String,
}

impl<T> SelectOption<T> {
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

fn field_label(ui: &mut Ui, label: Option<&str>, required: bool) {
    if let Some(label) = label {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label(RichText::new(visual(label)).strong());
            if required {
                ui.label(RichText::new("*").color(ERROR_COLOR));
            }
        });
    }
}

fn field_error(ui: &mut Ui, error: Option<&str>) {
    if let Some(error) = error {
        ui.label(RichText::new(visual(error)).small().color(ERROR_COLOR));
    }
}

/// Single-line text input
pub struct TextInput<'a, F: FnMut(String)> {
    value: &'a str,
    on_change: F,
    label: Option<String>,
    placeholder: Option<String>,
    error: Option<String>,
    required: bool,
    kind: InputKind,
}

impl<'a, F: FnMut(String)> TextInput<'a, F> {
    pub fn new(value: &'a str, on_change: F) -> Self {
        Self {
            value,
            on_change,
            label: None,
            placeholder: None,
            error: None,
            required: false,
            kind: InputKind::Text,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }
}

impl<F: FnMut(String)> Widget for TextInput<'_, F> {
    fn ui(mut self, ui: &mut Ui) -> Response {
        ui.vertical(|ui| {
            field_label(ui, self.label.as_deref(), self.required);

            let mut buffer = self.value.to_string();
            let mut edit = egui::TextEdit::singleline(&mut buffer).desired_width(f32::INFINITY);
            if let Some(placeholder) = &self.placeholder {
                edit = edit.hint_text(visual(placeholder));
            }
            if self.error.is_some() {
                edit = edit.text_color(ERROR_COLOR);
            }

            let response = ui.add(edit);
            if response.changed() {
                tracing::trace!("{:?} input changed", self.kind);
                (self.on_change)(buffer);
            }

            field_error(ui, self.error.as_deref());
            ui.add_space(8.0);
        })
        .response
    }
}

/// Multi-line text input
pub struct TextArea<'a, F: FnMut(String)> {
    value: &'a str,
    on_change: F,
    label: Option<String>,
    placeholder: Option<String>,
    error: Option<String>,
    required: bool,
    rows: usize,
}

impl<'a, F: FnMut(String)> TextArea<'a, F> {
    pub fn new(value: &'a str, on_change: F) -> Self {
        Self {
            value,
            on_change,
            label: None,
            placeholder: None,
            error: None,
            required: false,
            rows: 4,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }
}

impl<F: FnMut(String)> Widget for TextArea<'_, F> {
    fn ui(mut self, ui: &mut Ui) -> Response {
        ui.vertical(|ui| {
            field_label(ui, self.label.as_deref(), self.required);

            let mut buffer = self.value.to_string();
            let mut edit = egui::TextEdit::multiline(&mut buffer)
                .desired_rows(self.rows)
                .desired_width(f32::INFINITY);
            if let Some(placeholder) = &self.placeholder {
                edit = edit.hint_text(visual(placeholder));
            }

            if ui.add(edit).changed() {
                (self.on_change)(buffer);
            }

            field_error(ui, self.error.as_deref());
            ui.add_space(8.0);
        })
        .response
    }
}

/// Drop-down selection over a fixed list of options
pub struct Select<'a, T, F>
where
    T: Clone + PartialEq,
    F: FnMut(T),
{
    id_salt: &'a str,
    options: &'a [SelectOption<T>],
    selected: &'a T,
    on_change: F,
    label: Option<String>,
    required: bool,
}

impl<'a, T, F> Select<'a, T, F>
where
    T: Clone + PartialEq,
    F: FnMut(T),
{
    pub fn new(
        id_salt: &'a str,
        options: &'a [SelectOption<T>],
        selected: &'a T,
        on_change: F,
    ) -> Self {
        Self {
            id_salt,
            options,
            selected,
            on_change,
            label: None,
            required: false,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

impl<T, F> Widget for Select<'_, T, F>
where
    T: Clone + PartialEq,
    F: FnMut(T),
{
    fn ui(mut self, ui: &mut Ui) -> Response {
        ui.vertical(|ui| {
            field_label(ui, self.label.as_deref(), self.required);

            let selected_text = self
                .options
                .iter()
                .find(|o| o.value == *self.selected)
                .map(|o| visual(&o.label).into_owned())
                .unwrap_or_default();

            let mut current = self.selected.clone();
            egui::ComboBox::from_id_salt(self.id_salt)
                .selected_text(selected_text)
                .width(ui.available_width())
                .show_ui(ui, |ui| {
                    for option in self.options {
                        ui.selectable_value(&mut current, option.value.clone(), visual(&option.label));
                    }
                });

            if current != *self.selected {
                (self.on_change)(current);
            }

            ui.add_space(8.0);
        })
        .response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_option_new() {
        let option = SelectOption::new(3u8, "three");
        assert_eq!(option.value, 3);
        assert_eq!(option.label, "three");
    }

    #[test]
    fn test_input_kind_default() {
        assert_eq!(InputKind::default(), InputKind::Text);
    }

    #[test]
    fn test_widgets_render_without_invoking_callbacks() {
        let ctx = egui::Context::default();
        let options = [SelectOption::new(1, "one"), SelectOption::new(2, "two")];
        let mut calls = 0;

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.add(
                    TextInput::new("value", |_| calls += 1)
                        .label("Name")
                        .required(true)
                        .error(Some("Required".to_string())),
                );
                ui.add(TextArea::new("", |_| calls += 1).rows(6).placeholder("..."));
                ui.add(Select::new("numbers", &options, &2, |_| calls += 1).label("Pick"));
            });
        });

        assert_eq!(calls, 0);
    }
}
