//! Font setup
//!
//! egui's bundled fonts cover Latin and Cyrillic but not Hebrew. DejaVu Sans
//! is appended to every family so Hebrew glyphs are found as a fallback.

use egui::{FontData, FontDefinitions, FontFamily};
use std::sync::Arc;

const HEBREW_FALLBACK: &str = "DejaVuSans";

static HEBREW_FALLBACK_TTF: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// egui's default fonts plus the Hebrew fallback
pub fn font_definitions() -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    fonts.font_data.insert(
        HEBREW_FALLBACK.to_owned(),
        Arc::new(FontData::from_static(HEBREW_FALLBACK_TTF)),
    );

    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(HEBREW_FALLBACK.to_owned());
    }

    fonts
}

/// Install the fonts on a context. Takes effect from the next frame.
pub fn install(ctx: &egui::Context) {
    ctx.set_fonts(font_definitions());
}
