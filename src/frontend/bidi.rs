//! Visual ordering for right-to-left text
//!
//! egui paints glyphs left to right in logical order, which shows Hebrew
//! backwards. Display strings are run through the Unicode bidirectional
//! algorithm first so Hebrew words read correctly while embedded numbers and
//! Latin runs keep their order.

use std::borrow::Cow;
use unicode_bidi::BidiInfo;

/// Whether `c` belongs to a right-to-left script block
fn is_rtl_char(c: char) -> bool {
    matches!(
        c as u32,
        0x0590..=0x08FF | 0xFB1D..=0xFDFF | 0xFE70..=0xFEFF
    )
}

/// Returns true if the text contains any right-to-left characters
pub fn has_rtl(text: &str) -> bool {
    text.chars().any(is_rtl_char)
}

/// `text` reordered for display. Text without RTL characters is returned
/// unchanged.
pub fn visual(text: &str) -> Cow<'_, str> {
    if !has_rtl(text) {
        return Cow::Borrowed(text);
    }

    let info = BidiInfo::new(text, None);
    let mut out = String::with_capacity(text.len());
    for para in &info.paragraphs {
        out.push_str(&info.reorder_line(para, para.range.clone()));
    }
    Cow::Owned(out)
}
