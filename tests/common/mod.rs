//! Shared helpers for legend integration tests.

#![allow(dead_code)]

use legendview::color::Color;
use legendview::layout::TextMeasurer;
use legendview::types::{Font, LegendEntry, Size};

/// Width of one glyph under [`FixedWidth`] measurement.
pub const CHAR_W: f32 = 6.0;

/// Fixed-width text measurement: `CHAR_W` per char, line-height tall.
pub struct FixedWidth;

impl TextMeasurer for FixedWidth {
    fn text_size(&self, text: &str, font: &Font) -> Size {
        Size::new(text.chars().count() as f32 * CHAR_W, font.line_height())
    }
}

pub const RED: Color = Color::rgb(255, 0, 0);

/// A labeled entry with a drawable marker.
pub fn labeled(label: &str) -> LegendEntry {
    LegendEntry {
        label: Some(label.to_string()),
        form_color: Some(RED),
        ..Default::default()
    }
}

/// A grouped (label-absent) entry with a drawable marker.
pub fn marker() -> LegendEntry {
    LegendEntry {
        form_color: Some(RED),
        ..Default::default()
    }
}
