//! Headless drawing surface that records operations instead of rasterizing.
//!
//! Used by the test suite to assert exact marker/label coordinates, and
//! handy for debugging layout without a browser canvas.

use crate::color::Color;
use crate::types::Font;

use super::backend::DrawSurface;

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Save,
    Restore,
    SetFillColor(Color),
    FillRect { x: f32, y: f32, width: f32, height: f32 },
    FillEllipse { x: f32, y: f32, width: f32, height: f32 },
    SetStrokeColor(Color),
    SetLineWidth(f32),
    SetLineDash { phase: f32, lengths: Vec<f32> },
    StrokeLine { x1: f32, y1: f32, x2: f32, y2: f32 },
    FillText { text: String, x: f32, y: f32, color: Color },
}

/// Records every draw call in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded label draws as `(text, x, y)` triples, in draw order.
    pub fn texts(&self) -> Vec<(&str, f32, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillText { text, x, y, .. } => Some((text.as_str(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    /// Recorded fill/stroke shape operations (state changes excluded).
    pub fn shapes(&self) -> Vec<&DrawOp> {
        self.ops
            .iter()
            .filter(|op| {
                matches!(
                    op,
                    DrawOp::FillRect { .. }
                        | DrawOp::FillEllipse { .. }
                        | DrawOp::StrokeLine { .. }
                )
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }

    fn set_fill_color(&mut self, color: &Color) {
        self.ops.push(DrawOp::SetFillColor(*color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(DrawOp::FillRect { x, y, width, height });
    }

    fn fill_ellipse(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(DrawOp::FillEllipse { x, y, width, height });
    }

    fn set_stroke_color(&mut self, color: &Color) {
        self.ops.push(DrawOp::SetStrokeColor(*color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.ops.push(DrawOp::SetLineWidth(width));
    }

    fn set_line_dash(&mut self, phase: f32, lengths: &[f32]) {
        self.ops.push(DrawOp::SetLineDash {
            phase,
            lengths: lengths.to_vec(),
        });
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.ops.push(DrawOp::StrokeLine { x1, y1, x2, y2 });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, _font: &Font, color: &Color) {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            x,
            y,
            color: *color,
        });
    }
}
