//! Drawing surface trait for pluggable rendering implementations.
//!
//! This module defines the `DrawSurface` trait that abstracts the 2D
//! primitives the legend renderer needs, allowing different surfaces
//! (Canvas 2D, a headless recording surface) to be used interchangeably.
//! Style state set between `save`/`restore` must not leak past `restore`.

use crate::color::Color;
use crate::types::Font;

/// Trait for 2D drawing surfaces.
///
/// Operations are infallible: surfaces swallow backend-level failures the way
/// a lost canvas context does, rather than aborting a render pass mid-frame.
pub trait DrawSurface {
    /// Push the current graphics state (colors, line style).
    fn save(&mut self);

    /// Pop back to the most recently saved graphics state.
    fn restore(&mut self);

    fn set_fill_color(&mut self, color: &Color);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Fill the ellipse inscribed in the given rectangle.
    fn fill_ellipse(&mut self, x: f32, y: f32, width: f32, height: f32);

    fn set_stroke_color(&mut self, color: &Color);

    fn set_line_width(&mut self, width: f32);

    /// Set the dash pattern. An empty `lengths` slice means a solid line.
    fn set_line_dash(&mut self, phase: f32, lengths: &[f32]);

    /// Stroke a single line segment with the current stroke style.
    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    /// Draw `text` left-anchored at `(x, y)` (top of the text box).
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &Font, color: &Color);
}
