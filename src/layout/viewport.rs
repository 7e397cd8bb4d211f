//! Viewport geometry supplied by the chart view.

use serde::{Deserialize, Serialize};

/// Canvas size plus the insets that frame the chart's content rectangle.
/// The legend layout reads it; it never writes back.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewportHandler {
    /// Full canvas width in logical pixels.
    pub chart_width: f32,
    /// Full canvas height in logical pixels.
    pub chart_height: f32,
    /// Inset of the content rectangle from the left canvas edge.
    pub offset_left: f32,
    pub offset_top: f32,
    pub offset_right: f32,
    pub offset_bottom: f32,
}

impl Default for ViewportHandler {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl ViewportHandler {
    /// Viewport with zero content insets.
    pub fn new(chart_width: f32, chart_height: f32) -> Self {
        Self {
            chart_width,
            chart_height,
            offset_left: 0.0,
            offset_top: 0.0,
            offset_right: 0.0,
            offset_bottom: 0.0,
        }
    }

    /// Set all four content insets at once.
    pub fn set_offsets(&mut self, left: f32, top: f32, right: f32, bottom: f32) {
        self.offset_left = left;
        self.offset_top = top;
        self.offset_right = right;
        self.offset_bottom = bottom;
    }

    pub fn content_left(&self) -> f32 {
        self.offset_left
    }

    pub fn content_top(&self) -> f32 {
        self.offset_top
    }

    pub fn content_right(&self) -> f32 {
        self.chart_width - self.offset_right
    }

    pub fn content_bottom(&self) -> f32 {
        self.chart_height - self.offset_bottom
    }

    pub fn content_width(&self) -> f32 {
        (self.content_right() - self.content_left()).max(0.0)
    }

    pub fn content_height(&self) -> f32 {
        (self.content_bottom() - self.content_top()).max(0.0)
    }
}
