//! Canvas 2D implementation of the drawing surface.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color::Color;
use crate::error::{LegendviewError, Result};
use crate::layout::TextMeasurer;
use crate::render::backend::DrawSurface;
use crate::types::{Font, Size};

/// Draws onto an HTML canvas through its 2D context. Also measures text via
/// `measureText`, so it doubles as the [`TextMeasurer`] collaborator.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| LegendviewError::Render("failed to get 2d context".to_string()))?
            .ok_or_else(|| LegendviewError::Render("canvas has no 2d context".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| LegendviewError::Render("not a CanvasRenderingContext2d".to_string()))?;

        Ok(Self { ctx })
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }
}

impl DrawSurface for CanvasSurface {
    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_fill_color(&mut self, color: &Color) {
        self.ctx.set_fill_style_str(&color.to_css());
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx.fill_rect(
            f64::from(x),
            f64::from(y),
            f64::from(width),
            f64::from(height),
        );
    }

    fn fill_ellipse(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let rx = f64::from(width) / 2.0;
        let ry = f64::from(height) / 2.0;
        self.ctx.begin_path();
        let _ = self
            .ctx
            .ellipse(f64::from(x) + rx, f64::from(y) + ry, rx, ry, 0.0, 0.0, TAU);
        self.ctx.fill();
    }

    fn set_stroke_color(&mut self, color: &Color) {
        self.ctx.set_stroke_style_str(&color.to_css());
    }

    fn set_line_width(&mut self, width: f32) {
        self.ctx.set_line_width(f64::from(width));
    }

    fn set_line_dash(&mut self, phase: f32, lengths: &[f32]) {
        let segments = js_sys::Array::new();
        for len in lengths {
            segments.push(&JsValue::from_f64(f64::from(*len)));
        }
        let _ = self.ctx.set_line_dash(&segments);
        self.ctx.set_line_dash_offset(f64::from(phase));
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(f64::from(x1), f64::from(y1));
        self.ctx.line_to(f64::from(x2), f64::from(y2));
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &Font, color: &Color) {
        self.ctx.set_font(&font.to_css());
        self.ctx.set_text_align("left");
        self.ctx.set_text_baseline("top");
        self.ctx.set_fill_style_str(&color.to_css());
        let _ = self.ctx.fill_text(text, f64::from(x), f64::from(y));
    }
}

impl TextMeasurer for CanvasSurface {
    #[allow(clippy::cast_possible_truncation)]
    fn text_size(&self, text: &str, font: &Font) -> Size {
        self.ctx.set_font(&font.to_css());
        let width = self
            .ctx
            .measure_text(text)
            .map(|m| m.width() as f32)
            .unwrap_or(0.0);
        Size::new(width, font.line_height())
    }
}
