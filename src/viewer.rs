//! Main LegendView struct - the WASM-facing entry point.
//!
//! Owns a [`Legend`], the chart's [`ChartData`], and a Canvas 2D surface,
//! and coordinates entry generation, measurement, and rendering. Legend and
//! viewport configuration arrive as plain JS objects (camelCase keys).

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::layout::{BasicMeasurer, ViewportHandler};
use crate::render::{CanvasSurface, LegendRenderer};
use crate::types::{ChartData, Legend};

/// Renders a chart legend onto an HTML canvas.
#[wasm_bindgen]
pub struct LegendView {
    legend: Legend,
    data: ChartData,
    renderer: LegendRenderer,
    surface: CanvasSurface,
}

#[wasm_bindgen]
impl LegendView {
    /// Create a view drawing onto `canvas`. The viewport initially spans the
    /// canvas backing size with zero content insets.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: &HtmlCanvasElement) -> Result<LegendView, JsValue> {
        console_error_panic_hook::set_once();

        let surface = CanvasSurface::new(canvas).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let viewport = ViewportHandler::new(canvas.width() as f32, canvas.height() as f32);

        Ok(LegendView {
            legend: Legend::new(),
            data: ChartData::default(),
            renderer: LegendRenderer::new(viewport),
            surface,
        })
    }

    /// Replace the legend configuration (entries are regenerated on the next
    /// `render`).
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsValue> {
        self.legend =
            serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    /// Replace the plotted series. Series arriving without colors fall back
    /// to the default palette.
    pub fn set_data(&mut self, data: JsValue) -> Result<(), JsValue> {
        let mut data: ChartData =
            serde_wasm_bindgen::from_value(data).map_err(|e| JsValue::from_str(&e.to_string()))?;
        data.apply_default_palette();
        self.data = data;
        Ok(())
    }

    /// Replace the viewport geometry (canvas size and content insets).
    pub fn set_viewport(&mut self, viewport: JsValue) -> Result<(), JsValue> {
        self.renderer.viewport =
            serde_wasm_bindgen::from_value(viewport).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    /// Update the viewport to a new canvas size, keeping content insets.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.renderer.viewport.chart_width = width;
        self.renderer.viewport.chart_height = height;
    }

    /// Regenerate entries, measure, and draw the legend.
    pub fn render(&mut self) {
        let measurer = BasicMeasurer::new(&self.surface);
        self.renderer
            .compute_legend(&mut self.legend, &self.data, &measurer);
        self.renderer.render(&self.legend, &mut self.surface);
    }

    /// The current legend entries as a JS array (for inspection/tooling).
    pub fn entries(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.legend.entries())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
