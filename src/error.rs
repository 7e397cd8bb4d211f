//! Structured error types for legendview.
//!
//! Legend generation and layout themselves cannot fail: index ranges are
//! `min(...)`-guarded and every style override resolves through a defined
//! fallback chain. Errors arise at the edges, when parsing colors or JSON
//! and when acquiring the canvas context.

/// All errors that can occur in legendview.
#[derive(Debug, thiserror::Error)]
pub enum LegendviewError {
    /// Invalid color string.
    #[error("Invalid color: {0}")]
    Color(String),

    /// Rendering surface error (e.g. canvas context unavailable).
    #[error("Render error: {0}")]
    Render(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LegendviewError>;

impl From<String> for LegendviewError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for LegendviewError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<LegendviewError> for wasm_bindgen::JsValue {
    fn from(e: LegendviewError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
