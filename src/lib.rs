//! legendview - chart legend rendering for the web
//!
//! Generates, lays out, and draws chart legends in the browser via
//! WebAssembly and Canvas 2D:
//! - Entry generation from plain, stacked-bar, pie, and candle series
//! - Horizontal/vertical orientation, 3×3 alignment, LTR/RTL direction
//! - Multi-line wrapping from precomputed break points
//! - Grouped ("stacked") markers sharing one caption
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { LegendView } from 'legendview';
//! await init();
//! const view = new LegendView(canvas);
//! view.set_data({ series: [...] });
//! view.set_config({ orientation: 'vertical', verticalAlignment: 'top' });
//! view.render();
//! ```

// Data model
pub mod color;
pub mod error;
pub mod types;

// Layout collaborators
pub mod layout;

// Rendering
pub mod render;
pub mod viewer;

use wasm_bindgen::prelude::*;

// Re-export the main viewer struct
pub use viewer::LegendView;

pub use types::*;

fn entries_json(data_json: &str) -> error::Result<String> {
    let mut data: ChartData = serde_json::from_str(data_json)?;
    data.apply_default_palette();

    let entries = render::generate_entries(&data);
    Ok(serde_json::to_string(&entries)?)
}

/// Generate the legend entries for a chart's series, as JSON.
///
/// # Arguments
/// * `data_json` - A JSON `ChartData` object (`{"series": [...]}`)
///
/// # Returns
/// A JSON array of legend entries, in draw order.
///
/// # Errors
/// Returns an error if `data_json` is not valid `ChartData` JSON.
#[wasm_bindgen]
pub fn legend_entries_json(data_json: &str) -> Result<String, JsValue> {
    entries_json(data_json).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_json_for_plain_series() {
        let json = r##"{"series":[{"label":"Revenue","colors":["#4472C4"],"entryCount":1}]}"##;
        let out = entries_json(json).unwrap();
        assert!(out.contains("\"label\":\"Revenue\""), "{out}");
        assert!(out.contains("\"formColor\":\"#4472C4\""), "{out}");
    }

    #[test]
    fn test_entries_json_fills_missing_colors_from_palette() {
        let json = r#"{"series":[{"label":"s","entryCount":2}]}"#;
        let out = entries_json(json).unwrap();
        assert!(out.contains("\"formColor\":\"#4472C4\""), "{out}");
        assert!(out.contains("\"formColor\":\"#ED7D31\""), "{out}");
    }

    #[test]
    fn test_entries_json_invalid_input_is_a_json_error() {
        let err = entries_json("not json").unwrap_err();
        assert!(matches!(err, error::LegendviewError::Json(_)));
        assert!(err.to_string().starts_with("JSON:"));
    }
}
