use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Marker shape for a legend entry.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum LegendForm {
    /// Nothing is drawn and no space is reserved.
    None,
    /// Nothing is drawn but the marker's space is kept.
    Empty,
    /// Resolves to the legend's default form at draw time.
    #[default]
    Default,
    /// Filled circle.
    Circle,
    /// Filled square.
    Square,
    /// Horizontal line segment.
    Line,
}

/// Overall legend flow direction.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum LegendOrientation {
    /// Entries flow left-right, wrapping into lines at precomputed break points.
    #[default]
    Horizontal,
    /// Entries flow top-bottom, one labeled entry per line.
    Vertical,
}

/// Horizontal anchor of the legend within the chart.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum LegendHorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical anchor of the legend within the chart.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum LegendVerticalAlignment {
    Top,
    Center,
    #[default]
    Bottom,
}

/// Reading direction. Affects draw order and the sign of positional deltas.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum LegendDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// A width/height pair in logical pixels.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Label font. The backend turns this into a CSS font shorthand.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Font {
    pub family: String,
    /// Font size in logical pixels.
    pub size: f32,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: "Calibri, Arial, sans-serif".to_string(),
            size: 10.0,
        }
    }
}

impl Font {
    pub fn new(family: &str, size: f32) -> Self {
        Self { family: family.to_string(), size }
    }

    /// Line height used for legend line advances.
    pub fn line_height(&self) -> f32 {
        self.size * 1.2
    }

    /// CSS font shorthand for Canvas 2D.
    pub fn to_css(&self) -> String {
        format!("{}px {}", self.size, self.family)
    }
}

/// One visual legend row: a marker plus an optional caption.
///
/// A `None` label marks a grouped ("stacked") marker that is rendered adjacent
/// to its siblings under one shared caption entry. Every style field resolves
/// independently: entry override if set, else the legend-wide default.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    /// Caption text. `None` marks a grouped marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Overrides the legend-wide label color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_color: Option<Color>,
    /// Marker shape.
    #[serde(default)]
    pub form: LegendForm,
    /// Marker size override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_size: Option<f32>,
    /// Line width override (only meaningful for `LegendForm::Line`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_line_width: Option<f32>,
    /// Dash phase override (only meaningful for `LegendForm::Line`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_line_dash_phase: Option<f32>,
    /// Dash pattern override. `None` inherits the legend default; an inherited
    /// `None` means a solid line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_line_dash_lengths: Option<Vec<f32>>,
    /// Marker color. `None` or fully transparent markers are never drawn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_color: Option<Color>,
}

impl LegendEntry {
    pub fn new(label: Option<String>) -> Self {
        Self {
            label,
            ..Default::default()
        }
    }
}

/// Layout metrics supplied by the external dimension-measurement pass,
/// indexed in lockstep with the legend's entry sequence.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LegendMetrics {
    /// Total width the legend needs.
    pub needed_width: f32,
    /// Total height the legend needs.
    pub needed_height: f32,
    /// One size per visual line (horizontal orientation).
    pub line_sizes: Vec<Size>,
    /// One size per entry label (zero for unlabeled entries).
    pub label_sizes: Vec<Size>,
    /// `true` at index `i` means "insert a line break before entry `i`".
    pub label_break_points: Vec<bool>,
}

/// Legend configuration and state, owned by the chart view.
///
/// The entry list and the cached metrics are replaced wholesale on each
/// generation/measurement pass; the renderer only reads them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Legend {
    /// Disabled legends render nothing.
    pub enabled: bool,

    /// Generated entries plus `extra_entries`, or caller-supplied entries in
    /// custom mode. Replaced atomically via [`Legend::replace_entries`] /
    /// [`Legend::set_custom`].
    #[serde(skip)]
    entries: Vec<LegendEntry>,
    /// In custom mode the generator must not run.
    #[serde(skip)]
    custom: bool,
    /// Entries appended verbatim after the generated ones.
    pub extra_entries: Vec<LegendEntry>,

    /// Default marker shape, used by entries with `LegendForm::Default`.
    pub form: LegendForm,
    /// Default marker size.
    pub form_size: f32,
    /// Default line width for `LegendForm::Line` markers.
    pub form_line_width: f32,
    /// Default dash phase for `LegendForm::Line` markers.
    pub form_line_dash_phase: f32,
    /// Default dash pattern. `None` means solid.
    pub form_line_dash_lengths: Option<Vec<f32>>,

    /// Default label color.
    pub text_color: Color,
    /// Label font.
    pub font: Font,

    pub orientation: LegendOrientation,
    pub horizontal_alignment: LegendHorizontalAlignment,
    pub vertical_alignment: LegendVerticalAlignment,
    pub direction: LegendDirection,

    /// Horizontal inset from the resolved anchor.
    pub x_offset: f32,
    /// Vertical inset from the resolved anchor.
    pub y_offset: f32,
    /// Horizontal gap after a labeled entry.
    pub x_entry_space: f32,
    /// Extra vertical gap between lines.
    pub y_entry_space: f32,
    /// Gap between a drawn marker and its label.
    pub form_to_text_space: f32,
    /// Horizontal gap between grouped markers.
    pub stack_space: f32,

    /// Metrics from the last measurement pass.
    #[serde(skip)]
    metrics: LegendMetrics,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            enabled: true,
            entries: Vec::new(),
            custom: false,
            extra_entries: Vec::new(),
            form: LegendForm::Square,
            form_size: 8.0,
            form_line_width: 3.0,
            form_line_dash_phase: 0.0,
            form_line_dash_lengths: None,
            text_color: Color::BLACK,
            font: Font::default(),
            orientation: LegendOrientation::default(),
            horizontal_alignment: LegendHorizontalAlignment::default(),
            vertical_alignment: LegendVerticalAlignment::default(),
            direction: LegendDirection::default(),
            x_offset: 5.0,
            y_offset: 3.0,
            x_entry_space: 6.0,
            y_entry_space: 0.0,
            form_to_text_space: 5.0,
            stack_space: 3.0,
            metrics: LegendMetrics::default(),
        }
    }
}

impl Legend {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current entry sequence.
    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    /// Whether the entries were supplied by the caller rather than generated.
    pub fn is_custom(&self) -> bool {
        self.custom
    }

    /// Supply the entry list directly, bypassing generation until
    /// [`Legend::reset_custom`] is called.
    pub fn set_custom(&mut self, entries: Vec<LegendEntry>) {
        self.entries = entries;
        self.custom = true;
    }

    /// Leave custom mode; the next generation pass repopulates the entries.
    pub fn reset_custom(&mut self) {
        self.custom = false;
    }

    /// Replace the generated entry list. No-op in custom mode.
    pub fn replace_entries(&mut self, entries: Vec<LegendEntry>) {
        if !self.custom {
            self.entries = entries;
        }
    }

    /// Metrics from the last measurement pass.
    pub fn metrics(&self) -> &LegendMetrics {
        &self.metrics
    }

    /// Store the output of a measurement pass, replacing the previous one.
    pub fn set_metrics(&mut self, metrics: LegendMetrics) {
        self.metrics = metrics;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_defaults_inherit() {
        let e = LegendEntry::new(Some("Sales".to_string()));
        assert_eq!(e.form, LegendForm::Default);
        assert!(e.form_size.is_none());
        assert!(e.form_line_width.is_none());
        assert!(e.form_color.is_none());
    }

    #[test]
    fn test_custom_mode_blocks_replacement() {
        let mut legend = Legend::new();
        legend.set_custom(vec![LegendEntry::new(Some("manual".to_string()))]);

        legend.replace_entries(vec![]);
        assert_eq!(legend.entries().len(), 1);
        assert!(legend.is_custom());

        legend.reset_custom();
        legend.replace_entries(vec![]);
        assert!(legend.entries().is_empty());
    }

    #[test]
    fn test_font_line_height() {
        let font = Font::new("Arial", 10.0);
        assert_eq!(font.line_height(), 12.0);
        assert_eq!(font.to_css(), "10px Arial");
    }

    #[test]
    fn test_legend_config_json_round_trip() {
        let mut legend = Legend::new();
        legend.orientation = LegendOrientation::Vertical;
        legend.direction = LegendDirection::RightToLeft;
        legend.form = LegendForm::Circle;

        let json = serde_json::to_string(&legend).unwrap();
        let back: Legend = serde_json::from_str(&json).unwrap();
        assert_eq!(back.orientation, LegendOrientation::Vertical);
        assert_eq!(back.direction, LegendDirection::RightToLeft);
        assert_eq!(back.form, LegendForm::Circle);
    }
}
