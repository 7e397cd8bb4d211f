use serde::{Deserialize, Serialize};

use crate::color::{Color, DEFAULT_SERIES_COLORS};

use super::LegendForm;

/// Shape category of a data series. The legend generator dispatches on this
/// tag; a series carries exactly the fields its shape needs.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum SeriesKind {
    /// Any series without special legend treatment.
    #[default]
    Plain,
    /// Bar series with stacked values; one marker per stack slot.
    StackedBar {
        /// Number of values per stack.
        stack_size: usize,
        /// Per-slot captions. Empty means grouped markers without captions.
        stack_labels: Vec<String>,
    },
    /// Pie series; one marker per slice, captioned by the slice's own label.
    Pie {
        /// Per-slice labels, parallel to the data points.
        slice_labels: Vec<Option<String>>,
    },
    /// Candle series with distinct increasing/decreasing colors.
    Candle {
        #[serde(skip_serializing_if = "Option::is_none")]
        increasing_color: Option<Color>,
        /// Without a decreasing color the series gets plain legend treatment.
        #[serde(skip_serializing_if = "Option::is_none")]
        decreasing_color: Option<Color>,
    },
}

/// Read-only view of one plotted data series, as consumed by the legend
/// generator. Style fields are shared by every marker the series produces;
/// `None` inherits the legend-wide default.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DataSeries {
    /// Series caption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Per-value colors.
    pub colors: Vec<Color>,
    /// Number of data points in the series.
    pub entry_count: usize,

    pub form: LegendForm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_line_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_line_dash_phase: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_line_dash_lengths: Option<Vec<f32>>,

    pub kind: SeriesKind,
}

impl DataSeries {
    pub fn new(label: Option<&str>, colors: Vec<Color>, entry_count: usize) -> Self {
        Self {
            label: label.map(str::to_string),
            colors,
            entry_count,
            ..Default::default()
        }
    }
}

/// The ordered series list of one chart.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub series: Vec<DataSeries>,
}

impl ChartData {
    pub fn new(series: Vec<DataSeries>) -> Self {
        Self { series }
    }

    /// Color every colorless series from the default palette, cycling when a
    /// series has more values than the palette has colors. Series that carry
    /// explicit colors are left alone.
    pub fn apply_default_palette(&mut self) {
        for series in &mut self.series {
            if series.colors.is_empty() && series.entry_count > 0 {
                series.colors = (0..series.entry_count)
                    .map(|i| {
                        DEFAULT_SERIES_COLORS
                            .get(i % DEFAULT_SERIES_COLORS.len())
                            .copied()
                            .unwrap_or(Color::BLACK)
                    })
                    .collect();
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_series_kind_json_tagging() {
        let kind = SeriesKind::StackedBar {
            stack_size: 3,
            stack_labels: vec!["a".to_string(), "b".to_string()],
        };
        let json = serde_json::to_string(&kind).unwrap();
        assert!(json.contains("\"kind\":\"stackedBar\""), "{json}");
        let back: SeriesKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kind);
    }

    #[test]
    fn test_series_defaults() {
        let s = DataSeries::new(Some("Revenue"), vec![Color::BLACK], 1);
        assert_eq!(s.kind, SeriesKind::Plain);
        assert_eq!(s.form, LegendForm::Default);
        assert!(s.form_size.is_none());
    }

    #[test]
    fn test_default_palette_fills_colorless_series() {
        let mut data = ChartData::new(vec![
            DataSeries::new(Some("a"), vec![], 7),
            DataSeries::new(Some("b"), vec![Color::BLACK], 1),
        ]);
        data.apply_default_palette();

        let a = &data.series[0];
        assert_eq!(a.colors.len(), 7);
        assert_eq!(a.colors[5], a.colors[0]);
        assert_eq!(a.colors[6], a.colors[1]);
        assert_eq!(data.series[1].colors, vec![Color::BLACK]);
    }
}
