//! Dimension measurement interfaces for the legend.
//!
//! The layout engine consumes precomputed [`LegendMetrics`]; producing them is
//! the job of a [`LegendMeasurer`] collaborator. [`BasicMeasurer`] is a
//! wrap-free implementation good enough for single-line horizontal legends and
//! vertical legends (where it reserves exactly the lines the renderer draws);
//! word wrapping and viewport clamping are left to richer implementations.

use crate::types::{Font, Legend, LegendForm, LegendMetrics, LegendOrientation, Size};

use super::ViewportHandler;

/// Measures rendered text. The Canvas 2D surface implements this via
/// `measureText`; tests use fixed-width stand-ins.
pub trait TextMeasurer {
    /// Size of `text` rendered with `font`. Height is the font line height.
    fn text_size(&self, text: &str, font: &Font) -> Size;
}

/// Produces the layout metrics for a legend's current entries.
pub trait LegendMeasurer {
    fn measure(&self, legend: &Legend, viewport: &ViewportHandler) -> LegendMetrics;
}

/// Wrap-free measurement: horizontal legends occupy a single line, vertical
/// legends one line per labeled entry plus one per stacked run.
pub struct BasicMeasurer<'a> {
    text: &'a dyn TextMeasurer,
}

impl<'a> BasicMeasurer<'a> {
    pub fn new(text: &'a dyn TextMeasurer) -> Self {
        Self { text }
    }
}

impl LegendMeasurer for BasicMeasurer<'_> {
    fn measure(&self, legend: &Legend, _viewport: &ViewportHandler) -> LegendMetrics {
        let entries = legend.entries();
        let line_height = legend.font.line_height();

        let label_sizes: Vec<Size> = entries
            .iter()
            .map(|e| {
                e.label
                    .as_deref()
                    .map_or(Size::ZERO, |label| self.text.text_size(label, &legend.font))
            })
            .collect();
        let label_break_points = vec![false; entries.len()];

        match legend.orientation {
            LegendOrientation::Horizontal => {
                let mut width = 0.0f32;
                let mut trailing_gap = 0.0f32;

                for (i, e) in entries.iter().enumerate() {
                    let drawing_form = e.form != LegendForm::None;
                    let form_size = if drawing_form {
                        e.form_size.unwrap_or(legend.form_size)
                    } else {
                        0.0
                    };

                    if e.label.is_some() {
                        if drawing_form {
                            width += form_size + legend.form_to_text_space;
                        }
                        width += label_sizes.get(i).map_or(0.0, |s| s.width);
                        width += legend.x_entry_space;
                        trailing_gap = legend.x_entry_space;
                    } else {
                        width += form_size + legend.stack_space;
                        trailing_gap = legend.stack_space;
                    }
                }
                // No gap after the last entry.
                width -= trailing_gap;
                let width = width.max(0.0);

                let line_sizes = if entries.is_empty() {
                    Vec::new()
                } else {
                    vec![Size::new(width, line_height)]
                };

                LegendMetrics {
                    needed_width: width,
                    needed_height: if entries.is_empty() { 0.0 } else { line_height },
                    line_sizes,
                    label_sizes,
                    label_break_points,
                }
            }
            LegendOrientation::Vertical => {
                // Mirrors the renderer's vertical walk so the reserved bounds
                // match what actually gets drawn, including the extra line a
                // stacked run's caption drops onto.
                let line_step = line_height + legend.y_entry_space;

                let mut max_width = 0.0f32;
                let mut stack = 0.0f32;
                let mut was_stacked = false;
                let mut pos_y = 0.0f32;
                let mut bottom = 0.0f32;

                for (i, e) in entries.iter().enumerate() {
                    let drawing_form = e.form != LegendForm::None;
                    let form_size = if drawing_form {
                        e.form_size.unwrap_or(legend.form_size)
                    } else {
                        0.0
                    };

                    if drawing_form {
                        max_width = max_width.max(stack + form_size);
                    }

                    if e.label.is_some() {
                        let label_width = label_sizes.get(i).map_or(0.0, |s| s.width);
                        // The caption of a stacked run starts back at the
                        // origin on its own line; only an unstacked marker
                        // contributes its size and the form-to-text gap to
                        // the label's line.
                        let line_width = if drawing_form && !was_stacked {
                            form_size + legend.form_to_text_space + label_width
                        } else {
                            label_width
                        };
                        max_width = max_width.max(line_width);

                        if was_stacked {
                            pos_y += line_step;
                        }
                        bottom = bottom.max(pos_y + line_height);
                        pos_y += line_step;
                        stack = 0.0;
                    } else {
                        stack += form_size + legend.stack_space;
                        was_stacked = true;
                        bottom = bottom.max(pos_y + line_height);
                    }
                }

                LegendMetrics {
                    needed_width: max_width,
                    needed_height: bottom,
                    line_sizes: Vec::new(),
                    label_sizes,
                    label_break_points,
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::panic)]
mod tests {
    use super::*;
    use crate::types::LegendEntry;

    /// Fixed-width glyphs: 6px per char, height = line height.
    struct FixedWidth;

    impl TextMeasurer for FixedWidth {
        fn text_size(&self, text: &str, font: &Font) -> Size {
            Size::new(text.chars().count() as f32 * 6.0, font.line_height())
        }
    }

    fn labeled(label: &str) -> LegendEntry {
        LegendEntry::new(Some(label.to_string()))
    }

    #[test]
    fn test_horizontal_single_line() {
        let mut legend = Legend::new();
        legend.replace_entries(vec![labeled("ab"), labeled("cd")]);

        let metrics =
            BasicMeasurer::new(&FixedWidth).measure(&legend, &ViewportHandler::default());

        // Per labeled entry: form 8 + gap 5 + label 12; entry space 6 between.
        assert_eq!(metrics.needed_width, 25.0 + 6.0 + 25.0);
        assert_eq!(metrics.needed_height, legend.font.line_height());
        assert_eq!(metrics.line_sizes.len(), 1);
        assert_eq!(metrics.label_sizes.len(), 2);
        assert!(metrics.label_break_points.iter().all(|b| !b));
    }

    #[test]
    fn test_vertical_stacked_run_occupies_a_line_before_its_caption() {
        let mut legend = Legend::new();
        legend.orientation = LegendOrientation::Vertical;
        legend.y_entry_space = 2.0;
        legend.replace_entries(vec![
            LegendEntry::new(None),
            LegendEntry::new(None),
            labeled("total"),
        ]);

        let metrics =
            BasicMeasurer::new(&FixedWidth).measure(&legend, &ViewportHandler::default());

        // Two lines: the stacked markers' line, then the caption's.
        assert_eq!(
            metrics.needed_height,
            2.0 * legend.font.line_height() + legend.y_entry_space
        );
        // Run line: two stacked markers (8 + 3 each) plus the caption
        // entry's own marker; the caption itself restarts at the origin.
        assert_eq!(metrics.needed_width, 22.0 + 8.0);
    }

    #[test]
    fn test_vertical_consecutive_labeled_entries() {
        let mut legend = Legend::new();
        legend.orientation = LegendOrientation::Vertical;
        legend.replace_entries(vec![labeled("aa"), labeled("bb")]);

        let metrics =
            BasicMeasurer::new(&FixedWidth).measure(&legend, &ViewportHandler::default());

        assert_eq!(metrics.needed_height, 2.0 * legend.font.line_height());
        // Marker (8) + gap (5) + label (12).
        assert_eq!(metrics.needed_width, 25.0);
    }

    #[test]
    fn test_vertical_trailing_run_without_caption_still_needs_a_line() {
        let mut legend = Legend::new();
        legend.orientation = LegendOrientation::Vertical;
        legend.replace_entries(vec![LegendEntry::new(None), LegendEntry::new(None)]);

        let metrics =
            BasicMeasurer::new(&FixedWidth).measure(&legend, &ViewportHandler::default());

        assert_eq!(metrics.needed_height, legend.font.line_height());
        assert_eq!(metrics.needed_width, 19.0);
    }

    #[test]
    fn test_form_none_reserves_no_space() {
        let mut legend = Legend::new();
        let mut caption = labeled("caption");
        caption.form = LegendForm::None;
        legend.replace_entries(vec![caption]);

        let metrics =
            BasicMeasurer::new(&FixedWidth).measure(&legend, &ViewportHandler::default());

        // Just the label: no form size, no form-to-text gap.
        assert_eq!(metrics.needed_width, 42.0);
    }

    #[test]
    fn test_empty_legend() {
        let legend = Legend::new();
        let metrics =
            BasicMeasurer::new(&FixedWidth).measure(&legend, &ViewportHandler::default());
        assert_eq!(metrics.needed_width, 0.0);
        assert_eq!(metrics.needed_height, 0.0);
        assert!(metrics.line_sizes.is_empty());
    }
}
