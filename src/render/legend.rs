//! Legend entry generation, layout, and drawing.
//!
//! [`generate_entries`] flattens heterogeneously-shaped data series into an
//! ordered entry list; [`LegendRenderer`] positions every marker and label
//! within the viewport and draws them through a [`DrawSurface`].

use crate::color::Color;
use crate::layout::{LegendMeasurer, ViewportHandler};
use crate::types::{
    ChartData, DataSeries, Font, Legend, LegendDirection, LegendEntry, LegendForm,
    LegendHorizontalAlignment, LegendOrientation, LegendVerticalAlignment, SeriesKind,
};

use super::backend::DrawSurface;

/// An entry carrying the series' shared marker style.
fn styled_entry(series: &DataSeries, label: Option<String>, color: Option<Color>) -> LegendEntry {
    LegendEntry {
        label,
        label_color: None,
        form: series.form,
        form_size: series.form_size,
        form_line_width: series.form_line_width,
        form_line_dash_phase: series.form_line_dash_phase,
        form_line_dash_lengths: series.form_line_dash_lengths.clone(),
        form_color: color,
    }
}

/// The trailing caption row of a grouped series: label only, no marker,
/// no reserved marker space.
fn caption_entry(label: &str) -> LegendEntry {
    LegendEntry {
        label: Some(label.to_string()),
        form: LegendForm::None,
        ..Default::default()
    }
}

/// Build the flat, ordered legend entry list for the given series.
///
/// Series are visited in order; each contributes entries according to its
/// [`SeriesKind`]. Index ranges are `min(...)`-guarded, so a series claiming
/// more entries than it has colors degrades to fewer legend rows.
pub fn generate_entries(data: &ChartData) -> Vec<LegendEntry> {
    let mut entries = Vec::new();

    for series in &data.series {
        match &series.kind {
            SeriesKind::StackedBar {
                stack_size,
                stack_labels,
            } => {
                let n = series.colors.len().min(*stack_size);

                for j in 0..n {
                    // Stack labels repeat modulo the emitted range.
                    let label = if !stack_labels.is_empty() && n > 0 {
                        stack_labels.get(j % n).cloned()
                    } else {
                        None
                    };
                    entries.push(styled_entry(series, label, series.colors.get(j).copied()));
                }

                if let Some(label) = &series.label {
                    entries.push(caption_entry(label));
                }
            }
            SeriesKind::Pie { slice_labels } => {
                let n = series.colors.len().min(series.entry_count);

                for j in 0..n {
                    let label = slice_labels.get(j).cloned().flatten();
                    entries.push(styled_entry(series, label, series.colors.get(j).copied()));
                }

                if let Some(label) = &series.label {
                    entries.push(caption_entry(label));
                }
            }
            SeriesKind::Candle {
                increasing_color,
                decreasing_color: Some(decreasing),
            } => {
                // Exactly two rows: decreasing first (unlabeled), then
                // increasing carrying the series caption.
                entries.push(styled_entry(series, None, Some(*decreasing)));
                entries.push(styled_entry(
                    series,
                    series.label.clone(),
                    *increasing_color,
                ));
            }
            SeriesKind::Plain | SeriesKind::Candle { .. } => {
                let n = series.colors.len().min(series.entry_count);

                for j in 0..n {
                    // Multiple colors on one series group under a single
                    // trailing caption; label absence is a structural signal
                    // for the stacked layout downstream.
                    let label = if j + 1 < series.colors.len() && j + 1 < series.entry_count {
                        None
                    } else {
                        series.label.clone()
                    };
                    entries.push(styled_entry(series, label, series.colors.get(j).copied()));
                }
            }
        }
    }

    entries
}

/// Lays out and draws a [`Legend`] within a viewport.
pub struct LegendRenderer {
    pub viewport: ViewportHandler,
}

impl LegendRenderer {
    pub fn new(viewport: ViewportHandler) -> Self {
        Self { viewport }
    }

    /// Rebuild the legend's entries from `data` (skipped in custom mode) and
    /// rerun the measurement pass. Both the entry list and the metrics are
    /// replaced wholesale.
    pub fn compute_legend(
        &self,
        legend: &mut Legend,
        data: &ChartData,
        measurer: &dyn LegendMeasurer,
    ) {
        if !legend.is_custom() {
            let mut entries = generate_entries(data);
            entries.extend(legend.extra_entries.iter().cloned());
            legend.replace_entries(entries);
        }

        let metrics = measurer.measure(legend, &self.viewport);
        legend.set_metrics(metrics);
    }

    /// Draw the legend. No-op when disabled.
    pub fn render(&self, legend: &Legend, surface: &mut dyn DrawSurface) {
        if !legend.enabled {
            return;
        }

        let font = &legend.font;
        let line_height = font.line_height();
        let form_y_offset = line_height / 2.0;

        let entries = legend.entries();
        let metrics = legend.metrics();

        let default_form_size = legend.form_size;
        let form_to_text_space = legend.form_to_text_space;
        let x_entry_space = legend.x_entry_space;
        let y_entry_space = legend.y_entry_space;
        let stack_space = legend.stack_space;

        let orientation = legend.orientation;
        let horizontal_alignment = legend.horizontal_alignment;
        let vertical_alignment = legend.vertical_alignment;
        let rtl = legend.direction == LegendDirection::RightToLeft;

        let x_offset = legend.x_offset;
        let y_offset = legend.y_offset;

        let mut origin_pos_x;
        match horizontal_alignment {
            LegendHorizontalAlignment::Left => {
                origin_pos_x = if orientation == LegendOrientation::Vertical {
                    x_offset
                } else {
                    self.viewport.content_left() + x_offset
                };

                if rtl {
                    origin_pos_x += metrics.needed_width;
                }
            }
            LegendHorizontalAlignment::Right => {
                origin_pos_x = if orientation == LegendOrientation::Vertical {
                    self.viewport.chart_width - x_offset
                } else {
                    self.viewport.content_right() - x_offset
                };

                if !rtl {
                    origin_pos_x -= metrics.needed_width;
                }
            }
            LegendHorizontalAlignment::Center => {
                origin_pos_x = if orientation == LegendOrientation::Vertical {
                    self.viewport.chart_width / 2.0
                } else {
                    self.viewport.content_left() + self.viewport.content_width() / 2.0
                };

                origin_pos_x += if rtl { -x_offset } else { x_offset };

                // Horizontally laid out legends center on a line basis, so
                // only vertical ones take the full-width offset here.
                if orientation == LegendOrientation::Vertical {
                    if rtl {
                        origin_pos_x += metrics.needed_width / 2.0 - x_offset;
                    } else {
                        origin_pos_x -= metrics.needed_width / 2.0 - x_offset;
                    }
                }
            }
        }

        match orientation {
            LegendOrientation::Horizontal => {
                let mut pos_x = origin_pos_x;
                let mut pos_y = match vertical_alignment {
                    LegendVerticalAlignment::Top => y_offset,
                    LegendVerticalAlignment::Bottom => {
                        self.viewport.chart_height - y_offset - metrics.needed_height
                    }
                    LegendVerticalAlignment::Center => {
                        (self.viewport.chart_height - metrics.needed_height) / 2.0 + y_offset
                    }
                };

                let mut line_index = 0usize;
                let mut line_start = true;

                for (i, e) in entries.iter().enumerate() {
                    let drawing_form = e.form != LegendForm::None;
                    let form_size = e.form_size.unwrap_or(default_form_size);

                    if metrics.label_break_points.get(i).copied().unwrap_or(false) {
                        pos_x = origin_pos_x;
                        pos_y += line_height + y_entry_space;
                        line_start = true;
                    }

                    if line_start && horizontal_alignment == LegendHorizontalAlignment::Center {
                        if let Some(line_size) = metrics.line_sizes.get(line_index) {
                            let half = line_size.width / 2.0;
                            pos_x += if rtl { half } else { -half };
                            line_index += 1;
                        }
                    }
                    line_start = false;

                    if drawing_form {
                        if rtl {
                            pos_x -= form_size;
                        }

                        self.draw_form(surface, pos_x, pos_y + form_y_offset, e, legend);

                        if !rtl {
                            pos_x += form_size;
                        }
                    }

                    // Grouped markers have no label and advance by the stack
                    // space instead of a caption width.
                    match &e.label {
                        Some(label) => {
                            if drawing_form {
                                pos_x += if rtl {
                                    -form_to_text_space
                                } else {
                                    form_to_text_space
                                };
                            }

                            let label_width =
                                metrics.label_sizes.get(i).map_or(0.0, |s| s.width);
                            if rtl {
                                pos_x -= label_width;
                            }

                            self.draw_label(
                                surface,
                                pos_x,
                                pos_y,
                                label,
                                font,
                                e.label_color.unwrap_or(legend.text_color),
                            );

                            if !rtl {
                                pos_x += label_width;
                            }
                            pos_x += if rtl { -x_entry_space } else { x_entry_space };
                        }
                        None => {
                            pos_x += if rtl { -stack_space } else { stack_space };
                        }
                    }
                }
            }
            LegendOrientation::Vertical => {
                // Pixels consumed by an in-progress run of grouped markers.
                let mut stack = 0.0f32;
                let mut was_stacked = false;

                let mut pos_y = match vertical_alignment {
                    LegendVerticalAlignment::Top => {
                        let base = if horizontal_alignment == LegendHorizontalAlignment::Center {
                            0.0
                        } else {
                            self.viewport.content_top()
                        };
                        base + y_offset
                    }
                    LegendVerticalAlignment::Bottom => {
                        let base = if horizontal_alignment == LegendHorizontalAlignment::Center {
                            self.viewport.chart_height
                        } else {
                            self.viewport.content_bottom()
                        };
                        base - (metrics.needed_height + y_offset)
                    }
                    LegendVerticalAlignment::Center => {
                        self.viewport.chart_height / 2.0 - metrics.needed_height / 2.0 + y_offset
                    }
                };

                for (i, e) in entries.iter().enumerate() {
                    let drawing_form = e.form != LegendForm::None;
                    let form_size = e.form_size.unwrap_or(default_form_size);

                    let mut pos_x = origin_pos_x;

                    if drawing_form {
                        if rtl {
                            pos_x -= form_size - stack;
                        } else {
                            pos_x += stack;
                        }

                        self.draw_form(surface, pos_x, pos_y + form_y_offset, e, legend);

                        if !rtl {
                            pos_x += form_size;
                        }
                    }

                    if let Some(label) = &e.label {
                        if drawing_form && !was_stacked {
                            pos_x += if rtl {
                                -form_to_text_space
                            } else {
                                form_to_text_space
                            };
                        } else if was_stacked {
                            // The caption of a stacked run starts on its own
                            // line at the origin.
                            pos_x = origin_pos_x;
                        }

                        if rtl {
                            pos_x -= metrics.label_sizes.get(i).map_or(0.0, |s| s.width);
                        }

                        let color = e.label_color.unwrap_or(legend.text_color);
                        if was_stacked {
                            pos_y += line_height + y_entry_space;
                        }
                        self.draw_label(surface, pos_x, pos_y, label, font, color);

                        // Step down to the next line.
                        pos_y += line_height + y_entry_space;
                        stack = 0.0;
                    } else {
                        stack += form_size + stack_space;
                        was_stacked = true;
                    }
                }
            }
        }
    }

    /// Draw one legend marker at the given anchor. Markers without a color,
    /// or with a fully transparent one, are skipped.
    fn draw_form(
        &self,
        surface: &mut dyn DrawSurface,
        x: f32,
        y: f32,
        entry: &LegendEntry,
        legend: &Legend,
    ) {
        let Some(form_color) = entry.form_color else {
            return;
        };
        if form_color.is_transparent() {
            return;
        }

        let form = match entry.form {
            LegendForm::Default => legend.form,
            other => other,
        };
        let form_size = entry.form_size.unwrap_or(legend.form_size);

        surface.save();

        match form {
            LegendForm::None | LegendForm::Empty => {
                // Space was reserved by the caller; nothing to draw.
            }
            LegendForm::Default | LegendForm::Circle => {
                surface.set_fill_color(&form_color);
                surface.fill_ellipse(x, y - form_size / 2.0, form_size, form_size);
            }
            LegendForm::Square => {
                surface.set_fill_color(&form_color);
                surface.fill_rect(x, y - form_size / 2.0, form_size, form_size);
            }
            LegendForm::Line => {
                let line_width = entry.form_line_width.unwrap_or(legend.form_line_width);
                let dash_phase = entry
                    .form_line_dash_phase
                    .unwrap_or(legend.form_line_dash_phase);
                let dash_lengths = entry
                    .form_line_dash_lengths
                    .as_ref()
                    .or(legend.form_line_dash_lengths.as_ref());

                surface.set_line_width(line_width);
                match dash_lengths {
                    Some(lengths) if !lengths.is_empty() => {
                        surface.set_line_dash(dash_phase, lengths);
                    }
                    _ => surface.set_line_dash(0.0, &[]),
                }
                surface.set_stroke_color(&form_color);
                surface.stroke_line(x, y, x + form_size, y);
            }
        }

        surface.restore();
    }

    /// Draw one left-anchored label.
    fn draw_label(
        &self,
        surface: &mut dyn DrawSurface,
        x: f32,
        y: f32,
        label: &str,
        font: &Font,
        color: Color,
    ) {
        surface.fill_text(label, x, y, font, &color);
    }
}
