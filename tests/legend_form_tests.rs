//! Marker drawing tests: form resolution, style fallback chains, and
//! graphics-state scoping.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{marker, RED};
use legendview::color::Color;
use legendview::layout::ViewportHandler;
use legendview::render::{DrawOp, LegendRenderer, RecordingSurface};
use legendview::types::{Legend, LegendForm, LegendMetrics, LegendVerticalAlignment, Size};

fn render_single(legend: &mut Legend, entry: legendview::types::LegendEntry) -> RecordingSurface {
    legend.vertical_alignment = LegendVerticalAlignment::Top;
    legend.replace_entries(vec![entry]);
    legend.set_metrics(LegendMetrics {
        label_sizes: vec![Size::ZERO],
        label_break_points: vec![false],
        ..Default::default()
    });

    let mut surface = RecordingSurface::new();
    LegendRenderer::new(ViewportHandler::new(400.0, 300.0)).render(legend, &mut surface);
    surface
}

#[test]
fn test_marker_without_color_is_skipped_entirely() {
    let mut e = marker();
    e.form_color = None;
    let surface = render_single(&mut Legend::new(), e);
    // Not even a save/restore pair: the draw is skipped before any state
    // change, though the marker's space was still consumed.
    assert!(surface.ops.is_empty());
}

#[test]
fn test_transparent_marker_is_skipped() {
    let mut e = marker();
    e.form_color = Some(Color::TRANSPARENT);
    let surface = render_single(&mut Legend::new(), e);
    assert!(surface.ops.is_empty());
}

#[test]
fn test_default_form_resolves_to_legend_form() {
    let mut legend = Legend::new();
    legend.form = LegendForm::Circle;
    let surface = render_single(&mut legend, marker());

    assert_eq!(
        surface.ops,
        vec![
            DrawOp::Save,
            DrawOp::SetFillColor(RED),
            DrawOp::FillEllipse { x: 5.0, y: 5.0, width: 8.0, height: 8.0 },
            DrawOp::Restore,
        ]
    );
}

#[test]
fn test_square_form_fills_rect_centered_on_anchor() {
    let surface = render_single(&mut Legend::new(), marker());

    assert_eq!(
        surface.ops,
        vec![
            DrawOp::Save,
            DrawOp::SetFillColor(RED),
            DrawOp::FillRect { x: 5.0, y: 5.0, width: 8.0, height: 8.0 },
            DrawOp::Restore,
        ]
    );
}

#[test]
fn test_entry_form_size_overrides_legend_default() {
    let mut e = marker();
    e.form_size = Some(12.0);
    let surface = render_single(&mut Legend::new(), e);

    // Anchor stays at the line center (y = 9); the larger square grows
    // around it.
    assert_eq!(
        surface.shapes(),
        vec![&DrawOp::FillRect { x: 5.0, y: 3.0, width: 12.0, height: 12.0 }]
    );
}

#[test]
fn test_line_form_inherits_legend_dash() {
    let mut legend = Legend::new();
    legend.form_line_dash_lengths = Some(vec![4.0, 2.0]);
    let mut e = marker();
    e.form = LegendForm::Line;
    e.form_line_width = Some(2.0);
    let surface = render_single(&mut legend, e);

    assert_eq!(
        surface.ops,
        vec![
            DrawOp::Save,
            DrawOp::SetLineWidth(2.0),
            DrawOp::SetLineDash { phase: 0.0, lengths: vec![4.0, 2.0] },
            DrawOp::SetStrokeColor(RED),
            DrawOp::StrokeLine { x1: 5.0, y1: 9.0, x2: 13.0, y2: 9.0 },
            DrawOp::Restore,
        ]
    );
}

#[test]
fn test_line_form_entry_dash_overrides_legend() {
    let mut legend = Legend::new();
    legend.form_line_dash_lengths = Some(vec![4.0, 2.0]);
    let mut e = marker();
    e.form = LegendForm::Line;
    e.form_line_dash_phase = Some(1.5);
    e.form_line_dash_lengths = Some(vec![1.0, 1.0]);
    let surface = render_single(&mut legend, e);

    assert!(surface
        .ops
        .contains(&DrawOp::SetLineDash { phase: 1.5, lengths: vec![1.0, 1.0] }));
}

#[test]
fn test_line_form_defaults_to_solid() {
    let mut e = marker();
    e.form = LegendForm::Line;
    let surface = render_single(&mut Legend::new(), e);

    // No dash pattern resolves anywhere: explicit solid (empty dash).
    assert!(surface
        .ops
        .contains(&DrawOp::SetLineDash { phase: 0.0, lengths: vec![] }));
    // Legend default line width.
    assert!(surface.ops.contains(&DrawOp::SetLineWidth(3.0)));
}

#[test]
fn test_every_drawn_marker_is_bracketed_by_save_restore() {
    let mut legend = Legend::new();
    legend.vertical_alignment = LegendVerticalAlignment::Top;
    legend.replace_entries(vec![marker(), marker(), marker()]);
    legend.set_metrics(LegendMetrics {
        label_sizes: vec![Size::ZERO; 3],
        label_break_points: vec![false; 3],
        ..Default::default()
    });

    let mut surface = RecordingSurface::new();
    LegendRenderer::new(ViewportHandler::new(400.0, 300.0)).render(&legend, &mut surface);

    let saves = surface.ops.iter().filter(|op| **op == DrawOp::Save).count();
    let restores = surface
        .ops
        .iter()
        .filter(|op| **op == DrawOp::Restore)
        .count();
    assert_eq!(saves, 3);
    assert_eq!(restores, 3);
    // Style state never leaks: each shape op sits between a save and its
    // matching restore.
    let mut depth = 0i32;
    for op in &surface.ops {
        match op {
            DrawOp::Save => depth += 1,
            DrawOp::Restore => depth -= 1,
            _ => assert!(depth > 0, "draw op outside save/restore: {op:?}"),
        }
    }
    assert_eq!(depth, 0);
}
