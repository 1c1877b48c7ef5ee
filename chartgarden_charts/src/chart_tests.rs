// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end layout and render tests across chart kinds.

extern crate std;

use alloc::string::String;
use alloc::vec::Vec;

use approx::assert_relative_eq;
use chartgarden_table::{Dataset, Value};
use kurbo::Size;

use crate::{
    ChartConfig, ChartGeometry, ChartKind, ChartRenderer, ChartStyle, GeometryBody, LayoutError,
    MarkPayload, RenderError, RulePayload, render_svg,
};

const CANVAS: Size = Size::new(800.0, 500.0);

fn abc() -> Dataset {
    let mut ds = Dataset::new(["name", "value"]);
    for (n, v) in [("A", 10.0), ("B", 30.0), ("C", 20.0)] {
        ds.push_row([Value::from(n), Value::Number(v)]);
    }
    ds
}

fn survey() -> Dataset {
    let mut ds = Dataset::new(["name", "value", "v1", "v2", "v3"]);
    for (n, v, a, b, c) in [
        ("North", 4.0, 10.0, 20.0, 5.0),
        ("South", 6.0, 2.0, 8.0, 1.0),
    ] {
        ds.push_row([
            Value::from(n),
            Value::Number(v),
            Value::Number(a),
            Value::Number(b),
            Value::Number(c),
        ]);
    }
    ds
}

fn one_row(columns: &[&str], values: &[f64]) -> Dataset {
    let mut ds = Dataset::new(columns.iter().copied());
    ds.push_row(
        core::iter::once(Value::from("Only")).chain(values.iter().copied().map(Value::Number)),
    );
    ds
}

fn diverging_survey(kind: ChartKind) -> ChartGeometry {
    let ds = survey();
    let mut config = ChartConfig::new().with_kind(kind).with_diverging(true);
    config.set_left_columns(&ds, ["v1"]);
    config.set_right_columns(&ds, ["v2"]);
    ChartGeometry::compute(&ds, &config, CANVAS).expect("valid")
}

fn center_lines(geometry: &ChartGeometry) -> Vec<RulePayload> {
    let dashed = ChartStyle::default().center_line;
    ChartRenderer::new()
        .scene(geometry)
        .marks()
        .iter()
        .filter_map(|m| match &m.payload {
            MarkPayload::Rule(r) if r.stroke == dashed => Some(r.clone()),
            _ => None,
        })
        .collect()
}

fn svg_for(ds: &Dataset, config: &ChartConfig) -> String {
    let geometry = ChartGeometry::compute(ds, config, CANVAS).expect("valid chart");
    render_svg(Some(&geometry)).expect("string writes cannot fail")
}

#[test]
fn bar_lengths_scale_against_the_maximum() {
    let geometry = ChartGeometry::compute(&abc(), &ChartConfig::new(), CANVAS).expect("valid");
    assert_eq!(geometry.scale_max(), 30.0);
    let GeometryBody::Bars(bars) = &geometry.body else {
        panic!("expected bar geometry");
    };
    let extent = geometry.layout.plot.height;
    assert_relative_eq!(bars.bars[1].rect.height(), extent);
    assert_relative_eq!(bars.bars[0].rect.height(), extent / 3.0);
}

#[test]
fn diverging_sides_grow_away_from_the_center() {
    let ds = survey();
    let mut config = ChartConfig::new()
        .with_kind(ChartKind::StackedHorizontalBar)
        .with_diverging(true);
    config.set_left_columns(&ds, ["v1"]);
    config.set_right_columns(&ds, ["v2"]);

    let geometry = ChartGeometry::compute(&ds, &config, CANVAS).expect("valid");
    let GeometryBody::Diverging(div) = &geometry.body else {
        panic!("expected diverging geometry");
    };
    assert_eq!(div.max_total, 20.0);
    let mid = geometry.layout.plot.width * 0.5;
    assert_relative_eq!(div.zero, mid);

    let north = &div.rows[0];
    let left = &north.left[0];
    assert_relative_eq!(left.rect.x1, mid);
    assert_relative_eq!(left.rect.width(), mid * 0.5);
    let right = &north.right[0];
    assert_relative_eq!(right.rect.x0, mid);
    assert_relative_eq!(right.rect.width(), mid);
    assert_eq!(right.color_index, 1);

    let labels: Vec<&str> = div.legend.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["v1 (Left)", "v2 (Right)"]);
}

#[test]
fn diverging_left_side_reverses_selection_order() {
    let ds = survey();
    let mut config = ChartConfig::new()
        .with_kind(ChartKind::StackedBar)
        .with_diverging(true);
    config.set_left_columns(&ds, ["v1", "v3"]);
    config.set_right_columns(&ds, ["v2"]);

    let geometry = ChartGeometry::compute(&ds, &config, CANVAS).expect("valid");
    let GeometryBody::Diverging(div) = &geometry.body else {
        panic!("expected diverging geometry");
    };
    let north = &div.rows[0];
    let order: Vec<&str> = north.left.iter().map(|s| s.column.as_str()).collect();
    assert_eq!(order, ["v3", "v1"]);
    assert_eq!(north.left[0].color_index, 1);
    assert_eq!(north.left[1].color_index, 0);
    assert_eq!(north.left[1].start, 5.0);
    assert!(
        north.left[1].rect.y1 > north.left[0].rect.y1,
        "first-selected column is outermost below the zero line"
    );
    assert_eq!(north.right[0].color_index, 2);
}

#[test]
fn stacked_segments_start_where_previous_ones_end() {
    let ds = survey();
    let mut config = ChartConfig::new().with_kind(ChartKind::StackedBar);
    config.set_stack_columns(&ds, ["v1", "v2"]);

    let geometry = ChartGeometry::compute(&ds, &config, CANVAS).expect("valid");
    let GeometryBody::Stacked(stacked) = &geometry.body else {
        panic!("expected stacked geometry");
    };
    assert_eq!(stacked.max_total, 34.0);
    let north = &stacked.rows[0];
    let starts: Vec<f64> = north.segments.iter().map(|s| s.start).collect();
    assert_eq!(starts, [0.0, 4.0, 14.0]);
    for pair in north.segments.windows(2) {
        assert_relative_eq!(pair[0].rect.y0, pair[1].rect.y1, epsilon = 1e-9);
    }
    assert_relative_eq!(north.segments[2].rect.y0, -geometry.layout.plot.height);
}

#[test]
fn legend_frame_fits_entries() {
    let ds = survey();
    let mut config = ChartConfig::new().with_kind(ChartKind::StackedHorizontalBar);
    config.set_stack_columns(&ds, ["v1", "v2", "v3"]);
    let svg = svg_for(&ds, &config);
    assert!(svg.contains(r##"width="150" height="90" fill="#ffffff""##));
}

#[test]
fn each_tick_draws_one_gridline() {
    let svg = svg_for(&abc(), &ChartConfig::new());
    assert_eq!(svg.matches(r##"stroke="#e0e0e0" stroke-width="1"/>"##).count(), 6);
}

#[test]
fn stacked_value_labels_respect_the_legibility_threshold() {
    let ds = survey();
    let mut config = ChartConfig::new()
        .with_kind(ChartKind::StackedBar)
        .with_show_data_values(true);
    config.set_stack_columns(&ds, ["v1", "v2", "v3"]);
    let geometry = ChartGeometry::compute(&ds, &config, CANVAS).expect("valid");
    let GeometryBody::Stacked(stacked) = &geometry.body else {
        panic!("expected stacked geometry");
    };
    for segment in stacked.rows.iter().flat_map(|r| &r.segments) {
        assert_eq!(
            segment.value_label.is_some(),
            segment.rect.height() > 20.0,
            "label presence follows segment height for {}",
            segment.column
        );
    }
}

#[test]
fn horizontal_stack_labels_need_thirty_pixels() {
    let ds = one_row(&["name", "value", "v1", "v2"], &[70.0, 2.5, 1.5]);
    let mut config = ChartConfig::new()
        .with_kind(ChartKind::StackedHorizontalBar)
        .with_show_data_values(true);
    config.set_stack_columns(&ds, ["v1", "v2"]);
    let geometry = ChartGeometry::compute(&ds, &config, CANVAS).expect("valid");
    let GeometryBody::Stacked(stacked) = &geometry.body else {
        panic!("expected stacked geometry");
    };
    let segments = &stacked.rows[0].segments;
    assert_relative_eq!(segments[1].rect.width(), 25.0, epsilon = 1e-9);
    assert!(segments[0].value_label.is_some());
    assert!(segments[1].value_label.is_none(), "25px is too narrow");
    for segment in segments {
        assert_eq!(
            segment.value_label.is_some(),
            segment.rect.width() > 30.0,
            "label presence follows segment width for {}",
            segment.column
        );
    }
}

#[test]
fn diverging_horizontal_labels_need_thirty_pixels() {
    let ds = one_row(&["name", "value", "l", "r"], &[0.0, 37.0, 2.5]);
    let mut config = ChartConfig::new()
        .with_kind(ChartKind::StackedHorizontalBar)
        .with_diverging(true)
        .with_show_data_values(true);
    config.set_left_columns(&ds, ["l"]);
    config.set_right_columns(&ds, ["r"]);
    let geometry = ChartGeometry::compute(&ds, &config, CANVAS).expect("valid");
    let GeometryBody::Diverging(div) = &geometry.body else {
        panic!("expected diverging geometry");
    };
    let row = &div.rows[0];
    assert_relative_eq!(row.left[0].rect.width(), 370.0, epsilon = 1e-9);
    assert!(row.left[0].value_label.is_some());
    assert_relative_eq!(row.right[0].rect.width(), 25.0, epsilon = 1e-9);
    assert!(row.right[0].value_label.is_none(), "25px is too narrow");
}

#[test]
fn diverging_center_line_sits_on_the_zero_tick() {
    let vertical = diverging_survey(ChartKind::StackedBar);
    let plot = vertical.layout.plot;
    let zero = -plot.height * 0.5;
    let lines = center_lines(&vertical);
    assert_eq!(lines.len(), 1);
    assert_eq!((lines[0].p0.x, lines[0].p1.x), (0.0, plot.width));
    assert_relative_eq!(lines[0].p0.y, zero);
    assert_relative_eq!(lines[0].p1.y, zero);

    let horizontal = diverging_survey(ChartKind::StackedHorizontalBar);
    let plot = horizontal.layout.plot;
    let lines = center_lines(&horizontal);
    assert_eq!(lines.len(), 1);
    assert_relative_eq!(lines[0].p0.x, plot.width * 0.5);
    assert_relative_eq!(lines[0].p1.x, plot.width * 0.5);
    assert_eq!((lines[0].p0.y, lines[0].p1.y), (0.0, -plot.height));
}

#[test]
fn diverging_ticks_mirror_around_zero() {
    let geometry = diverging_survey(ChartKind::StackedBar);
    assert_eq!(geometry.scale_max(), 20.0);
    let zero = -geometry.layout.plot.height * 0.5;
    let scene = ChartRenderer::new().scene(&geometry);
    let ys = |text: &str| -> Vec<f64> {
        scene
            .texts()
            .filter(|t| t.text == text)
            .map(|t| t.pos.y)
            .collect()
    };

    let zeros = ys("0");
    assert_eq!(zeros.len(), 1);
    assert_relative_eq!(zeros[0], zero);

    for label in ["4", "12", "20"] {
        let mut at = ys(label);
        at.sort_by(f64::total_cmp);
        assert_eq!(at.len(), 2, "one {label} on each side");
        assert!(at[0] < zero && at[1] > zero, "{label} at {at:?}");
        assert_relative_eq!(zero - at[0], at[1] - zero, epsilon = 1e-9);
    }
}

#[test]
fn pie_labels_skip_small_slices() {
    let mut ds = Dataset::new(["name", "value"]);
    for (n, v) in [("tiny", 3.0), ("big", 40.0), ("rest", 57.0)] {
        ds.push_row([Value::from(n), Value::Number(v)]);
    }
    let config = ChartConfig::new().with_kind(ChartKind::Pie);
    let svg = svg_for(&ds, &config);
    assert!(!svg.contains(">tiny<"));
    assert!(svg.contains(">big<"));
    assert!(!svg.contains(">40<"));

    let svg = svg_for(&ds, &config.clone().with_show_data_values(true));
    assert!(svg.contains(">40<"));
    assert!(!svg.contains(">3<"));
}

#[test]
fn pie_value_labels_start_above_eight_percent() {
    let mut ds = Dataset::new(["name", "value"]);
    for (n, v) in [("six", 6.0), ("nine", 9.0), ("rest", 85.0)] {
        ds.push_row([Value::from(n), Value::Number(v)]);
    }
    let config = ChartConfig::new()
        .with_kind(ChartKind::Pie)
        .with_show_data_values(true);
    let svg = svg_for(&ds, &config);
    assert!(svg.contains(">six<"));
    assert!(!svg.contains(">6<"));
    assert!(svg.contains(">nine<"));
    assert!(svg.contains(">9<"));
}

#[test]
fn rendering_is_deterministic() {
    let ds = survey();
    for kind in ChartKind::ALL {
        let mut config = ChartConfig::new()
            .with_kind(kind)
            .with_show_data_values(true);
        config.set_stack_columns(&ds, ["v1", "v2"]);
        assert_eq!(svg_for(&ds, &config), svg_for(&ds, &config), "{kind}");
    }
}

#[test]
fn export_before_build_is_not_ready() {
    assert!(matches!(render_svg(None), Err(RenderError::NotReady)));
    assert!(matches!(
        ChartRenderer::new().render_svg(None),
        Err(RenderError::NotReady)
    ));
}

#[test]
fn layout_rejects_empty_and_unknown_inputs() {
    let empty = Dataset::new(["name", "value"]);
    assert_eq!(
        ChartGeometry::compute(&empty, &ChartConfig::new(), CANVAS),
        Err(LayoutError::EmptyDataset)
    );
    let mut ds = Dataset::new(["city", "value"]);
    ds.push_row([Value::from("X"), Value::Number(1.0)]);
    assert_eq!(
        ChartGeometry::compute(&ds, &ChartConfig::new(), CANVAS),
        Err(LayoutError::UnknownColumn("name".into()))
    );
}

#[test]
fn line_chart_draws_polyline_and_markers() {
    let svg = svg_for(&abc(), &ChartConfig::new().with_kind(ChartKind::Line));
    assert_eq!(svg.matches("<polyline ").count(), 1);
    assert_eq!(svg.matches("<circle ").count(), 3);
    assert!(svg.contains(r##"fill="none" stroke="#8884d8" stroke-width="2""##));
}
