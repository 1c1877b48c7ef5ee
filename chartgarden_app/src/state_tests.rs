// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chartgarden_charts::{GeometryBody, LayoutError};
use chartgarden_table::Value;

use super::*;

const WIDE: &str = "team,q1,q2,q3\nA,10,20,5\nB,4,8,2\n";

fn loaded(csv: &str) -> AppState {
    let mut state = AppState::new();
    state.update(Message::LoadCsv(csv.into()));
    assert!(state.notices().is_empty(), "{:?}", state.notices());
    state
}

#[test]
fn starts_with_the_sample_bar_chart() {
    let state = AppState::new();
    assert_eq!(state.dataset().len(), 5);
    assert_eq!(state.config().name_key(), "name");
    assert_eq!(state.config().value_key(), "value");
    let chart = state.chart().expect("sample chart is built");
    assert_eq!(chart.kind, ChartKind::Bar);
    assert_eq!(chart.scale_max(), 400.0);
}

#[test]
fn loading_csv_adopts_the_first_two_columns() {
    let state = loaded(WIDE);
    assert_eq!(state.config().name_key(), "team");
    assert_eq!(state.config().value_key(), "q1");
    assert_eq!(state.chart().map(ChartGeometry::scale_max), Some(10.0));
}

#[test]
fn bad_csv_leaves_dataset_and_config_untouched() {
    let mut state = loaded(WIDE);
    state.update(Message::SetChartKind(ChartKind::Line));
    let dataset = state.dataset().clone();
    let config = state.config().clone();

    state.update(Message::LoadCsv("team,q1\n".into()));

    assert_eq!(state.dataset(), &dataset);
    assert_eq!(state.config(), &config);
    assert!(state.chart().is_some());
    let notices = state.take_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].is_error());
    assert!(state.notices().is_empty());
}

#[test]
fn changing_the_value_key_prunes_stack_columns() {
    let mut state = loaded(WIDE);
    state.update(Message::SetChartKind(ChartKind::StackedBar));
    state.update(Message::SetStackColumns(vec!["q2".into(), "q3".into()]));
    assert_eq!(state.config().stack_columns(), ["q2", "q3"]);

    state.update(Message::SetValueKey("q2".into()));
    assert_eq!(state.config().stack_columns(), ["q3"]);
    assert_eq!(state.chart().map(ChartGeometry::scale_max), Some(25.0));
}

#[test]
fn diverging_sides_stay_exclusive_through_messages() {
    let mut state = loaded(WIDE);
    state.update(Message::SetChartKind(ChartKind::StackedHorizontalBar));
    state.update(Message::SetDiverging(true));
    state.update(Message::SetLeftColumns(vec!["q1".into(), "q2".into()]));
    state.update(Message::SetRightColumns(vec!["q2".into(), "q3".into()]));

    assert_eq!(state.config().left_columns(), ["q1"]);
    assert_eq!(state.config().right_columns(), ["q2", "q3"]);
    let chart = state.chart().expect("diverging chart is built");
    assert!(matches!(chart.body, GeometryBody::Diverging(_)));
    assert_eq!(chart.scale_max(), 25.0);
}

#[test]
fn removing_a_row_rebuilds_and_retypes_columns() {
    let mut state = loaded("name,value,extra\nA,10,n/a\nB,30,7\n");
    state.update(Message::SetChartKind(ChartKind::StackedBar));
    state.update(Message::SetStackColumns(vec!["extra".into()]));
    assert!(state.config().stack_columns().is_empty());

    state.update(Message::RemoveRow(0));
    assert_eq!(state.dataset().value(0, "name"), Some(&Value::from("B")));
    assert_eq!(state.chart().map(ChartGeometry::scale_max), Some(30.0));

    state.update(Message::SetStackColumns(vec!["extra".into()]));
    assert_eq!(state.config().stack_columns(), ["extra"]);
    assert_eq!(state.chart().map(ChartGeometry::scale_max), Some(37.0));
}

#[test]
fn out_of_range_row_removal_is_ignored() {
    let mut state = AppState::new();
    state.update(Message::RemoveRow(99));
    assert_eq!(state.dataset().len(), 5);
    assert!(state.notices().is_empty());
}

#[test]
fn removing_every_row_drops_the_chart() {
    let mut state = loaded("name,value\nA,1\n");
    state.update(Message::RemoveRow(0));
    assert!(state.chart().is_none());
    assert!(state.notices().iter().any(Notice::is_error));
    assert_eq!(state.rebuild().err(), Some(LayoutError::EmptyDataset));
}

#[test]
fn unknown_name_key_drops_the_chart() {
    let mut state = AppState::new();
    state.update(Message::SetNameKey("missing".into()));
    assert!(state.chart().is_none());
    assert_eq!(
        state.rebuild().err(),
        Some(LayoutError::UnknownColumn("missing".into()))
    );
}

#[test]
fn reset_restores_form_defaults() {
    let mut state = loaded(WIDE);
    state.update(Message::SetChartKind(ChartKind::StackedBar));
    state.update(Message::SetDiverging(true));
    state.update(Message::SetShowDataValues(true));
    state.update(Message::SetLeftColumns(vec!["q2".into()]));

    state.update(Message::Reset);

    let config = state.config();
    assert_eq!(config.kind(), ChartKind::Bar);
    assert!(!config.diverging());
    assert!(!config.show_data_values());
    assert!(config.left_columns().is_empty());
    assert_eq!(config.name_key(), "team");
}

#[test]
fn resize_changes_the_document_frame() {
    let mut state = AppState::new();
    state.update(Message::Resize(CanvasSize::new(400.0, 300.0)));
    let chart = state.chart().expect("chart is rebuilt");
    assert_eq!(chart.layout.canvas.width, 400.0);
    assert_eq!(chart.layout.plot.width, 340.0);
}

#[test]
fn svg_export_is_deterministic() {
    let mut state = loaded(WIDE);
    state.update(Message::SetChartKind(ChartKind::Doughnut));
    state.update(Message::SetShowDataValues(true));
    let a = state.export_svg().expect("chart is built");
    let b = state.export_svg().expect("chart is built");
    assert_eq!(a, b);
}

#[test]
fn notice_queue_keeps_the_newest() {
    let mut state = AppState::new();
    for _ in 0..MAX_NOTICES + 8 {
        state.update(Message::LoadCsv(String::new()));
    }
    assert_eq!(state.notices().len(), MAX_NOTICES);

    for i in 0..MAX_NOTICES + 3 {
        state.push_notice(Notice::info(format!("saved {i}")));
    }
    let notices = state.take_notices();
    assert_eq!(notices.len(), MAX_NOTICES);
    assert_eq!(notices[0].message, "saved 3");
    assert_eq!(notices[MAX_NOTICES - 1].message, format!("saved {}", MAX_NOTICES + 2));
}
