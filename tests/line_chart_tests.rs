use approx::assert_relative_eq;

use spend_charts::api::LineChart;
use spend_charts::core::{DailyPoint, DayKey, LineDataset, LineModel, Viewport};
use spend_charts::render::NullRenderer;

fn day(ordinal: u32) -> DayKey {
    DayKey {
        year: 2023,
        ordinal,
    }
}

fn dataset(amounts: &[i64]) -> LineDataset {
    LineDataset::new(
        "Food",
        amounts
            .iter()
            .enumerate()
            .map(|(index, &amount)| DailyPoint::new(amount, day(index as u32 + 1)))
            .collect(),
    )
}

#[test]
fn grid_derives_from_the_dataset_maximum() {
    let model = LineModel::build(dataset(&[400, 1_000]), Viewport::new(800, 600));

    // 1000 + 1000/10 = 1100; 1100/500 + 1 = 3 divisions.
    assert_eq!(model.max_value(), 1_100);
    let grid = model.grid();
    assert_eq!(grid.line_count, 3);
    assert_eq!(grid.step_px, 200);
    assert_eq!(grid.labels, vec!["1500", "1000", "500"]);
}

#[test]
fn points_project_into_centered_slots() {
    let model = LineModel::build(dataset(&[400, 1_000]), Viewport::new(800, 600));

    assert_relative_eq!(model.point_width(), 400.0);
    let points = model.points();
    assert_relative_eq!(points[0].x, 200.0);
    assert_relative_eq!(points[1].x, 600.0);
    assert_relative_eq!(points[0].y, 600.0 - 400.0 / 1_100.0 * 600.0);
    assert_relative_eq!(points[1].y, 600.0 - 1_000.0 / 1_100.0 * 600.0);
}

#[test]
fn point_labels_are_iso_dates() {
    let model = LineModel::build(
        LineDataset::new("Food", vec![DailyPoint::new(100, day(32))]),
        Viewport::new(800, 600),
    );

    assert_eq!(model.points()[0].label, "2023-02-01");
}

#[test]
fn empty_dataset_builds_a_neutral_model() {
    let model = LineModel::build(dataset(&[]), Viewport::new(800, 600));

    assert_eq!(model.max_value(), 0);
    assert_eq!(model.grid().line_count, 0);
    assert!(model.points().is_empty());
}

#[test]
fn zero_amounts_build_a_neutral_model() {
    let model = LineModel::build(dataset(&[0, 0]), Viewport::new(800, 600));

    assert_eq!(model.grid().line_count, 0);
    assert!(model.points().is_empty());
}

#[test]
fn measure_accepts_the_full_rect_and_reprojects() {
    let mut chart = LineChart::default();
    chart.set_dataset(dataset(&[400, 1_000]));

    assert_eq!(chart.measure(Viewport::new(800, 600)), Viewport::new(800, 600));

    let direct = LineModel::build(dataset(&[400, 1_000]), Viewport::new(800, 600));
    assert_eq!(chart.model(), Some(&direct));
}

#[test]
fn frame_counts_follow_the_draw_order() {
    let mut chart = LineChart::default();
    chart.measure(Viewport::new(800, 600));
    chart.set_dataset(dataset(&[400, 1_000]));

    let mut renderer = NullRenderer::default();
    chart.render(&mut renderer).expect("frame renders");

    // One smoothed path, one marker per point.
    assert_eq!(renderer.last_polyline_count, 1);
    assert_eq!(renderer.last_circle_count, 2);
    // 3 horizontal grid lines + zero baseline + 2 vertical date lines.
    assert_eq!(renderer.last_line_count, 6);
    // 3 grid labels + "0" + 2 date labels.
    assert_eq!(renderer.last_text_count, 6);
}

#[test]
fn path_starts_at_the_bottom_left_origin() {
    let mut chart = LineChart::default();
    chart.measure(Viewport::new(800, 600));
    chart.set_dataset(dataset(&[400, 1_000]));

    let frame = chart.build_frame();
    assert_eq!(frame.polylines[0].vertices[0], (0.0, 600.0));
    assert_eq!(frame.polylines[0].vertices.len(), 3);
}

#[test]
fn neutral_model_draws_only_the_baseline() {
    let mut chart = LineChart::default();
    chart.measure(Viewport::new(800, 600));
    chart.set_dataset(dataset(&[]));

    let mut renderer = NullRenderer::default();
    chart.render(&mut renderer).expect("frame renders");

    assert_eq!(renderer.last_polyline_count, 0);
    assert_eq!(renderer.last_circle_count, 0);
    assert_eq!(renderer.last_line_count, 1);
    assert_eq!(renderer.last_text_count, 1);
}

#[test]
fn dataset_changes_request_a_redraw() {
    let mut chart = LineChart::default();
    chart.measure(Viewport::new(800, 600));
    assert!(!chart.needs_redraw());

    chart.set_dataset(dataset(&[100]));
    assert!(chart.take_redraw_request());
    assert!(!chart.needs_redraw());
}
