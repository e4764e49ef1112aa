use approx::assert_abs_diff_eq;
use chart_scale::api::{ChartLayout, ChartLayoutConfig, ChartStyle, PlotArea, PlotInsets};
use chart_scale::core::{PlotPoint, SeriesSet, Viewport};
use chart_scale::error::ChartError;
use chart_scale::render::{Axis, StrokeKind};

fn insets() -> PlotInsets {
    PlotInsets {
        left_px: 40.0,
        right_px: 0.0,
        top_px: 10.0,
        bottom_px: 24.0,
    }
}

fn config() -> ChartLayoutConfig {
    ChartLayoutConfig::default()
        .with_insets(insets())
        .with_tick_counts(4, 5)
}

fn sample_series() -> SeriesSet {
    SeriesSet::new().with_series("close", vec![1.0, 5.0, 3.0, 8.0, 2.0])
}

#[test]
fn plot_area_subtracts_insets_from_viewport() {
    let series = sample_series();
    let layout =
        ChartLayout::compute(&series, Viewport::new(140, 134), config()).expect("layout");

    assert_eq!(
        layout.plot_area(),
        PlotArea {
            left: 40.0,
            top: 10.0,
            width: 100.0,
            height: 100.0,
        }
    );
    assert_eq!(layout.x_scale().range(), (0.0, 100.0));
    assert_eq!(layout.y_scale().range(), (0.0, 100.0));
}

#[test]
fn scales_are_built_from_dataset_bounds() {
    let series = sample_series();
    let layout =
        ChartLayout::compute(&series, Viewport::new(140, 134), config()).expect("layout");

    assert_eq!(layout.y_scale().domain(), (1.0, 8.0));
    assert_eq!(layout.x_scale().domain(), (0.0, 4.0));
    assert_eq!(layout.y_scale().forward(4.5), 50.0);
}

#[test]
fn screen_y_grows_downward() {
    let series = sample_series();
    let layout =
        ChartLayout::compute(&series, Viewport::new(140, 134), config()).expect("layout");

    assert_eq!(layout.value_to_screen_y(8.0), 10.0);
    assert_eq!(layout.value_to_screen_y(1.0), 110.0);
    assert_eq!(layout.index_to_screen_x(2.0), 90.0);
    assert_eq!(
        layout.point_at(0, 3).expect("point"),
        PlotPoint::new(115.0, 10.0)
    );
}

#[test]
fn project_series_places_every_point() {
    let series = sample_series();
    let layout =
        ChartLayout::compute(&series, Viewport::new(140, 134), config()).expect("layout");

    let points = layout.project_series(0).expect("projection");
    assert_eq!(points.len(), 5);
    assert_eq!(points[0], PlotPoint::new(40.0, 110.0));
    assert_eq!(points[4].x, 140.0);
    assert_abs_diff_eq!(points[4].y, 110.0 - 100.0 / 7.0, epsilon = 1e-9);
    assert!(points.iter().all(|point| point.is_finite()));
}

#[test]
fn value_gridlines_carry_formatted_labels() {
    let series = sample_series();
    let layout =
        ChartLayout::compute(&series, Viewport::new(140, 134), config()).expect("layout");

    let ticks = layout.y_gridlines();
    let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    assert_eq!(ticks[0].pixel, 110.0);
    assert_eq!(ticks[7].pixel, 10.0);
}

#[test]
fn index_gridlines_span_the_plot_width() {
    let series = sample_series();
    let layout =
        ChartLayout::compute(&series, Viewport::new(140, 134), config()).expect("layout");

    let ticks = layout.x_gridlines();
    let pixels: Vec<f64> = ticks.iter().map(|tick| tick.pixel).collect();
    assert_eq!(pixels, vec![40.0, 65.0, 90.0, 115.0, 140.0]);
    assert_eq!(ticks[4].label, "4");
}

#[test]
fn gridlines_outside_the_domain_are_dropped() {
    let series = SeriesSet::from_values(vec![vec![1.5, 11.5]]);
    let layout =
        ChartLayout::compute(&series, Viewport::new(140, 134), config()).expect("layout");

    let values: Vec<f64> = layout.y_gridlines().iter().map(|tick| tick.value).collect();
    assert_eq!(layout.y_scale().ticks(5).start, 1.0);
    assert_eq!(values, vec![3.0, 5.0, 7.0, 9.0, 11.0]);
}

#[test]
fn fractional_value_labels_use_precision_digits() {
    let series = SeriesSet::from_values(vec![vec![0.0, 0.25, 0.73]]);
    let layout =
        ChartLayout::compute(&series, Viewport::new(140, 134), config()).expect("layout");

    let ticks = layout.y_gridlines();
    assert_eq!(ticks[0].label, "0.0");
    assert_eq!(ticks[1].label, "0.1");
    assert_eq!(ticks.last().map(|tick| tick.label.as_str()), Some("0.7"));
}

#[test]
fn multiple_series_share_both_scales() {
    let series = SeriesSet::from_values(vec![vec![1.0, 2.0, 3.0], vec![10.0, -4.0]]);
    let layout =
        ChartLayout::compute(&series, Viewport::new(140, 134), config()).expect("layout");

    assert_eq!(layout.y_scale().domain(), (-4.0, 10.0));
    assert_eq!(layout.x_scale().domain(), (0.0, 2.0));
    assert_eq!(layout.project_series(1).expect("projection").len(), 2);
}

#[test]
fn flat_series_gets_zero_based_domain() {
    let series = SeriesSet::from_values(vec![vec![5.0, 5.0, 5.0]]);
    let layout =
        ChartLayout::compute(&series, Viewport::new(140, 134), config()).expect("layout");

    assert_eq!(layout.y_scale().domain(), (0.0, 5.0));
    assert_eq!(layout.value_to_screen_y(5.0), 10.0);
}

#[test]
fn invalid_viewport_is_rejected() {
    let series = sample_series();
    let result = ChartLayout::compute(&series, Viewport::new(0, 0), config());

    assert!(matches!(
        result,
        Err(ChartError::InvalidViewport {
            width: 0,
            height: 0
        })
    ));
}

#[test]
fn empty_series_is_rejected() {
    let empty = SeriesSet::new();
    let first_empty = SeriesSet::from_values(vec![Vec::new(), vec![1.0]]);

    assert!(matches!(
        ChartLayout::compute(&empty, Viewport::new(140, 134), config()),
        Err(ChartError::EmptySeries)
    ));
    assert!(matches!(
        ChartLayout::compute(&first_empty, Viewport::new(140, 134), config()),
        Err(ChartError::EmptySeries)
    ));
}

#[test]
fn non_finite_values_are_rejected() {
    let series = SeriesSet::from_values(vec![vec![1.0, f64::NAN]]);
    let result = ChartLayout::compute(&series, Viewport::new(140, 134), config());

    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn insets_larger_than_viewport_are_rejected() {
    let series = sample_series();
    let result = ChartLayout::compute(&series, Viewport::new(30, 20), config());

    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn unknown_series_index_is_reported() {
    let series = sample_series();
    let layout =
        ChartLayout::compute(&series, Viewport::new(140, 134), config()).expect("layout");

    assert!(matches!(
        layout.project_series(3),
        Err(ChartError::SeriesIndexOutOfRange { index: 3, len: 1 })
    ));
    assert!(layout.point_at(0, 5).is_err());
}

#[test]
fn render_frame_contains_gridlines_labels_and_segments() {
    let series = sample_series();
    let layout =
        ChartLayout::compute(&series, Viewport::new(140, 134), config()).expect("layout");

    let frame = layout
        .build_render_frame(&ChartStyle::default())
        .expect("frame");

    assert_eq!(frame.gridline_count(Axis::Value), 8);
    assert_eq!(frame.gridline_count(Axis::Index), 5);
    assert_eq!(frame.series_strokes(0).count(), 4);
    assert_eq!(frame.strokes.len(), 8 + 5 + 4);
    assert_eq!(frame.labels.len(), 8 + 5);

    for stroke in &frame.strokes {
        match stroke.kind {
            StrokeKind::Gridline(Axis::Value) => assert_eq!(stroke.from.y, stroke.to.y),
            StrokeKind::Gridline(Axis::Index) => assert_eq!(stroke.from.x, stroke.to.x),
            StrokeKind::Series { index } => assert_eq!(index, 0),
        }
    }
    let plot_left = layout.plot_area().left;
    assert!(
        frame
            .labels
            .iter()
            .filter(|label| label.axis == Axis::Value)
            .all(|label| label.anchor.x < plot_left)
    );
    assert!(frame.validate().is_ok());
}

#[test]
fn relayout_after_resize_rebuilds_scales() {
    let series = sample_series();
    let small =
        ChartLayout::compute(&series, Viewport::new(140, 134), config()).expect("layout");
    let large =
        ChartLayout::compute(&series, Viewport::new(440, 334), config()).expect("layout");

    assert_eq!(small.y_scale().domain(), large.y_scale().domain());
    assert_eq!(large.y_scale().range(), (0.0, 300.0));
    assert_abs_diff_eq!(large.y_scale().forward(4.5), 150.0, epsilon = 1e-9);
}
