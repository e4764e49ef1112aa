use chart_scale::api::{ChartLayout, ChartLayoutConfig, ChartStyle, PlotInsets};
use chart_scale::core::{MAX_TICK_COUNT, SeriesSet, Viewport};
use chart_scale::render::Color;

#[test]
fn config_json_round_trip() {
    let config = ChartLayoutConfig::default()
        .with_insets(PlotInsets::uniform(12.0))
        .with_tick_counts(8, 6);

    let json = config.to_json_pretty().expect("serialize");
    let restored = ChartLayoutConfig::from_json_str(&json).expect("parse");

    assert_eq!(restored, config);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let restored = ChartLayoutConfig::from_json_str(r#"{ "y_tick_count": 9 }"#).expect("parse");

    assert_eq!(restored.y_tick_count, 9);
    assert_eq!(restored.x_tick_count, ChartLayoutConfig::default().x_tick_count);
    assert_eq!(restored.insets, PlotInsets::default());
}

#[test]
fn negative_inset_is_rejected() {
    let json = r#"{ "insets": { "left_px": -1.0, "right_px": 0.0, "top_px": 0.0, "bottom_px": 0.0 } }"#;

    assert!(ChartLayoutConfig::from_json_str(json).is_err());
    assert!(
        ChartLayoutConfig::default()
            .with_insets(PlotInsets::uniform(f64::NAN))
            .validate()
            .is_err()
    );
}

#[test]
fn malformed_json_is_reported() {
    assert!(ChartLayoutConfig::from_json_str("{ not json").is_err());
}

#[test]
fn series_colors_cycle_through_palette() {
    let style = ChartStyle {
        series_colors: vec![Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 1.0, 0.0)],
        ..ChartStyle::default()
    };

    assert_eq!(style.series_color(0), style.series_color(2));
    assert_ne!(style.series_color(0), style.series_color(1));
}

#[test]
fn empty_palette_falls_back_to_label_color() {
    let style = ChartStyle {
        series_colors: Vec::new(),
        ..ChartStyle::default()
    };

    assert_eq!(style.series_color(3), style.label_color);
}

#[test]
fn tick_counts_are_clamped_to_supported_range() {
    let config = ChartLayoutConfig::default().with_tick_counts(0, 100_000);
    assert_eq!(config.x_tick_count, 1);
    assert_eq!(config.y_tick_count, MAX_TICK_COUNT);

    let loaded = ChartLayoutConfig::from_json_str(r#"{ "x_tick_count": 5000 }"#).expect("parse");
    assert_eq!(loaded.x_tick_count, MAX_TICK_COUNT);
}

#[test]
fn huge_tick_count_still_reaches_domain_end() {
    let series = SeriesSet::from_values(vec![vec![0.0, 23.0]]);
    let config = ChartLayoutConfig::default().with_tick_counts(5, 100_000);
    let layout = ChartLayout::compute(&series, Viewport::new(800, 600), config).expect("layout");

    let (lo, hi) = layout.y_scale().domain();
    let step = layout.y_scale().ticks(layout.config().y_tick_count).step;
    let gridlines = layout.y_gridlines();
    let first = gridlines.first().expect("first gridline").value;
    let last = gridlines.last().expect("last gridline").value;

    assert!(step > 0.0);
    assert!(first <= lo + step);
    assert!(last >= hi - step, "last gridline {last} stops short of {hi}");
}
