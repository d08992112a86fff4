// File: crates/boostlog-core/tests/series.rs
// Purpose: Series/axis builder: headroom scaling, determinism, skipped series, x fallback.

use boostlog_core::{
    build_series, headroom_max, parse, AxisMax, AxisPosition, AxisSpec, ChartConfig, ColumnSpec, Rgba,
    SeriesSpec, DEFAULT_HEADROOM, EMPTY_AXIS_MAX,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn headroom_over_values() {
    assert!(close(headroom_max([1.0, 5.0, 9.0], DEFAULT_HEADROOM), 9.45));
    assert!(close(headroom_max([-3.0, f64::NAN, 2.0], 2.0), 4.0));
}

#[test]
fn headroom_without_values_is_safe_default() {
    assert_eq!(headroom_max(std::iter::empty(), DEFAULT_HEADROOM), EMPTY_AXIS_MAX);
    assert_eq!(headroom_max([f64::NAN, f64::INFINITY], DEFAULT_HEADROOM), EMPTY_AXIS_MAX);
    assert_eq!(headroom_max([f64::MAX], 10.0), EMPTY_AXIS_MAX);
}

fn two_axis_config() -> ChartConfig {
    let mut cfg = ChartConfig::boost();
    cfg.axes = vec![
        AxisSpec::new("y", "Pressure", AxisPosition::Left).auto_scaled(DEFAULT_HEADROOM),
        AxisSpec::new("y1", "Duty", AxisPosition::Right).fixed_max(100.0).without_grid(),
    ];
    cfg.series.push(SeriesSpec::new("manifoldpressure", "Manifold", "y", Rgba::rgb(255, 0, 0)));
    cfg
}

#[test]
fn auto_axis_spans_every_series_on_it() {
    let csv = "time,gaugepressure,manifoldpressure,wgdc\n0,1,7,40\n1,5,3,45\n2,9,2,50\n";
    let table = parse(csv, &ColumnSpec::from_names(["time", "gaugepressure", "manifoldpressure", "wgdc"])).unwrap();
    let model = build_series(&table, &two_axis_config());

    let y = model.axis("y").unwrap();
    assert!(close(y.max.unwrap(), 9.45));
    assert_eq!(y.position, AxisPosition::Left);
    assert_eq!(model.axis("y1").unwrap().max, Some(100.0));
    assert!(!model.axis("y1").unwrap().draw_grid);
    assert_eq!(model.series_on_axis("y").count(), 2);
}

#[test]
fn auto_axis_with_only_gaps_uses_default() {
    let csv = "time,gaugepressure,wgdc\n0,,1\n1,x,2\n";
    let table = parse(csv, &ColumnSpec::from_names(["time", "gaugepressure", "wgdc"])).unwrap();
    let mut cfg = ChartConfig::boost();
    cfg.axes[0].max = AxisMax::Auto { headroom: DEFAULT_HEADROOM };
    let model = build_series(&table, &cfg);
    assert_eq!(model.axis("y").unwrap().max, Some(EMPTY_AXIS_MAX));
}

#[test]
fn build_is_idempotent() {
    let csv = "time,gaugepressure,manifoldpressure,wgdc\n0,1,7,40\n1,bad,3,45\n";
    let table = parse(csv, &ColumnSpec::from_names(["time", "gaugepressure", "manifoldpressure", "wgdc"])).unwrap();
    let cfg = two_axis_config();
    let first = build_series(&table, &cfg);
    let second = build_series(&table, &cfg);
    assert_eq!(first, second);
}

#[test]
fn missing_source_column_is_skipped() {
    let table = parse("time,wgdc\n0,20\n1,25\n", &ColumnSpec::from_names(["time", "gaugepressure", "wgdc"])).unwrap();
    let model = build_series(&table, &ChartConfig::boost());
    assert_eq!(model.series.len(), 1);
    assert_eq!(model.series[0].label, "WGDC");
    assert_eq!(model.skipped, vec!["Gauge Pressure"]);
}

#[test]
fn x_values_fall_back_to_row_index() {
    let table = parse("gaugepressure,wgdc\n3,20\n4,25\n5,30\n", &ColumnSpec::from_names(["time", "gaugepressure", "wgdc"])).unwrap();
    let model = build_series(&table, &ChartConfig::boost());
    assert_eq!(model.x_values, vec![Some(0.0), Some(1.0), Some(2.0)]);
    assert!(model.x_is_row_index);
    let x = model.axis(&model.x_axis).unwrap();
    assert_eq!(x.position, AxisPosition::Bottom);
    assert_eq!(model.value_axes().count(), 2);
}

#[test]
fn x_values_from_column_are_not_flagged() {
    let table = parse("time,gaugepressure
100,3
200,4
", &ColumnSpec::from_names(["time", "gaugepressure"])).unwrap();
    let model = build_series(&table, &ChartConfig::boost());
    assert_eq!(model.x_values, vec![Some(100.0), Some(200.0)]);
    assert!(!model.x_is_row_index);
}

#[test]
fn negative_peak_keeps_margin_above_data() {
    assert!(close(headroom_max([-10.0, -5.0], DEFAULT_HEADROOM), -4.75));
    assert!(headroom_max([-10.0, -5.0], DEFAULT_HEADROOM) > -5.0);
}

#[test]
fn auto_max_never_below_configured_min() {
    let csv = "time,gaugepressure,wgdc
0,-9,10
1,-8,20
";
    let table = parse(csv, &ColumnSpec::from_names(["time", "gaugepressure", "wgdc"])).unwrap();
    let mut cfg = ChartConfig::boost();
    cfg.axes[0].min = Some(0.0);
    cfg.axes[0].max = AxisMax::Auto { headroom: DEFAULT_HEADROOM };
    let model = build_series(&table, &cfg);

    let y = model.axis("y").unwrap();
    assert_eq!(y.min, Some(0.0));
    assert_eq!(y.max, Some(0.0));

    cfg.axes[0].min = None;
    let y_max = build_series(&table, &cfg).axis("y").and_then(|a| a.max).unwrap();
    assert!(close(y_max, -7.6), "got {y_max}");
}

#[test]
fn fill_defaults_to_half_alpha_line_color() {
    let spec = SeriesSpec::new("wgdc", "WGDC", "y1", Rgba::rgb(75, 192, 192));
    assert_eq!(spec.fill_color(), Rgba::rgba(75, 192, 192, 128));
}
