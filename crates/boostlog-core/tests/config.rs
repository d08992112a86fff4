// File: crates/boostlog-core/tests/config.rs
// Purpose: Chart configuration defaults, presets, JSON loading, and validation.

use boostlog_core::{find_preset, presets, AxisMax, ChartConfig, ConfigError, DEFAULT_HEADROOM};

#[test]
fn default_matches_boost_page() {
    let cfg = ChartConfig::default();
    assert_eq!(cfg.title, "Project P");
    assert_eq!(cfg.x.column, "time");
    assert_eq!(cfg.series.len(), 2);
    assert_eq!(cfg.series[0].column, "gaugepressure");
    assert_eq!(cfg.series[1].axis, "y1");
    assert!(cfg.axes[0].emphasize_zero);
    assert!(!cfg.axes[1].draw_grid);
    cfg.validate().expect("default is valid");
}

#[test]
fn presets_are_valid_and_findable() {
    for (name, cfg) in presets() {
        cfg.validate().unwrap_or_else(|e| panic!("preset {name}: {e}"));
    }
    let manifold = find_preset("Boost-Manifold").unwrap();
    assert_eq!(manifold.series.len(), 3);
    assert_eq!(manifold.axes[0].max, AxisMax::Auto { headroom: DEFAULT_HEADROOM });
    assert!(matches!(find_preset("nope"), Err(ConfigError::UnknownPreset(_))));
}

#[test]
fn json_round_trip_and_defaults() {
    let text = r##"{
        "columns": [{ "name": "time" }, { "name": "boost", "aliases": ["boost_psi"] }],
        "x": { "column": "time", "title": "Time (s)" },
        "series": [{ "column": "boost", "label": "Boost", "axis": "y", "color": "#3366ff" }],
        "axes": [{ "id": "y", "position": "left", "max": { "mode": "auto" } }]
    }"##;
    let cfg = ChartConfig::from_json_str(text).expect("valid");
    assert_eq!(cfg.x.id, "x");
    assert_eq!(cfg.columns.columns[1].aliases, vec!["boost_psi"]);
    assert_eq!(cfg.axes[0].max, AxisMax::Auto { headroom: DEFAULT_HEADROOM });
    assert!(cfg.axes[0].draw_grid);

    let again = ChartConfig::from_json_str(&cfg.to_json_pretty().unwrap()).unwrap();
    assert_eq!(again, cfg);
}

#[test]
fn validation_errors() {
    let mut cfg = ChartConfig::boost();
    cfg.series[0].axis = "y9".into();
    assert!(matches!(cfg.validate(), Err(ConfigError::UnknownAxis { .. })));

    let mut cfg = ChartConfig::boost();
    cfg.axes[1].id = "y".into();
    assert!(matches!(cfg.validate(), Err(ConfigError::DuplicateAxis(_))));

    let mut cfg = ChartConfig::boost();
    cfg.axes[0].max = AxisMax::Auto { headroom: 0.0 };
    assert!(matches!(cfg.validate(), Err(ConfigError::InvalidHeadroom { .. })));

    let mut cfg = ChartConfig::boost();
    cfg.axes[1].min = Some(0.0);
    cfg.axes[1].max = AxisMax::Fixed { value: -5.0 };
    assert!(matches!(cfg.validate(), Err(ConfigError::InvertedBounds { .. })));

    assert!(matches!(ChartConfig::from_json_str("{"), Err(ConfigError::Json(_))));
}

#[test]
fn undeclared_columns_are_rejected() {
    let mut cfg = ChartConfig::boost();
    cfg.series[0].column = "gaugepresure".into();
    match cfg.validate() {
        Err(ConfigError::UnknownColumn { what, column }) => {
            assert_eq!(what, "series 'Gauge Pressure'");
            assert_eq!(column, "gaugepresure");
        }
        other => panic!("expected UnknownColumn, got {other:?}"),
    }

    let mut cfg = ChartConfig::boost();
    cfg.x.column = "tme".into();
    assert!(matches!(cfg.validate(), Err(ConfigError::UnknownColumn { .. })));
    assert!(boostlog_core::Viewer::new(cfg).is_err());
}

#[test]
fn demo_config_and_log_load() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos");
    let cfg = ChartConfig::load(root.join("boost-wide.json")).expect("demo config");
    assert_eq!(cfg.series.len(), 3);
    assert_eq!(cfg.axes[1].max, AxisMax::Fixed { value: 100.0 });

    let bytes = std::fs::read(root.join("boost_log.csv")).expect("demo log");
    let table = boostlog_core::parse_bytes(&bytes, &cfg.columns).expect("parse demo log");
    assert_eq!(table.row_count, 121);
    assert_eq!(table.column("manifoldpressure").map(|c| c.stats.coercion_failures), Some(1));
    assert_eq!(table.column("gaugepressure").map(|c| c.stats.missing), Some(1));
}
