// File: crates/boostlog-core/src/series.rs
// Summary: Series/axis builder turning parsed columns into a renderable chart model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::axis::{headroom_max, AxisConfig, AxisMax};
use crate::color::Rgba;
use crate::config::ChartConfig;
use crate::ingest::ParsedTable;

/// Alpha of the fill color derived from a series' line color.
pub const DEFAULT_FILL_ALPHA: f32 = 0.5;

/// One plotted series as declared in configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    /// Source column name (a [`crate::ingest::ColumnDef::name`]).
    pub column: String,
    pub label: String,
    /// Target axis id.
    pub axis: String,
    pub color: Rgba,
    #[serde(default)]
    pub fill: Option<Rgba>,
}

impl SeriesSpec {
    pub fn new(column: impl Into<String>, label: impl Into<String>, axis: impl Into<String>, color: Rgba) -> Self {
        Self { column: column.into(), label: label.into(), axis: axis.into(), color, fill: None }
    }

    pub fn fill_color(&self) -> Rgba {
        self.fill.unwrap_or_else(|| self.color.with_alpha(DEFAULT_FILL_ALPHA))
    }
}

/// Chart-ready series descriptor.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: String,
    pub column: String,
    pub values: Vec<Option<f64>>,
    pub axis: String,
    pub color: Rgba,
    pub fill: Rgba,
}

impl ChartSeries {
    pub fn finite_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(|v| *v)
    }
}

/// Everything a renderer needs; rebuilt in full on every parse.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartModel {
    pub title: String,
    pub row_count: usize,
    /// Id of the bottom axis in `axes`.
    pub x_axis: String,
    /// Shared x values; the row index when the x column is absent.
    pub x_values: Vec<Option<f64>>,
    /// Set when `x_values` is the row index rather than the configured column.
    pub x_is_row_index: bool,
    pub series: Vec<ChartSeries>,
    pub axes: BTreeMap<String, AxisConfig>,
    /// Series whose source column was not in the table.
    pub skipped: Vec<String>,
}

impl ChartModel {
    pub fn axis(&self, id: &str) -> Option<&AxisConfig> {
        self.axes.get(id)
    }

    pub fn series_on_axis<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a ChartSeries> + 'a {
        self.series.iter().filter(move |s| s.axis == id)
    }

    /// Value axes (everything but the x axis), in id order.
    pub fn value_axes(&self) -> impl Iterator<Item = &AxisConfig> + '_ {
        self.axes.values().filter(move |a| a.id != self.x_axis)
    }
}

/// Build series and axes for `table` according to `config`. Pure.
pub fn build_series(table: &ParsedTable, config: &ChartConfig) -> ChartModel {
    let mut series = Vec::with_capacity(config.series.len());
    let mut skipped = Vec::new();
    for spec in &config.series {
        match table.values(&spec.column) {
            Some(values) => series.push(ChartSeries {
                label: spec.label.clone(),
                column: spec.column.clone(),
                values: values.to_vec(),
                axis: spec.axis.clone(),
                color: spec.color,
                fill: spec.fill_color(),
            }),
            None => {
                warn!(series = %spec.label, column = %spec.column, "series column not in table; skipped");
                skipped.push(spec.label.clone());
            }
        }
    }

    let mut axes = BTreeMap::new();
    for spec in &config.axes {
        let max = match spec.max {
            AxisMax::Data => None,
            AxisMax::Fixed { value } => Some(value),
            AxisMax::Auto { headroom } => {
                let on_axis = series.iter().filter(|s| s.axis == spec.id);
                let max = headroom_max(on_axis.flat_map(|s| s.finite_values()), headroom);
                // never below a configured min
                Some(spec.min.map_or(max, |min| max.max(min)))
            }
        };
        axes.insert(
            spec.id.clone(),
            AxisConfig {
                id: spec.id.clone(),
                title: spec.title.clone(),
                position: spec.position,
                scale: spec.scale,
                min: spec.min,
                max,
                draw_grid: spec.draw_grid,
                emphasize_zero: spec.emphasize_zero,
            },
        );
    }
    axes.insert(config.x.id.clone(), AxisConfig::x(config.x.id.clone(), config.x.title.clone()));

    let (x_values, x_is_row_index) = match table.values(&config.x.column) {
        Some(values) => (values.to_vec(), false),
        None => {
            warn!(column = %config.x.column, "x column not in table; plotting against row index");
            ((0..table.row_count).map(|i| Some(i as f64)).collect(), true)
        }
    };

    ChartModel {
        title: config.title.clone(),
        row_count: table.row_count,
        x_axis: config.x.id.clone(),
        x_values,
        x_is_row_index,
        series,
        axes,
        skipped,
    }
}
