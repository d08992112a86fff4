// File: crates/boostlog-core/src/config.rs
// Summary: Chart configuration (columns, x axis, series, value axes), built-in presets, and JSON loading.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::axis::{AxisMax, AxisPosition, AxisSpec, DEFAULT_HEADROOM};
use crate::color::Rgba;
use crate::error::ConfigError;
use crate::ingest::{ColumnDef, ColumnSpec};
use crate::series::SeriesSpec;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct XAxisSpec {
    #[serde(default = "default_x_id")]
    pub id: String,
    /// Column providing x values; the row index is used when it is absent.
    pub column: String,
    #[serde(default)]
    pub title: String,
}

fn default_x_id() -> String {
    "x".to_string()
}

/// Everything that varies between chart variants: which columns to read and
/// how to plot them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub title: String,
    pub columns: ColumnSpec,
    pub x: XAxisSpec,
    pub series: Vec<SeriesSpec>,
    pub axes: Vec<AxisSpec>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::boost()
    }
}

impl ChartConfig {
    /// Gauge pressure (left, psi) against waste-gate duty cycle (right, %).
    pub fn boost() -> Self {
        Self {
            title: "Project P".to_string(),
            columns: standard_columns(),
            x: XAxisSpec { id: default_x_id(), column: "time".to_string(), title: "Time (ms)".to_string() },
            series: vec![
                SeriesSpec::new("gaugepressure", "Gauge Pressure", "y", Rgba::rgb(99, 255, 161)),
                SeriesSpec::new("wgdc", "WGDC", "y1", Rgba::rgb(75, 192, 192)),
            ],
            axes: vec![
                AxisSpec::new("y", "Pressure (psi)", AxisPosition::Left).with_zero_line(),
                AxisSpec::new("y1", "WGDC (%)", AxisPosition::Right).without_grid(),
            ],
        }
    }

    /// Adds manifold pressure to the pressure axis, which is auto-scaled with headroom.
    pub fn boost_manifold() -> Self {
        let mut cfg = Self::boost();
        cfg.series.insert(
            1,
            SeriesSpec::new("manifoldpressure", "Manifold Pressure", "y", Rgba::rgb(255, 99, 132)),
        );
        if let Some(y) = cfg.axes.iter_mut().find(|a| a.id == "y") {
            y.max = AxisMax::Auto { headroom: DEFAULT_HEADROOM };
        }
        cfg
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: ChartConfig = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject series on undeclared axes or columns, repeated axis ids, inverted
    /// fixed bounds, and unusable headroom.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.columns.contains(&self.x.column) {
            return Err(ConfigError::UnknownColumn { what: "x axis".to_string(), column: self.x.column.clone() });
        }
        let mut ids = HashSet::new();
        ids.insert(self.x.id.as_str());
        for axis in &self.axes {
            if !ids.insert(axis.id.as_str()) {
                return Err(ConfigError::DuplicateAxis(axis.id.clone()));
            }
            if let AxisMax::Auto { headroom } = axis.max {
                if !headroom.is_finite() || headroom <= 0.0 {
                    return Err(ConfigError::InvalidHeadroom { axis: axis.id.clone(), headroom });
                }
            }
            if let (Some(min), AxisMax::Fixed { value }) = (axis.min, axis.max) {
                if value < min {
                    return Err(ConfigError::InvertedBounds { axis: axis.id.clone(), min, max: value });
                }
            }
        }
        for s in &self.series {
            if s.axis == self.x.id || !ids.contains(s.axis.as_str()) {
                return Err(ConfigError::UnknownAxis { series: s.label.clone(), axis: s.axis.clone() });
            }
            if !self.columns.contains(&s.column) {
                return Err(ConfigError::UnknownColumn {
                    what: format!("series '{}'", s.label),
                    column: s.column.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Columns logged by the boost controller. `time` also accepts common timestamp headers.
pub fn standard_columns() -> ColumnSpec {
    ColumnSpec::new(vec![
        ColumnDef::new("time").with_aliases(["timestamp", "time (ms)", "time_ms"]),
        ColumnDef::new("gaugepressure"),
        ColumnDef::new("manifoldpressure"),
        ColumnDef::new("wgdc"),
    ])
}

/// Built-in configurations.
pub fn presets() -> Vec<(&'static str, ChartConfig)> {
    vec![("boost", ChartConfig::boost()), ("boost-manifold", ChartConfig::boost_manifold())]
}

/// Find a preset by name (case-insensitive).
pub fn find_preset(name: &str) -> Result<ChartConfig, ConfigError> {
    presets()
        .into_iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, cfg)| cfg)
        .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))
}
