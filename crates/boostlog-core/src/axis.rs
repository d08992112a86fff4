// File: crates/boostlog-core/src/axis.rs
// Summary: Axis specs (configuration) and resolved axis configs (builder output), plus headroom scaling.

use serde::{Deserialize, Serialize};

/// Multiplier applied to the observed maximum of an auto-scaled axis.
pub const DEFAULT_HEADROOM: f64 = 1.05;
/// Max reported for an auto-scaled axis with no finite values.
pub const EMPTY_AXIS_MAX: f64 = 1.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    #[default]
    Linear,
    Log10,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Left,
    Right,
    Bottom,
}

/// How the upper bound of an axis is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AxisMax {
    /// Left to the renderer (fits the data).
    #[default]
    Data,
    Fixed { value: f64 },
    /// `headroom * max(values on this axis)`.
    Auto {
        #[serde(default = "default_headroom")]
        headroom: f64,
    },
}

fn default_headroom() -> f64 {
    DEFAULT_HEADROOM
}

fn default_true() -> bool {
    true
}

/// A value axis as declared in [`crate::config::ChartConfig`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub position: AxisPosition,
    #[serde(default)]
    pub scale: ScaleKind,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: AxisMax,
    /// Draw this axis' grid lines across the plot area.
    #[serde(default = "default_true")]
    pub draw_grid: bool,
    #[serde(default)]
    pub emphasize_zero: bool,
}

impl AxisSpec {
    pub fn new(id: impl Into<String>, title: impl Into<String>, position: AxisPosition) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            position,
            scale: ScaleKind::Linear,
            min: None,
            max: AxisMax::Data,
            draw_grid: true,
            emphasize_zero: false,
        }
    }

    pub fn auto_scaled(mut self, headroom: f64) -> Self {
        self.max = AxisMax::Auto { headroom };
        self
    }

    pub fn fixed_max(mut self, value: f64) -> Self {
        self.max = AxisMax::Fixed { value };
        self
    }

    pub fn without_grid(mut self) -> Self {
        self.draw_grid = false;
        self
    }

    pub fn with_zero_line(mut self) -> Self {
        self.emphasize_zero = true;
        self
    }
}

/// Resolved axis handed to the renderer. `None` bounds fit the data.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisConfig {
    pub id: String,
    pub title: String,
    pub position: AxisPosition,
    pub scale: ScaleKind,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub draw_grid: bool,
    pub emphasize_zero: bool,
}

impl AxisConfig {
    /// Linear bottom axis that fits the data.
    pub fn x(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            position: AxisPosition::Bottom,
            scale: ScaleKind::Linear,
            min: None,
            max: None,
            draw_grid: true,
            emphasize_zero: false,
        }
    }
}

/// `headroom * max(finite values)`, or [`EMPTY_AXIS_MAX`] when there are no
/// finite values or the product is not finite. A negative peak is raised by
/// `|peak| * (headroom - 1)` instead, so the margin stays above the data.
pub fn headroom_max<I>(values: I, headroom: f64) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let peak = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))));
    let scaled = peak.map(|p| if p >= 0.0 { p * headroom } else { p + p.abs() * (headroom - 1.0) });
    match scaled {
        Some(m) if m.is_finite() => m,
        _ => EMPTY_AXIS_MAX,
    }
}
