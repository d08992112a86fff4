// File: crates/boostlog-core/src/lib.rs
// Summary: Core library entry point; CSV-to-chart pipeline, palettes, configuration, and the load session.

pub mod axis;
pub mod color;
pub mod config;
pub mod error;
pub mod ingest;
pub mod series;
pub mod session;
pub mod theme;

pub use axis::{headroom_max, AxisConfig, AxisMax, AxisPosition, AxisSpec, ScaleKind, DEFAULT_HEADROOM, EMPTY_AXIS_MAX};
pub use color::Rgba;
pub use config::{find_preset, presets, ChartConfig, XAxisSpec};
pub use error::{ColorParseError, ConfigError, LoadError, ParseError};
pub use ingest::{decode_text, parse, parse_bytes, ColumnDef, ColumnSpec, ColumnStats, NumericColumn, ParsedTable};
pub use series::{build_series, ChartModel, ChartSeries, SeriesSpec};
pub use session::{accepts_file_name, ChartView, ColumnReport, InFlightPolicy, LoadTicket, Viewer};
pub use theme::{palette, Palette, ThemeMode, ThemePreference};
