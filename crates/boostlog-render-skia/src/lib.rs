// File: crates/boostlog-render-skia/src/lib.rs
// Summary: Renders a `ChartModel` with a `Palette` to PNG using Skia CPU raster surfaces.

pub mod chart;
pub mod scale;
pub mod types;

pub use chart::{render_png_bytes, render_to_png, render_view, RenderOptions};
pub use scale::AxisScale;
pub use types::{Insets, HEIGHT, WIDTH};
