// File: crates/boostlog-render-skia/src/chart.rs
// Summary: Headless PNG rendering of a chart model: grid, zero line, dual y axes, gapped line series, legend, title.

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::debug;

use boostlog_core::{AxisConfig, AxisPosition, ChartModel, ChartSeries, ChartView, Palette, Rgba, ScaleKind};

use crate::scale::{format_tick, AxisScale};
use crate::types::{Insets, HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    /// Title, tick labels, axis titles and legend text. Off for pixel-stable snapshots.
    pub draw_labels: bool,
    pub draw_legend: bool,
    pub line_width: f32,
    pub x_ticks: usize,
    pub y_ticks: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            draw_labels: true,
            draw_legend: true,
            line_width: 2.0,
            x_ticks: 10,
            y_ticks: 6,
        }
    }
}

/// Render the displayed chart of a session view.
pub fn render_view(view: &ChartView<'_>, opts: &RenderOptions) -> Result<Vec<u8>> {
    render_png_bytes(view.chart, &view.palette, opts)
}

/// Render to a PNG file at `output_png_path`, creating parent directories.
pub fn render_to_png(
    model: &ChartModel,
    palette: &Palette,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_png_bytes(model, palette, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Render to in-memory PNG bytes using a CPU raster surface.
pub fn render_png_bytes(model: &ChartModel, palette: &Palette, opts: &RenderOptions) -> Result<Vec<u8>> {
    if opts.width <= opts.insets.hsum() as i32 || opts.height <= opts.insets.vsum() as i32 {
        anyhow::bail!("surface {}x{} leaves no room for the plot area", opts.width, opts.height);
    }
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let canvas = surface.canvas();
    canvas.clear(sk(palette.background));

    let plot = Plot {
        l: opts.insets.left as f32,
        t: opts.insets.top as f32,
        r: (opts.width - opts.insets.right as i32) as f32,
        b: (opts.height - opts.insets.bottom as i32) as f32,
    };
    let font = Fonts::new();

    let x_cfg = model.axis(&model.x_axis);
    let (x_min, x_max) = resolve_range(x_cfg, finite(model.x_values.iter().copied()), false);
    let x_scale = AxisScale::new(
        x_cfg.map(|a| a.scale).unwrap_or_default(),
        plot.l,
        plot.r,
        x_min,
        x_max,
    );

    // y scales in axis-id order; series on an undeclared axis are not drawn
    let y_scales: Vec<(&AxisConfig, AxisScale)> = model
        .value_axes()
        .map(|axis| {
            let values = model.series_on_axis(&axis.id).flat_map(|s| s.values.iter().copied());
            let (lo, hi) = resolve_range(Some(axis), finite(values), axis.scale == ScaleKind::Linear);
            (axis, AxisScale::new(axis.scale, plot.b, plot.t, lo, hi))
        })
        .collect();
    debug!(x = ?(x_min, x_max), axes = y_scales.len(), "render ranges");

    draw_grid(canvas, &plot, palette, &x_scale, &y_scales, opts);
    draw_axes(canvas, &plot, palette, &y_scales);

    canvas.save();
    canvas.clip_rect(skia::Rect::from_ltrb(plot.l, plot.t, plot.r, plot.b), skia::ClipOp::Intersect, true);
    for s in &model.series {
        if let Some((_, y_scale)) = y_scales.iter().find(|(a, _)| a.id == s.axis) {
            draw_line_series(canvas, &model.x_values, s, &x_scale, y_scale, opts.line_width);
        }
    }
    canvas.restore();

    if opts.draw_labels {
        draw_tick_labels(canvas, &plot, palette, &font, &x_scale, &y_scales, opts);
        let x_title = x_cfg.map(|a| a.title.as_str()).unwrap_or_default();
        let x_title = if model.x_is_row_index { format!("{x_title} (row index)") } else { x_title.to_string() };
        draw_titles(canvas, &plot, palette, &font, &model.title, x_title.trim(), &y_scales, opts.width);
    }
    if opts.draw_legend {
        draw_legend(canvas, &plot, palette, &font, &model.series, opts.draw_labels);
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

// ---- helpers ----------------------------------------------------------------

struct Plot {
    l: f32,
    t: f32,
    r: f32,
    b: f32,
}

struct Fonts {
    body: skia::Font,
    title: skia::Font,
}

impl Fonts {
    fn new() -> Self {
        let typeface = skia::FontMgr::default().legacy_make_typeface(None::<&str>, skia::FontStyle::default());
        let make = |size: f32| {
            let mut font = skia::Font::default();
            if let Some(tf) = typeface.clone() {
                font.set_typeface(tf);
            }
            font.set_size(size);
            font
        };
        Self { body: make(13.0), title: make(18.0) }
    }
}

fn sk(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke(color: Rgba, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(sk(color));
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn fill(color: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(sk(color));
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

fn finite(values: impl Iterator<Item = Option<f64>>) -> Option<(f64, f64)> {
    values.flatten().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Configured bounds win; open bounds fit the data. Linear value axes get a 2%
/// margin on each open end.
fn resolve_range(axis: Option<&AxisConfig>, data: Option<(f64, f64)>, margin: bool) -> (f64, f64) {
    let (fixed_min, fixed_max) = axis.map(|a| (a.min, a.max)).unwrap_or((None, None));
    let (mut lo, mut hi) = data.unwrap_or((0.0, 1.0));
    if (hi - lo).abs() < 1e-9 {
        hi = lo + 1.0;
    }
    if margin {
        let m = (hi - lo) * 0.02;
        lo -= m;
        hi += m;
    }
    let lo = fixed_min.unwrap_or(lo);
    let mut hi = fixed_max.unwrap_or(hi);
    if !(hi > lo) {
        hi = lo + 1.0;
    }
    (lo, hi)
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &Plot,
    palette: &Palette,
    x_scale: &AxisScale,
    y_scales: &[(&AxisConfig, AxisScale)],
    opts: &RenderOptions,
) {
    let grid = stroke(palette.grid, 1.0);
    for x in x_scale.ticks(opts.x_ticks) {
        let px = x_scale.to_px(x);
        canvas.draw_line((px, plot.t), (px, plot.b), &grid);
    }
    for (axis, scale) in y_scales.iter().filter(|(a, _)| a.draw_grid) {
        for y in scale.ticks(opts.y_ticks) {
            let py = scale.to_px(y);
            canvas.draw_line((plot.l, py), (plot.r, py), &grid);
        }
        if axis.emphasize_zero && !scale.log && scale.contains(0.0) {
            let py = scale.to_px(0.0);
            let mut zero = stroke(palette.zero_line, 1.5);
            zero.set_path_effect(skia::PathEffect::dash(&[6.0, 6.0], 0.0));
            canvas.draw_line((plot.l, py), (plot.r, py), &zero);
        }
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: &Plot, palette: &Palette, y_scales: &[(&AxisConfig, AxisScale)]) {
    let axis_paint = stroke(palette.zero_line, 1.0);
    canvas.draw_line((plot.l, plot.b), (plot.r, plot.b), &axis_paint);
    if y_scales.iter().any(|(a, _)| a.position == AxisPosition::Left) {
        canvas.draw_line((plot.l, plot.t), (plot.l, plot.b), &axis_paint);
    }
    if y_scales.iter().any(|(a, _)| a.position == AxisPosition::Right) {
        canvas.draw_line((plot.r, plot.t), (plot.r, plot.b), &axis_paint);
    }
}

/// Polyline through consecutive rows where both x and y are present; a gap
/// in either breaks the line. Isolated points are drawn as dots.
fn draw_line_series(
    canvas: &skia::Canvas,
    xs: &[Option<f64>],
    series: &ChartSeries,
    x_scale: &AxisScale,
    y_scale: &AxisScale,
    line_width: f32,
) {
    let line = stroke(series.color, line_width);
    let dot = fill(series.color);

    let mut path = skia::Path::new();
    let mut run: Vec<(f32, f32)> = Vec::new();
    let flush = |run: &mut Vec<(f32, f32)>, path: &mut skia::Path| {
        match run.as_slice() {
            [] => {}
            [only] => {
                canvas.draw_circle(*only, line_width * 1.5, &dot);
            }
            [first, rest @ ..] => {
                path.move_to(*first);
                for p in rest {
                    path.line_to(*p);
                }
            }
        }
        run.clear();
    };

    for (x, y) in xs.iter().zip(series.values.iter()) {
        match (x, y) {
            (Some(x), Some(y)) => run.push((x_scale.to_px(*x), y_scale.to_px(*y))),
            _ => flush(&mut run, &mut path),
        }
    }
    flush(&mut run, &mut path);
    canvas.draw_path(&path, &line);
}

fn text_paint(color: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(sk(color));
    paint.set_anti_alias(true);
    paint
}

fn text_width(font: &skia::Font, text: &str) -> f32 {
    font.measure_str(text, None).0
}

fn draw_tick_labels(
    canvas: &skia::Canvas,
    plot: &Plot,
    palette: &Palette,
    fonts: &Fonts,
    x_scale: &AxisScale,
    y_scales: &[(&AxisConfig, AxisScale)],
    opts: &RenderOptions,
) {
    let paint = text_paint(palette.text);
    let x_span = x_scale.vmax - x_scale.vmin;
    for x in x_scale.ticks(opts.x_ticks) {
        let label = format_tick(x, x_span);
        let w = text_width(&fonts.body, &label);
        canvas.draw_str(&label, (x_scale.to_px(x) - w * 0.5, plot.b + 18.0), &fonts.body, &paint);
    }

    // Only the first axis on each side gets tick labels.
    for side in [AxisPosition::Left, AxisPosition::Right] {
        let Some((_, scale)) = y_scales.iter().find(|(a, _)| a.position == side) else { continue };
        let span = scale.vmax - scale.vmin;
        for y in scale.ticks(opts.y_ticks) {
            let label = format_tick(y, span);
            let py = scale.to_px(y) + 4.0;
            let px = match side {
                AxisPosition::Right => plot.r + 6.0,
                _ => plot.l - 6.0 - text_width(&fonts.body, &label),
            };
            canvas.draw_str(&label, (px, py), &fonts.body, &paint);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_titles(
    canvas: &skia::Canvas,
    plot: &Plot,
    palette: &Palette,
    fonts: &Fonts,
    title: &str,
    x_title: &str,
    y_scales: &[(&AxisConfig, AxisScale)],
    width: i32,
) {
    let title_paint = text_paint(palette.title);
    let text = text_paint(palette.text);
    if !title.is_empty() {
        let w = text_width(&fonts.title, title);
        canvas.draw_str(title, ((width as f32 - w) * 0.5, 24.0), &fonts.title, &title_paint);
    }
    if !x_title.is_empty() {
        let w = text_width(&fonts.body, x_title);
        canvas.draw_str(x_title, ((plot.l + plot.r - w) * 0.5, plot.b + 40.0), &fonts.body, &text);
    }
    for side in [AxisPosition::Left, AxisPosition::Right] {
        let Some((axis, _)) = y_scales.iter().find(|(a, _)| a.position == side) else { continue };
        if axis.title.is_empty() {
            continue;
        }
        let px = match side {
            AxisPosition::Right => plot.r - text_width(&fonts.body, &axis.title),
            _ => plot.l,
        };
        canvas.draw_str(&axis.title, (px, plot.t - 8.0), &fonts.body, &text);
    }
}

/// One swatch (fill + border in the series colors) and label per series, centered above the plot.
fn draw_legend(
    canvas: &skia::Canvas,
    plot: &Plot,
    palette: &Palette,
    fonts: &Fonts,
    series: &[ChartSeries],
    with_text: bool,
) {
    const SWATCH_W: f32 = 28.0;
    const SWATCH_H: f32 = 10.0;
    const GAP: f32 = 16.0;

    let widths: Vec<f32> = series
        .iter()
        .map(|s| SWATCH_W + if with_text { 6.0 + text_width(&fonts.body, &s.label) } else { 0.0 })
        .collect();
    let total = widths.iter().sum::<f32>() + GAP * widths.len().saturating_sub(1) as f32;
    let mut x = (plot.l + plot.r - total) * 0.5;
    let y = plot.t - 34.0;
    let label_paint = text_paint(palette.text);

    for (s, w) in series.iter().zip(widths) {
        let swatch = skia::Rect::from_xywh(x, y, SWATCH_W, SWATCH_H);
        canvas.draw_rect(swatch, &fill(s.fill));
        canvas.draw_rect(swatch, &stroke(s.color, 1.5));
        if with_text {
            canvas.draw_str(&s.label, (x + SWATCH_W + 6.0, y + SWATCH_H), &fonts.body, &label_paint);
        }
        x += w + GAP;
    }
}
