// File: crates/boostlog-render-skia/src/scale.rs
// Summary: Value-to-pixel transforms (linear and log10) and tick placement for one axis.

use boostlog_core::ScaleKind;

/// Maps `[vmin, vmax]` onto `[start_px, end_px]`. For a y axis `start_px` is
/// the bottom edge, so larger values land higher on screen.
#[derive(Clone, Copy, Debug)]
pub struct AxisScale {
    pub start_px: f32,
    pub end_px: f32,
    pub vmin: f64,
    pub vmax: f64,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl AxisScale {
    pub fn new(kind: ScaleKind, start_px: f32, end_px: f32, vmin: f64, vmax: f64) -> Self {
        match kind {
            ScaleKind::Linear => Self::new_linear(start_px, end_px, vmin, vmax),
            ScaleKind::Log10 => Self::new_log10(start_px, end_px, vmin, vmax),
        }
    }

    pub fn new_linear(start_px: f32, end_px: f32, vmin: f64, mut vmax: f64) -> Self {
        if (vmax - vmin).abs() < 1e-12 {
            vmax = vmin + 1.0;
        }
        Self { start_px, end_px, vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 }
    }

    pub fn new_log10(start_px: f32, end_px: f32, mut vmin: f64, mut vmax: f64) -> Self {
        let eps = 1e-12;
        vmin = vmin.max(eps);
        if vmax <= vmin {
            vmax = vmin * 10.0;
        }
        Self { start_px, end_px, vmin, vmax, log: true, log_min: vmin.log10(), log_max: vmax.log10() }
    }

    /// Position of `v` as a fraction of the axis (0 at `vmin`, 1 at `vmax`).
    #[inline]
    pub fn fraction(&self, v: f64) -> f64 {
        if self.log {
            let span = (self.log_max - self.log_min).max(1e-12);
            (v.max(1e-12).log10() - self.log_min) / span
        } else {
            (v - self.vmin) / (self.vmax - self.vmin).max(1e-12)
        }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.start_px + self.fraction(v) as f32 * (self.end_px - self.start_px)
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.vmin.min(self.vmax) && v <= self.vmin.max(self.vmax)
    }

    /// `count` evenly spaced tick values (even in log space for log axes).
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        if self.log {
            linspace(self.log_min, self.log_max, count).into_iter().map(|e| 10f64.powf(e)).collect()
        } else {
            linspace(self.vmin, self.vmax, count)
        }
    }
}

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Tick label with precision chosen from the visible span.
pub fn format_tick(v: f64, span: f64) -> String {
    let span = span.abs();
    let decimals = if span >= 50.0 {
        0
    } else if span >= 5.0 {
        1
    } else if span >= 0.5 {
        2
    } else {
        3
    };
    let v = if v.abs() < 0.5 * 10f64.powi(-decimals) { 0.0 } else { v };
    format!("{:.*}", decimals as usize, v)
}
