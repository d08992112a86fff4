// File: crates/boostlog-render-skia/tests/snapshot.rs
// Purpose: Golden snapshots with bless flow, one per theme.
// Behavior:
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if the snapshot exists, compares decoded pixels for an exact match.
// - Else, logs a note and returns without failing to ease first run.

use boostlog_core::{build_series, parse, ChartConfig, ThemeMode};
use boostlog_render_skia::{render_png_bytes, RenderOptions, HEIGHT, WIDTH};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render(theme: ThemeMode) -> Vec<u8> {
    let csv = "time,gaugepressure,wgdc\n0,-2,10\n1,1,30\n2,6,55\n3,,60\n4,11,70\n5,14,75\n6,13.5,74\n";
    let cfg = ChartConfig::boost();
    let table = parse(csv, &cfg.columns).expect("parse");
    let model = build_series(&table, &cfg);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    let bytes = render_png_bytes(&model, &theme.palette(), &opts).expect("render bytes");

    // Checked on every run, blessed or not: size and the themed background outside the plot.
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (WIDTH as u32, HEIGHT as u32));
    let bg = theme.palette().background;
    for (x, y) in [(0, 0), (WIDTH as u32 - 1, HEIGHT as u32 - 1)] {
        assert_eq!(img.get_pixel(x, y).0, [bg.r, bg.g, bg.b, 255], "pixel ({x}, {y})");
    }
    bytes
}

#[test]
fn golden_light() {
    let bytes = render(ThemeMode::Light);
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/boost_light.png");
    write_or_compare(&path, &bytes);
}

#[test]
fn golden_dark() {
    let bytes = render(ThemeMode::Dark);
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/boost_dark.png");
    write_or_compare(&path, &bytes);
}
