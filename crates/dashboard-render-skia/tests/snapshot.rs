// File: crates/dashboard-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic dashboard (labels off) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if the snapshot exists, compares decoded pixels for an exact match.
// - Else, logs a note and skips the pixel comparison.
// - Structural pixel checks (size, background, candle and volume colours) run regardless.

use chrono::{Days, NaiveDate};
use dashboard_core::{
    assemble, plan, Bar, ChartOptions, IndicatorConfig, IndicatorEngine, IndicatorParams, PriceSeries,
};
use dashboard_core::{Rgba, Theme};
use dashboard_render_skia::{RenderOptions, SkiaRenderer};

fn render_bytes() -> Vec<u8> {
    let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    let bars = (0..40)
        .map(|i| {
            let c = 20.0 + (i % 7) as f64 * 0.8 - (i % 3) as f64 * 0.5;
            let o = 20.0 + (i % 5) as f64 * 0.6;
            Bar::try_new(start + Days::new(i), o, o.max(c) + 0.5, o.min(c) - 0.5, c, 500 + (i % 4) * 150).unwrap()
        })
        .collect();
    let prices = PriceSeries::try_new(bars).unwrap();
    let config = IndicatorConfig::all();
    let set = IndicatorEngine::compute(&prices, &config, &IndicatorParams::default());
    let chart_opts = ChartOptions { width: 480, height: 320, ..ChartOptions::default() };
    let chart = assemble(&prices, &set, &plan(&config), &chart_opts);

    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    SkiaRenderer::new(opts).render_to_png_bytes(&chart).expect("render bytes")
}

#[test]
fn golden_full_dashboard() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("full_dashboard.png");

    let update = std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(
            got_img.as_raw(),
            want_img.as_raw(),
            "rendered pixels differ from golden snapshot: {}",
            snap_path.display()
        );
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn rendering_is_deterministic() {
    let a = image::load_from_memory(&render_bytes()).expect("decode a").to_rgba8();
    let b = image::load_from_memory(&render_bytes()).expect("decode b").to_rgba8();
    assert_eq!(a.as_raw(), b.as_raw());
}

fn count_color(img: &image::RgbaImage, c: Rgba) -> usize {
    img.pixels().filter(|p| p.0 == [c.r, c.g, c.b, c.a]).count()
}

#[test]
fn full_dashboard_structure() {
    let img = image::load_from_memory(&render_bytes()).expect("decode png").to_rgba8();
    assert_eq!((img.width(), img.height()), (480, 320));

    let theme = Theme::default();
    // the corner sits outside every row band, so only the clear colour reaches it
    let bg = theme.background;
    assert_eq!(img.get_pixel(0, 0).0, [bg.r, bg.g, bg.b, bg.a]);
    assert_eq!(img.get_pixel(479, 319).0, [bg.r, bg.g, bg.b, bg.a]);

    assert!(count_color(&img, theme.candle_up) > 0, "no rising candle bodies drawn");
    assert!(count_color(&img, theme.candle_down) > 0, "no falling candle bodies drawn");
    assert!(count_color(&img, theme.volume) > 0, "no volume bars drawn");
}
