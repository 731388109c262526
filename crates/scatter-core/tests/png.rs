// File: crates/scatter-core/tests/png.rs
// Purpose: Raster backend smoke test (only with `--features png`).
#![cfg(feature = "png")]

use scatter_core::{Layout, RenderOptions, ScatterChart, StateRecord};

#[test]
fn render_smoke_png() {
    let chart = ScatterChart::new(
        vec![
            StateRecord::new("Ohio", "OH", 14.2, 22.5),
            StateRecord::new("Utah", "UT", 11.7, 13.6),
        ],
        Layout::default(),
    );
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance

    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (1200, 660));
    // top-left corner is outside the plot: plain background
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

fn default_font_has_glyphs() -> bool {
    skia_safe::Font::default().str_to_glyphs_vec("Poverty").iter().any(|&g| g != 0)
}

#[test]
fn captions_drawn_without_point_labels() {
    if !default_font_has_glyphs() {
        eprintln!("[png] no default typeface; skipping caption check");
        return;
    }
    let records = || vec![StateRecord::new("Ohio", "OH", 14.2, 22.5)];
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };

    let with_captions = ScatterChart::new(records(), Layout::default());
    let mut without_captions = ScatterChart::new(records(), Layout::default());
    without_captions.x_axis.label.clear();
    without_captions.y_axis.label.clear();

    let a = with_captions.render_to_png_bytes(&opts).expect("render");
    let b = without_captions.render_to_png_bytes(&opts).expect("render");
    assert_ne!(a, b, "captions should be drawn even when point labels are off");
}
