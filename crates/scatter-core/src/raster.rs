// File: crates/scatter-core/src/raster.rs
// Summary: Headless PNG rendering of the scatter chart using Skia CPU raster surfaces (feature `png`).

use std::path::Path;

use skia_safe as skia;

use crate::chart::{write_output, RenderOptions, ScatterChart};
use crate::error::{ChartError, Result};
use crate::theme::Color;

fn sk(c: Color, alpha: u8) -> skia::Color {
    let (r, g, b) = c.rgb;
    skia::Color::from_argb(alpha, r, g, b)
}

impl ScatterChart {
    /// Encode the chart as PNG bytes. Tooltips are interactive-only and are not drawn.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (w, h) = (self.layout.width as i32, self.layout.height as i32);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| ChartError::Encode("failed to create raster surface".into()))?;
        let canvas = surface.canvas();
        let theme = &opts.theme;

        canvas.clear(sk(theme.background, 255));
        canvas.save();
        canvas.translate((self.layout.margin.left as f32, self.layout.margin.top as f32));

        let plot_w = self.layout.plot_width() as f32;
        let plot_h = self.layout.plot_height() as f32;

        // Axes
        let mut axis_paint = skia::Paint::default();
        axis_paint.set_color(sk(theme.axis, 255));
        axis_paint.set_anti_alias(true);
        axis_paint.set_stroke_width(1.0);
        let mut font = skia::Font::default();
        font.set_size(10.0);

        canvas.draw_line((0.0, plot_h), (plot_w, plot_h), &axis_paint);
        for (v, label) in self.x_axis.tick_labels() {
            let x = self.x_scale().apply(v) as f32;
            canvas.draw_line((x, plot_h), (x, plot_h + 6.0), &axis_paint);
            canvas.draw_str(&label, (x - 3.0 * label.len() as f32, plot_h + 19.0), &font, &axis_paint);
        }
        canvas.draw_line((0.0, 0.0), (0.0, plot_h), &axis_paint);
        for (v, label) in self.y_axis.tick_labels() {
            let y = self.y_scale().apply(v) as f32;
            canvas.draw_line((-6.0, y), (0.0, y), &axis_paint);
            canvas.draw_str(&label, (-9.0 - 6.0 * label.len() as f32, y + 3.0), &font, &axis_paint);
        }

        // Points
        let alpha = (theme.point_opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(sk(theme.point_fill, alpha));
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.0);
        stroke.set_color(sk(theme.point_stroke, alpha));

        let mut label_paint = skia::Paint::default();
        label_paint.set_anti_alias(true);
        label_paint.set_color(sk(theme.point_label, 255));
        let mut label_font = skia::Font::default();
        label_font.set_size(opts.label_font_size as f32);

        let radius = opts.point_radius as f32;
        for p in self.points() {
            // NaN centres are skipped, as a browser would leave them undrawn
            if !p.center.is_finite() {
                continue;
            }
            let c = (p.center.x as f32, p.center.y as f32);
            canvas.draw_circle(c, radius, &fill);
            canvas.draw_circle(c, radius, &stroke);
            if opts.draw_labels {
                let abbr = &self.records[p.index].abbr;
                canvas.draw_str(abbr, (p.label.x as f32, p.label.y as f32), &label_font, &label_paint);
            }
        }

        // Captions; `draw_labels` only governs the per-point abbreviations
        let mut caption_paint = skia::Paint::default();
        caption_paint.set_anti_alias(true);
        caption_paint.set_color(sk(theme.caption, 255));
        let mut caption_font = skia::Font::default();
        caption_font.set_size(16.0);

        canvas.draw_str(
            &self.x_axis.label,
            (plot_w / 2.0, plot_h + self.layout.margin.top as f32 - 5.0),
            &caption_font,
            &caption_paint,
        );
        canvas.save();
        canvas.rotate(-90.0, None);
        canvas.draw_str(
            &self.y_axis.label,
            (-plot_h / 2.0, 56.0 - self.layout.margin.left as f32),
            &caption_font,
            &caption_paint,
        );
        canvas.restore();
        canvas.restore();

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::Encode("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_output(output_png_path.as_ref(), &bytes)
    }
}
