// File: crates/plot-core/src/render.rs
// Summary: Headless raster pipeline for ScatterMap using Skia CPU surfaces.

use skia_safe as skia;
use thiserror::Error;

use crate::plot::ScatterMap;
use crate::theme::Theme;
use crate::transform::PlotRect;
use crate::types::LABEL_OFFSET_PX;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create raster surface")]
    Surface,
    #[error("pixel readback failed")]
    PixelReadback,
    #[error("PNG encoding failed")]
    PngEncode,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub struct RenderOptions {
    pub theme: Theme,
    pub draw_grid: bool,
    pub draw_labels: bool,
    /// Show the zoom scale readout in the corner.
    pub show_scale: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::dark(),
            draw_grid: true,
            draw_labels: true,
            show_scale: true,
        }
    }
}

impl ScatterMap {
    /// Render into a fresh RGBA8 buffer. Returns (pixels, width, height, row stride).
    pub fn render_to_rgba8(
        &self,
        opts: &RenderOptions,
        now_ms: f64,
    ) -> Result<(Vec<u8>, i32, i32, usize), RenderError> {
        let (w, h) = self.surface_size();
        let mut surface =
            skia::surfaces::raster_n32_premul((w, h)).ok_or(RenderError::Surface)?;
        self.draw(surface.canvas(), opts, now_ms);

        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::PixelReadback);
        }
        Ok((pixels, w, h, stride))
    }

    /// Render and encode to PNG bytes.
    pub fn render_to_png_bytes(
        &self,
        opts: &RenderOptions,
        now_ms: f64,
    ) -> Result<Vec<u8>, RenderError> {
        let (w, h) = self.surface_size();
        let mut surface =
            skia::surfaces::raster_n32_premul((w, h)).ok_or(RenderError::Surface)?;
        self.draw(surface.canvas(), opts, now_ms);
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::PngEncode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        now_ms: f64,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), RenderError> {
        let bytes = self.render_to_png_bytes(opts, now_ms)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn surface_size(&self) -> (i32, i32) {
        let w = self.width.round() as i32;
        let h = self.height.round() as i32;
        (w.max(1).min(i32::MAX / 8), h.max(1).min(i32::MAX / 8))
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, now_ms: f64) {
        let theme = &opts.theme;
        canvas.clear(theme.background);
        let shaper = crate::text::TextShaper::new();
        let (w, h) = self.surface_size();

        if self.is_loading() {
            let msg = if self.has_domain() { "Updating map…" } else { "Loading data…" };
            shaper.draw_centered(canvas, msg, w as f32 * 0.5, h as f32 * 0.5, 16.0, theme.status_text);
            return;
        }

        let Some(transform) = self.transform() else {
            // Normal branch, not an error: nothing placeable yet.
            shaper.draw_centered(
                canvas,
                "No coordinates yet",
                w as f32 * 0.5,
                h as f32 * 0.5 - 10.0,
                16.0,
                theme.status_text,
            );
            shaper.draw_centered(
                canvas,
                "Add points with coordinates to draw the map",
                w as f32 * 0.5,
                h as f32 * 0.5 + 14.0,
                12.0,
                theme.status_text,
            );
            return;
        };
        let plot = transform.plot();

        if opts.draw_grid {
            draw_grid(canvas, &plot, theme);
        }
        if opts.draw_labels {
            self.draw_axis_labels(canvas, &shaper, theme, w, h);
        }
        if let Some(rect) = self.brush_rect() {
            draw_brush(canvas, rect, theme);
        }
        self.draw_points(canvas, &shaper, theme, now_ms);
        if opts.show_scale {
            let readout = format!("scale {:.2}x", self.scale_factor());
            shaper.draw_left(canvas, &readout, 12.0, 24.0, 13.0, theme.hud_text, true);
            shaper.draw_left(canvas, "aspect 1:1", 12.0, 42.0, 11.0, theme.status_text, true);
        }
    }

    fn draw_axis_labels(
        &self,
        canvas: &skia::Canvas,
        shaper: &crate::text::TextShaper,
        theme: &Theme,
        w: i32,
        h: i32,
    ) {
        let labels = self.axis_labels();
        if !labels.x_axis.is_empty() {
            shaper.draw_centered(
                canvas,
                &labels.x_axis,
                w as f32 * 0.5,
                h as f32 - 10.0,
                14.0,
                theme.axis_label,
            );
        }
        if !labels.y_axis.is_empty() {
            canvas.save();
            canvas.translate((15.0, h as f32 * 0.5));
            canvas.rotate(-90.0, None);
            shaper.draw_centered(canvas, &labels.y_axis, 0.0, 0.0, 14.0, theme.axis_label);
            canvas.restore();
        }
    }

    fn draw_points(
        &self,
        canvas: &skia::Canvas,
        shaper: &crate::text::TextShaper,
        theme: &Theme,
        now_ms: f64,
    ) {
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);

        for node in self.scene().nodes() {
            let x = node.x.value_at(now_ms);
            let y = node.y.value_at(now_ms);
            let radius = node.radius.value_at(now_ms);
            let opacity = node.opacity.value_at(now_ms);
            if radius <= 0.05 || opacity <= 0.01 {
                continue;
            }
            let style = theme.point_style(node.emphasis);

            // Offset gradient focus toward the upper-left, like a lit sphere.
            let colors = [with_alpha(style.inner, opacity), with_alpha(style.outer, opacity)];
            let shader = skia::gradient_shader::radial(
                (x - radius * 0.3, y - radius * 0.3),
                radius * 1.4,
                &colors[..],
                None,
                skia::TileMode::Clamp,
                None,
                None,
            );
            fill.set_shader(shader);
            canvas.draw_circle((x, y), radius, &fill);

            stroke.set_color(with_alpha(style.stroke, opacity));
            stroke.set_stroke_width(style.stroke_width);
            canvas.draw_circle((x, y), radius, &stroke);

            if !node.label.is_empty() {
                let selected = node.emphasis == crate::scene::Emphasis::Selected;
                let color = if selected { theme.point_label_selected } else { theme.point_label };
                let label_alpha = if node.emphasis == crate::scene::Emphasis::NewlyAdded {
                    opacity.min(1.0)
                } else {
                    opacity * 0.95
                };
                let w = shaper.measure_width(&node.label, 12.0, false);
                shaper.draw_left(
                    canvas,
                    &node.label,
                    x - w * 0.5,
                    y + LABEL_OFFSET_PX,
                    12.0,
                    with_alpha(color, label_alpha),
                    false,
                );
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, plot: &PlotRect, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_path_effect(skia::PathEffect::dash(&[2.0, 4.0], 0.0));

    // verticals
    for x in linspace(plot.left as f64, plot.right as f64, 10) {
        canvas.draw_line((x as f32, plot.top), (x as f32, plot.bottom), &paint);
    }
    // horizontals
    for y in linspace(plot.top as f64, plot.bottom as f64, 6) {
        canvas.draw_line((plot.left, y as f32), (plot.right, y as f32), &paint);
    }
}

fn draw_brush(canvas: &skia::Canvas, rect: (f32, f32, f32, f32), theme: &Theme) {
    let r = skia::Rect::from_ltrb(rect.0, rect.1, rect.2, rect.3);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.brush_fill);
    canvas.draw_rect(r, &fill);

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(theme.brush_stroke);
    stroke.set_path_effect(skia::PathEffect::dash(&[5.0, 5.0], 0.0));
    canvas.draw_rect(r, &stroke);
}

fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

fn with_alpha(color: skia::Color, alpha: f32) -> skia::Color {
    let a = (color.a() as f32 * alpha.clamp(0.0, 1.0)).round() as u8;
    skia::Color::from_argb(a, color.r(), color.g(), color.b())
}
