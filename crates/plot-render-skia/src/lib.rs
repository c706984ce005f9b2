// File: crates/plot-render-skia/src/lib.rs
// Summary: Skia CPU raster backend; paints a plot-core Scene and exports RGBA pixels or PNG.

use std::io::Cursor;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use image::{ImageFormat, RgbaImage};
use plot_core::geometry::PxPoint;
use plot_core::path::{to_cubic, PathCommand};
use plot_core::scene::{Element, Shape};
use plot_core::theme::{Paint, Rgb};
use plot_core::Scene;
use skia_safe as skia;
use tracing::debug;

pub struct RenderOptions {
    pub background: Rgb,
    pub anti_alias: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { background: Rgb::WHITE, anti_alias: true }
    }
}

pub struct SkiaRenderer {
    opts: RenderOptions,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl SkiaRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts }
    }

    /// Paint `scene` on a CPU raster surface and read the pixels back as RGBA8.
    pub fn render_rgba8(&self, scene: &Scene) -> Result<RgbaImage> {
        let size = scene.size();
        let w = size.width.ceil().max(1.0) as i32;
        let h = size.height.ceil().max(1.0) as i32;

        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;
        {
            let canvas = surface.canvas();
            canvas.clear(to_color(self.opts.background, 1.0));
            let elements = scene.elements();
            debug!(elements = elements.len(), width = w, height = h, "painting scene");
            for el in &elements {
                draw_element(canvas, el, self.opts.anti_alias);
            }
        }

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            bail!("failed to read back surface pixels");
        }
        RgbaImage::from_raw(w as u32, h as u32, pixels)
            .context("pixel buffer does not match the surface size")
    }

    /// Render and encode as PNG in memory.
    pub fn render_png_bytes(&self, scene: &Scene) -> Result<Vec<u8>> {
        let img = self.render_rgba8(scene)?;
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).context("encode PNG failed")?;
        Ok(buf.into_inner())
    }

    /// Render to a PNG file at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, scene: &Scene, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let data = self.render_png_bytes(scene)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, data).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_color(c: Rgb, alpha: f32) -> skia::Color {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    skia::Color::from_argb(a, c.r, c.g, c.b)
}

fn pt(p: &PxPoint) -> (f32, f32) {
    (p.x as f32, p.y as f32)
}

fn commands_to_path(cmds: &[PathCommand]) -> skia::Path {
    let mut path = skia::Path::new();
    for cmd in to_cubic(cmds) {
        match cmd {
            PathCommand::MoveTo(p) => {
                path.move_to(pt(&p));
            }
            PathCommand::LineTo(p) => {
                path.line_to(pt(&p));
            }
            PathCommand::CubicTo { c1, c2, to } => {
                path.cubic_to(pt(&c1), pt(&c2), pt(&to));
            }
            PathCommand::Close => {
                path.close();
            }
            // to_cubic leaves no Catmull-Rom runs behind
            PathCommand::CatmullRom(_) => {}
        }
    }
    path
}

fn draw_element(canvas: &skia::Canvas, el: &Element, anti_alias: bool) {
    let style = el.style();
    let (path, fillable) = match &el.shape {
        Shape::Line { from, to } => {
            let mut p = skia::Path::new();
            p.move_to(pt(from));
            p.line_to(pt(to));
            (p, false)
        }
        Shape::Polyline(pts) => {
            let mut p = skia::Path::new();
            if let Some((first, rest)) = pts.split_first() {
                p.move_to(pt(first));
                for q in rest {
                    p.line_to(pt(q));
                }
            }
            (p, true)
        }
        Shape::Path(cmds) => (commands_to_path(cmds), true),
    };

    // SVG paints fill before stroke.
    if let (true, Paint::Color(c)) = (fillable, style.fill) {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(anti_alias);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(to_color(c, style.fill_alpha()));
        canvas.draw_path(&path, &fill);
    }
    if let Paint::Color(c) = style.stroke {
        if style.stroke_width > 0.0 {
            let mut stroke = skia::Paint::default();
            stroke.set_anti_alias(anti_alias);
            stroke.set_style(skia::paint::Style::Stroke);
            stroke.set_stroke_width(style.stroke_width);
            stroke.set_color(to_color(c, style.stroke_alpha()));
            canvas.draw_path(&path, &stroke);
        }
    }
}
