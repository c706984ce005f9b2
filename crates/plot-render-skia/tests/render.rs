// File: crates/plot-render-skia/tests/render.rs
// Purpose: Raster backend smoke tests: buffer shape, pixels and PNG output.

use plot_core::{draw_axis, draw_chart, AxisLabels, Canvas, Drawable, ImportantPoints, Point, Scene, Size};
use plot_render_skia::{RenderOptions, SkiaRenderer};

#[test]
fn render_rgba8_buffer() {
    let size = Size::new(120.0, 80.0);
    let mut scene = Scene::new(size).unwrap();
    draw_axis(&mut scene, size, 1.0, &AxisLabels::default(), 10.0).unwrap();

    let img = SkiaRenderer::default().render_rgba8(&scene).expect("rgba render");
    assert_eq!((img.width(), img.height()), (120, 80));
    assert_eq!(img.as_raw().len(), 120 * 80 * 4);

    // Background in an empty corner.
    assert_eq!(img.get_pixel(115, 3).0, [255, 255, 255, 255]);
    // Middle of the X axis: black at 70% over white.
    let axis = img.get_pixel(60, 70).0;
    assert!(axis[0] < 120 && axis[1] < 120 && axis[2] < 120, "axis pixel {axis:?}");
}

#[test]
fn background_and_fill_colors() {
    let size = Size::new(40.0, 40.0);
    let mut scene = Scene::new(size).unwrap();
    scene
        .path("M 5 5 L 35 5 L 35 35 L 5 35 Z")
        .unwrap()
        .attr(&[("fill", "#ff0000"), ("stroke", "none")]);

    let opts = RenderOptions { background: plot_core::theme::Rgb::new(0, 0, 255), anti_alias: false };
    let img = SkiaRenderer::new(opts).render_rgba8(&scene).unwrap();
    assert_eq!(img.get_pixel(1, 1).0, [0, 0, 255, 255]);
    assert_eq!(img.get_pixel(20, 20).0, [255, 0, 0, 255]);
}

#[test]
fn render_smoke_png() {
    let paper = Size::new(300.0, 200.0);
    let mut scene = Scene::new(paper).unwrap();
    let imp = ImportantPoints::try_new(Point::new(0.0, 0.0), Point::new(5.0, 25.0), Point::new(10.0, 0.0)).unwrap();
    let chart = draw_chart(|x| x * (10.0 - x), &imp, &mut scene, paper, 10.0).unwrap();
    draw_axis(&mut scene, paper, chart.scale, &AxisLabels::default(), 10.0).unwrap();

    let renderer = SkiaRenderer::default();
    let bytes = renderer.render_png_bytes(&scene).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let decoded = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!((decoded.width(), decoded.height()), (300, 200));

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    renderer.render_to_png(&scene, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}
