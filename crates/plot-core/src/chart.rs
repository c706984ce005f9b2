// File: crates/plot-core/src/chart.rs
// Summary: Function-plot curve construction: scale, sampling, path data and canvas delegation.

use tracing::debug;

use crate::canvas::{Canvas, Drawable};
use crate::error::Result;
use crate::geometry::PixelTransform;
use crate::path::PathData;
use crate::sampling::{sample_curve, with_highest};
use crate::scale::chart_scale;
use crate::theme::CHART_PATH_STYLE;
use crate::types::{ImportantPoints, Point, RenderOptions, Size};

/// Curve handle returned by `draw_chart`, with the scale it was drawn at.
#[derive(Clone, Debug)]
pub struct DrawnChart<H> {
    pub path: H,
    /// Pixels per logical unit, identical on both axes.
    pub scale: f64,
    /// Logical points the curve passes through, ascending by x.
    pub points: Vec<Point>,
    /// Path data handed to the canvas.
    pub path_data: String,
}

impl<H> DrawnChart<H> {
    pub fn transform(&self, paper: Size, fields: f64) -> PixelTransform {
        PixelTransform::new(self.scale, fields, paper.height)
    }
}

/// Plot `dep` over `[impoints.start.x, impoints.end.x]` as a smooth curve.
///
/// The curve runs through `start`, nine evenly spaced samples of `dep`, `end`
/// and `highest` (merged in by x unless it is already one of the samples).
pub fn draw_chart<F, C>(
    dep: F,
    impoints: &ImportantPoints,
    canvas: &mut C,
    paper_size: Size,
    fields: f64,
) -> Result<DrawnChart<C::Handle>>
where
    F: Fn(f64) -> f64,
    C: Canvas,
{
    let scale = chart_scale(paper_size, impoints, fields)?;
    let samples = sample_curve(dep, impoints)?;
    let points = with_highest(&samples, impoints.highest);
    debug!(
        scale,
        samples = samples.len(),
        points = points.len(),
        "chart geometry computed"
    );

    let t = PixelTransform::new(scale, fields, paper_size.height);
    let path_data = PathData::move_to(t.to_px(impoints.start))
        .catmull_rom(points.iter().map(|p| t.to_px(*p)))
        .into_string();

    let path = canvas.path(&path_data)?.attr(CHART_PATH_STYLE);
    Ok(DrawnChart { path, scale, points, path_data })
}

/// `draw_chart` with paper size and margin taken from `opts`.
pub fn draw_chart_with<F, C>(
    dep: F,
    impoints: &ImportantPoints,
    canvas: &mut C,
    opts: &RenderOptions,
) -> Result<DrawnChart<C::Handle>>
where
    F: Fn(f64) -> f64,
    C: Canvas,
{
    draw_chart(dep, impoints, canvas, opts.paper, opts.fields)
}
