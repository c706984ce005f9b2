// File: crates/plot-core/src/axis.rs
// Summary: Axis lines with arrowheads, and the reserved point-marker entry point.

use tracing::{debug, warn};

use crate::canvas::{Canvas, Drawable};
use crate::error::{GraphicsError, Result};
use crate::theme::AXIS_STYLE;
use crate::types::{validate_fields, AxisLabels, Point, Size};

/// Extra length of each axis past the origin, in pixels.
pub const INDENT: f64 = 5.0;
/// Arrowhead length along the axis.
pub const ARROW_HEIGHT: f64 = 6.0;
/// Arrowhead half-width across the axis.
pub const ARROW_WIDTH: f64 = 4.0;

/// The four primitives making up a pair of axes.
#[derive(Clone, Debug)]
pub struct AxisSet<H> {
    pub axis_x: H,
    pub axis_y: H,
    pub arrow_x: H,
    pub arrow_y: H,
}

/// Guide lines from a point to both axes, as `draw_scale` would return them.
#[derive(Clone, Debug)]
pub struct ScaleMarkers<H> {
    pub to_x: H,
    pub to_y: H,
}

/// Draw X and Y axes inset by `fields` from the canvas edges, each with an
/// arrowhead at its positive end.
///
/// `scale` and `labels` are accepted for callers that already have them; the
/// geometry does not depend on either yet.
pub fn draw_axis<C: Canvas>(
    canvas: &mut C,
    size: Size,
    scale: f64,
    labels: &AxisLabels,
    fields: f64,
) -> Result<AxisSet<C::Handle>> {
    size.validate()?;
    validate_fields(fields)?;
    if !labels.is_empty() {
        debug!(x = %labels.x, y = %labels.y, "axis labels are not rendered");
    }
    debug!(scale, fields, "drawing axes");

    let (w, h, f) = (size.width, size.height, fields);

    let axis_x = canvas.line(f - INDENT, h - f, w - f, h - f)?.attr(AXIS_STYLE);
    let axis_y = canvas.line(f, h - f + INDENT, f, f)?.attr(AXIS_STYLE);
    let arrow_x = canvas
        .polyline(&[
            w - f - ARROW_HEIGHT, h - f - ARROW_WIDTH,
            w - f, h - f,
            w - f - ARROW_HEIGHT, h - f + ARROW_WIDTH,
        ])?
        .attr(AXIS_STYLE);
    let arrow_y = canvas
        .polyline(&[
            f - ARROW_WIDTH, f + ARROW_HEIGHT,
            f, f,
            f + ARROW_WIDTH, f + ARROW_HEIGHT,
        ])?
        .attr(AXIS_STYLE);

    Ok(AxisSet { axis_x, axis_y, arrow_x, arrow_y })
}

/// Markers showing the coordinates of `point`. Not implemented: always fails.
pub fn draw_scale<C: Canvas>(
    _canvas: &mut C,
    point: Point,
    fields: f64,
) -> Result<ScaleMarkers<C::Handle>> {
    warn!(?point, fields, "draw_scale called but point markers are not implemented");
    Err(GraphicsError::NotImplemented("draw_scale"))
}
