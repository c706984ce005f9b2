// File: crates/plot-core/src/scale.rs
// Summary: Uniform logical-to-pixel scale factor for a plotted curve.

use crate::error::{GraphicsError, Result};
use crate::types::{validate_fields, ImportantPoints, Size};

/// Round half up, the way `Math.round` does (`-2.5` rounds to `-2`).
#[inline]
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Scale factor sized so the larger of the peak height and the domain's right
/// edge fits inside the margin-adjusted canvas.
///
/// `scale = round((min(w, h) - 2f) / (max(highest.y, end.x) + 2f))`
///
/// Note that `highest.y` (a vertical extent) is compared with `end.x` (a
/// horizontal one). The formula is kept as is; see
/// `tests/chart.rs::scale_mixes_peak_height_with_domain_end`.
pub fn chart_scale(paper: Size, impoints: &ImportantPoints, fields: f64) -> Result<f64> {
    paper.validate()?;
    validate_fields(fields)?;
    impoints.validate()?;

    let available = paper.min_side() - 2.0 * fields;
    let extent = impoints.highest.y.max(impoints.end.x) + 2.0 * fields;
    if available <= 0.0 {
        return Err(GraphicsError::invalid(format!(
            "margins of {fields}px leave no room on a {}x{} canvas",
            paper.width, paper.height
        )));
    }
    if extent <= 0.0 {
        return Err(GraphicsError::invalid(format!(
            "curve extent {extent} must be positive to compute a scale"
        )));
    }

    let scale = round_half_up(available / extent);
    if scale < 1.0 {
        return Err(GraphicsError::invalid(format!(
            "canvas {}x{} is too small for a curve of extent {extent}",
            paper.width, paper.height
        )));
    }
    Ok(scale)
}
