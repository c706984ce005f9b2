// File: crates/plot-core/src/canvas.rs
// Summary: Drawing backend capability consumed by the chart helpers.

use crate::error::Result;

/// Attribute list applied to a drawn element, e.g. `[("stroke", "#000")]`.
pub type Attrs<'a> = [(&'a str, &'a str)];

/// A drawn element that can be restyled after creation.
pub trait Drawable: Sized {
    /// Apply key/value style pairs, replacing earlier values for the same key.
    fn attr(self, attrs: &Attrs<'_>) -> Self;
}

/// Rendering surface. Geometry is in pixels, y grows downwards.
pub trait Canvas {
    type Handle: Drawable;

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self::Handle>;

    /// Open polyline through `coords`, given flat as `[x0, y0, x1, y1, ...]`.
    fn polyline(&mut self, coords: &[f64]) -> Result<Self::Handle>;

    /// Arbitrary path data (see `crate::path`).
    fn path(&mut self, d: &str) -> Result<Self::Handle>;
}
