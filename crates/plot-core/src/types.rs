// File: crates/plot-core/src/types.rs
// Summary: Shared types and constants (points, sizes, margins, labels).

use crate::error::{GraphicsError, Result};

/// Default surface width in pixels.
pub const WIDTH: f64 = 500.0;
/// Default surface height in pixels.
pub const HEIGHT: f64 = 500.0;
/// Default margin kept free on every side of the drawable area, in pixels.
pub const DEFAULT_FIELDS: f64 = 10.0;

/// A 2D coordinate in logical (un-scaled) chart units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// The three control points bounding a plotted curve: leftmost, peak, rightmost.
/// Contract: `start.x <= end.x` and every coordinate is finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImportantPoints {
    pub start: Point,
    pub highest: Point,
    pub end: Point,
}

impl ImportantPoints {
    /// Construct and validate.
    pub fn try_new(start: Point, highest: Point, end: Point) -> Result<Self> {
        let p = Self { start, highest, end };
        p.validate()?;
        Ok(p)
    }

    /// Re-check the contract for values built with a struct literal.
    pub fn validate(&self) -> Result<()> {
        for (name, p) in [("start", self.start), ("highest", self.highest), ("end", self.end)] {
            if !p.is_finite() {
                return Err(GraphicsError::invalid(format!("{name} point {p:?} is not finite")));
            }
        }
        if self.start.x > self.end.x {
            return Err(GraphicsError::invalid(format!(
                "start.x ({}) is greater than end.x ({})",
                self.start.x, self.end.x
            )));
        }
        Ok(())
    }
}

/// Canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Both sides must be positive and finite.
    pub fn validate(&self) -> Result<()> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(GraphicsError::invalid(format!(
                "canvas size {}x{} must be positive",
                self.width, self.height
            )))
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// Text written under each axis. Accepted by `draw_axis` but not drawn yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AxisLabels {
    pub x: String,
    pub y: String,
}

impl AxisLabels {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self { x: x.into(), y: y.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty() && self.y.is_empty()
    }
}

/// Margins must be finite and non-negative.
pub(crate) fn validate_fields(fields: f64) -> Result<()> {
    if fields.is_finite() && fields >= 0.0 {
        Ok(())
    } else {
        Err(GraphicsError::invalid(format!("fields ({fields}) must be a non-negative number")))
    }
}

/// Chart configuration: paper size and uniform margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub paper: Size,
    pub fields: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { paper: Size::default(), fields: DEFAULT_FIELDS }
    }
}
