// File: crates/plot-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Point;

/// A position on the rendering surface; y grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PxPoint {
    pub x: f64,
    pub y: f64,
}

impl PxPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Add for PxPoint {
    type Output = PxPoint;
    fn add(self, o: PxPoint) -> PxPoint { PxPoint::new(self.x + o.x, self.y + o.y) }
}

impl std::ops::Sub for PxPoint {
    type Output = PxPoint;
    fn sub(self, o: PxPoint) -> PxPoint { PxPoint::new(self.x - o.x, self.y - o.y) }
}

impl std::ops::Div<f64> for PxPoint {
    type Output = PxPoint;
    fn div(self, k: f64) -> PxPoint { PxPoint::new(self.x / k, self.y / k) }
}

/// Uniform logical-to-pixel mapping with a margin and a flipped y axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelTransform {
    pub scale: f64,
    pub fields: f64,
    pub height: f64,
}

impl PixelTransform {
    pub const fn new(scale: f64, fields: f64, height: f64) -> Self {
        Self { scale, fields, height }
    }

    #[inline]
    pub fn to_px(&self, p: Point) -> PxPoint {
        PxPoint::new(
            p.x * self.scale + self.fields,
            self.height - (p.y * self.scale + self.fields),
        )
    }

    /// Inverse of `to_px`; meaningless when `scale` is zero.
    #[inline]
    pub fn to_logical(&self, p: PxPoint) -> Point {
        Point::new(
            (p.x - self.fields) / self.scale,
            (self.height - self.fields - p.y) / self.scale,
        )
    }
}
