// File: crates/plot-core/src/sampling.rs
// Summary: Curve sampling over the important-points domain and peak insertion.

use crate::error::{GraphicsError, Result};
use crate::types::{ImportantPoints, Point};

/// Number of equal-width segments the domain is split into.
pub const SEGMENTS: u32 = 10;

/// Sample `dep` across `[start.x, end.x]`.
///
/// The result always begins with `start` and ends with `end`; interior samples
/// sit at `start.x + c, start.x + 2c, ...` while `x <= end.x - c`, where
/// `c = (end.x - start.x) / SEGMENTS`. The step is accumulated, so the
/// interior count can drift by one for domains that are not exactly
/// representable. At most `SEGMENTS - 1` interior samples are taken, and
/// sampling stops early once `x + c` no longer moves `x` (far from the origin
/// the step can fall below the float spacing).
pub fn sample_curve<F>(dep: F, impoints: &ImportantPoints) -> Result<Vec<Point>>
where
    F: Fn(f64) -> f64,
{
    impoints.validate()?;
    let ImportantPoints { start, end, .. } = *impoints;
    let c = (end.x - start.x) / SEGMENTS as f64;

    let mut points = Vec::with_capacity(SEGMENTS as usize + 2);
    points.push(start);
    if c > 0.0 {
        let mut x = start.x + c;
        for _ in 1..SEGMENTS {
            if x > end.x - c {
                break;
            }
            let y = dep(x);
            if !y.is_finite() {
                return Err(GraphicsError::invalid(format!(
                    "curve is not defined at x = {x} (got {y})"
                )));
            }
            points.push(Point::new(x, y));
            let next = x + c;
            if next == x {
                break;
            }
            x = next;
        }
    }
    points.push(end);
    Ok(points)
}

/// Return `points` with `highest` merged in at its x position, unless an
/// identical point (same x and y) is already present. Equal x keeps the
/// existing points first.
pub fn with_highest(points: &[Point], highest: Point) -> Vec<Point> {
    if points.iter().any(|p| p.x == highest.x && p.y == highest.y) {
        return points.to_vec();
    }
    let at = points.partition_point(|p| p.x <= highest.x);
    let mut out = Vec::with_capacity(points.len() + 1);
    out.extend_from_slice(&points[..at]);
    out.push(highest);
    out.extend_from_slice(&points[at..]);
    out
}
