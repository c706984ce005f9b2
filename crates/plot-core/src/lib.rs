// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports the chart helpers, canvas capability and SVG scene.

pub mod axis;
pub mod canvas;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod path;
pub mod sampling;
pub mod scale;
pub mod scene;
pub mod theme;
pub mod types;

pub use axis::{draw_axis, draw_scale, AxisSet, ScaleMarkers};
pub use canvas::{Attrs, Canvas, Drawable};
pub use chart::{draw_chart, draw_chart_with, DrawnChart};
pub use error::{GraphicsError, Result};
pub use geometry::{PixelTransform, PxPoint};
pub use scene::{Scene, SceneHandle};
pub use theme::Style;
pub use types::{AxisLabels, ImportantPoints, Point, RenderOptions, Size, DEFAULT_FIELDS};
