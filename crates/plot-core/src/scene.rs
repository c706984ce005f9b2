// File: crates/plot-core/src/scene.rs
// Summary: Retained in-memory canvas; records drawn elements and serializes them as an SVG document.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::rc::Rc;

use crate::canvas::{Attrs, Canvas, Drawable};
use crate::error::{GraphicsError, Result};
use crate::geometry::PxPoint;
use crate::path::{self, fmt_num, PathCommand};
use crate::theme::Style;
use crate::types::Size;

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Line { from: PxPoint, to: PxPoint },
    Polyline(Vec<PxPoint>),
    Path(Vec<PathCommand>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub shape: Shape,
    pub attrs: BTreeMap<String, String>,
}

impl Element {
    fn new(shape: Shape) -> Self {
        Self { shape, attrs: BTreeMap::new() }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn style(&self) -> Style {
        Style::from_attrs(self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

/// Handle to an element stored in a `Scene`. Clones refer to the same element.
#[derive(Clone, Debug)]
pub struct SceneHandle(Rc<RefCell<Element>>);

impl SceneHandle {
    pub fn element(&self) -> Element {
        self.0.borrow().clone()
    }

    pub fn get_attr(&self, key: &str) -> Option<String> {
        self.0.borrow().attrs.get(key).cloned()
    }
}

impl Drawable for SceneHandle {
    fn attr(self, attrs: &Attrs<'_>) -> Self {
        {
            let mut el = self.0.borrow_mut();
            for (k, v) in attrs {
                el.attrs.insert((*k).to_string(), (*v).to_string());
            }
        }
        self
    }
}

/// Canvas that keeps every element in draw order.
#[derive(Debug)]
pub struct Scene {
    size: Size,
    elements: Vec<Rc<RefCell<Element>>>,
}

impl Scene {
    pub fn new(size: Size) -> Result<Self> {
        size.validate()?;
        Ok(Self { size, elements: Vec::new() })
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Snapshot of all elements in draw order.
    pub fn elements(&self) -> Vec<Element> {
        self.elements.iter().map(|e| e.borrow().clone()).collect()
    }

    fn push(&mut self, shape: Shape) -> SceneHandle {
        let el = Rc::new(RefCell::new(Element::new(shape)));
        self.elements.push(Rc::clone(&el));
        SceneHandle(el)
    }

    /// Standalone SVG document. Catmull-Rom runs are written as cubic curves.
    pub fn to_svg(&self) -> String {
        let (w, h) = (fmt_num(self.size.width), fmt_num(self.size.height));
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        for el in &self.elements {
            let el = el.borrow();
            let attrs = attrs_to_svg(&el.attrs);
            let _ = match &el.shape {
                Shape::Line { from, to } => writeln!(
                    out,
                    r#"  <line x1="{}" y1="{}" x2="{}" y2="{}"{attrs}/>"#,
                    fmt_num(from.x),
                    fmt_num(from.y),
                    fmt_num(to.x),
                    fmt_num(to.y)
                ),
                Shape::Polyline(pts) => {
                    let points = pts
                        .iter()
                        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
                        .collect::<Vec<_>>()
                        .join(" ");
                    writeln!(out, r#"  <polyline points="{points}"{attrs}/>"#)
                }
                Shape::Path(cmds) => {
                    let d = path::to_svg_d(&path::to_cubic(cmds));
                    writeln!(out, r#"  <path d="{d}"{attrs}/>"#)
                }
            };
        }
        out.push_str("</svg>\n");
        out
    }

    /// Write `to_svg()` to `path`, creating parent directories.
    pub fn save_svg(&self, path: impl AsRef<std::path::Path>) -> std::io::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_svg())
    }
}

impl Canvas for Scene {
    type Handle = SceneHandle;

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<SceneHandle> {
        let (from, to) = (PxPoint::new(x1, y1), PxPoint::new(x2, y2));
        if !from.is_finite() || !to.is_finite() {
            return Err(GraphicsError::Canvas(format!(
                "line ({x1}, {y1}) -> ({x2}, {y2}) has non-finite coordinates"
            )));
        }
        Ok(self.push(Shape::Line { from, to }))
    }

    fn polyline(&mut self, coords: &[f64]) -> Result<SceneHandle> {
        if coords.len() < 4 || coords.len() % 2 != 0 {
            return Err(GraphicsError::Canvas(format!(
                "polyline needs an even number of at least 4 coordinates, got {}",
                coords.len()
            )));
        }
        let pts: Vec<PxPoint> = coords.chunks_exact(2).map(|c| PxPoint::new(c[0], c[1])).collect();
        if pts.iter().any(|p| !p.is_finite()) {
            return Err(GraphicsError::Canvas("polyline has non-finite coordinates".into()));
        }
        Ok(self.push(Shape::Polyline(pts)))
    }

    fn path(&mut self, d: &str) -> Result<SceneHandle> {
        let cmds = path::parse(d)?;
        Ok(self.push(Shape::Path(cmds)))
    }
}

fn attrs_to_svg(attrs: &BTreeMap<String, String>) -> String {
    let mut s = String::new();
    for (k, v) in attrs {
        let _ = write!(s, r#" {}="{}""#, k, xml_escape(v));
    }
    s
}

fn xml_escape(v: &str) -> String {
    let mut out = String::with_capacity(v.len());
    for ch in v.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
