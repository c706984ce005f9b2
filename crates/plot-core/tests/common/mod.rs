// File: crates/plot-core/tests/common/mod.rs
// Purpose: Recording Canvas test double shared by the integration tests.

#![allow(dead_code)]

use plot_core::{Attrs, Canvas, Drawable, GraphicsError, Result};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Line(f64, f64, f64, f64),
    Polyline(Vec<f64>),
    Path(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Recorded {
    pub call: Call,
    pub attrs: Vec<(String, String)>,
}

impl Recorded {
    pub fn attr_value(&self, key: &str) -> Option<&str> {
        self.attrs.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

impl Drawable for Recorded {
    fn attr(mut self, attrs: &Attrs<'_>) -> Self {
        self.attrs.extend(attrs.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        self
    }
}

/// Records every call; `fail_with` makes every operation fail.
#[derive(Default)]
pub struct RecordingCanvas {
    pub calls: Vec<Call>,
    pub fail_with: Option<String>,
}

impl RecordingCanvas {
    fn record(&mut self, call: Call) -> Result<Recorded> {
        if let Some(msg) = &self.fail_with {
            return Err(GraphicsError::Canvas(msg.clone()));
        }
        self.calls.push(call.clone());
        Ok(Recorded { call, attrs: Vec::new() })
    }
}

impl Canvas for RecordingCanvas {
    type Handle = Recorded;

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Recorded> {
        self.record(Call::Line(x1, y1, x2, y2))
    }

    fn polyline(&mut self, coords: &[f64]) -> Result<Recorded> {
        self.record(Call::Polyline(coords.to_vec()))
    }

    fn path(&mut self, d: &str) -> Result<Recorded> {
        self.record(Call::Path(d.to_string()))
    }
}

/// Split `M x y R x y x y ...` into the move-to point and the curve points.
pub fn split_path(d: &str) -> ((f64, f64), Vec<(f64, f64)>) {
    let tokens: Vec<&str> = d.split_whitespace().collect();
    assert_eq!(tokens[0], "M");
    assert_eq!(tokens[3], "R");
    let num = |s: &str| s.parse::<f64>().expect("number");
    let start = (num(tokens[1]), num(tokens[2]));
    let rest = tokens[4..]
        .chunks(2)
        .map(|c| (num(c[0]), num(c[1])))
        .collect();
    (start, rest)
}
