// File: crates/plot-core/src/theme.rs
// Summary: Style constants for charts and axes, and typed parsing of style attributes.

use crate::canvas::Attrs;

/// Curve drawn by `draw_chart`.
pub const CHART_PATH_STYLE: &Attrs<'static> = &[
    ("stroke-width", "3"),
    ("stroke", "#5389e0"),
    ("fill", "#FFF"),
];

/// Axis lines and arrowheads drawn by `draw_axis`.
pub const AXIS_STYLE: &Attrs<'static> = &[
    ("stroke-width", "3"),
    ("stroke", "#000"),
    ("stroke-opacity", "0.7"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rgb`, `#rrggbb` or one of a few basic color names.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            let digit = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok();
            return match hex.len() {
                3 => Some(Self::new(digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
                6 => {
                    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
                    Some(Self::new(byte(0)?, byte(2)?, byte(4)?))
                }
                _ => None,
            };
        }
        match s.to_ascii_lowercase().as_str() {
            "black" => Some(Self::BLACK),
            "white" => Some(Self::WHITE),
            "red" => Some(Self::new(255, 0, 0)),
            "green" => Some(Self::new(0, 128, 0)),
            "blue" => Some(Self::new(0, 0, 255)),
            "gray" | "grey" => Some(Self::new(128, 128, 128)),
            _ => None,
        }
    }
}

/// How an element's stroke or fill is painted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    None,
    Color(Rgb),
}

/// Typed view over an element's attributes, with SVG defaults for anything
/// unset or unparsable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub stroke: Paint,
    pub stroke_width: f32,
    pub stroke_opacity: f32,
    pub fill: Paint,
    pub fill_opacity: f32,
    pub opacity: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: Paint::None,
            stroke_width: 1.0,
            stroke_opacity: 1.0,
            fill: Paint::Color(Rgb::BLACK),
            fill_opacity: 1.0,
            opacity: 1.0,
        }
    }
}

impl Style {
    pub fn from_attrs<'a, I>(attrs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut style = Self::default();
        for (k, v) in attrs {
            style.apply(k, v);
        }
        style
    }

    /// Apply one attribute; unknown keys and malformed values are ignored.
    pub fn apply(&mut self, key: &str, value: &str) {
        let unit = |v: &str| v.trim().parse::<f32>().ok().map(|x| x.clamp(0.0, 1.0));
        match key {
            "stroke" => {
                if let Some(p) = parse_paint(value) {
                    self.stroke = p;
                }
            }
            "fill" => {
                if let Some(p) = parse_paint(value) {
                    self.fill = p;
                }
            }
            "stroke-width" => {
                let w = value.trim().trim_end_matches("px").parse::<f32>().ok();
                if let Some(w) = w.filter(|w| w.is_finite() && *w >= 0.0) {
                    self.stroke_width = w;
                }
            }
            "stroke-opacity" => self.stroke_opacity = unit(value).unwrap_or(self.stroke_opacity),
            "fill-opacity" => self.fill_opacity = unit(value).unwrap_or(self.fill_opacity),
            "opacity" => self.opacity = unit(value).unwrap_or(self.opacity),
            _ => {}
        }
    }

    /// Effective stroke alpha in `0..=1`.
    pub fn stroke_alpha(&self) -> f32 {
        self.stroke_opacity * self.opacity
    }

    pub fn fill_alpha(&self) -> f32 {
        self.fill_opacity * self.opacity
    }
}

fn parse_paint(v: &str) -> Option<Paint> {
    if v.trim().eq_ignore_ascii_case("none") {
        Some(Paint::None)
    } else {
        Rgb::parse(v).map(Paint::Color)
    }
}
