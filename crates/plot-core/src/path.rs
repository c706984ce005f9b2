// File: crates/plot-core/src/path.rs
// Summary: SVG-style path data: builder, parser, Catmull-Rom expansion and serialization.
// Notes:
// - Only absolute commands are understood: M, L, C, R (Catmull-Rom through
//   points) and Z. `R` is not part of SVG 1.1, so `to_cubic` rewrites it into
//   cubic Béziers before handing data to a standard consumer.

use std::fmt::Write as _;

use crate::error::{GraphicsError, Result};
use crate::geometry::PxPoint;

#[derive(Clone, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(PxPoint),
    LineTo(PxPoint),
    CubicTo { c1: PxPoint, c2: PxPoint, to: PxPoint },
    /// Smooth curve through the current point and every listed point.
    CatmullRom(Vec<PxPoint>),
    Close,
}

/// Format a coordinate in its shortest round-trip form (`10`, `2.5`), never `-0`.
///
/// Magnitudes of at least `1e21` or below `1e-6` use exponent notation with an
/// explicit sign on positive exponents (`1e+21`, `1.5e-7`), the way browsers
/// print numbers.
pub fn fmt_num(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let mag = v.abs();
    if v.is_finite() && (mag >= 1e21 || mag < 1e-6) {
        let sci = format!("{v:e}");
        return match sci.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => sci,
        };
    }
    format!("{v}")
}

/// Incremental builder for the `M x y R x y x y ...` strings handed to `Canvas::path`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathData {
    d: String,
}

impl PathData {
    pub fn move_to(p: PxPoint) -> Self {
        let mut d = String::new();
        push_cmd(&mut d, 'M', &[p]);
        Self { d }
    }

    pub fn line_to(mut self, p: PxPoint) -> Self {
        push_cmd(&mut self.d, 'L', &[p]);
        self
    }

    pub fn catmull_rom<I>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = PxPoint>,
    {
        let pts: Vec<PxPoint> = points.into_iter().collect();
        push_cmd(&mut self.d, 'R', &pts);
        self
    }

    pub fn close(mut self) -> Self {
        self.d.push_str("Z ");
        self
    }

    pub fn as_str(&self) -> &str {
        &self.d
    }

    pub fn into_string(self) -> String {
        self.d
    }
}

// Every token is followed by a single space, trailing one included.
fn push_cmd(d: &mut String, letter: char, pts: &[PxPoint]) {
    d.push(letter);
    d.push(' ');
    for p in pts {
        let _ = write!(d, "{} {} ", fmt_num(p.x), fmt_num(p.y));
    }
}

// ---- parsing ----------------------------------------------------------------

struct Lexer<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self { src: src.as_bytes(), pos: 0 }
    }

    fn err(&self, reason: impl Into<String>) -> GraphicsError {
        GraphicsError::InvalidPath { offset: self.pos, reason: reason.into() }
    }

    fn skip_separators(&mut self) {
        while let Some(b) = self.src.get(self.pos) {
            if b.is_ascii_whitespace() || *b == b',' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn eof(&mut self) -> bool {
        self.skip_separators();
        self.pos >= self.src.len()
    }

    fn at_number(&mut self) -> bool {
        self.skip_separators();
        matches!(self.src.get(self.pos), Some(b) if b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.'))
    }

    fn command(&mut self) -> Result<u8> {
        self.skip_separators();
        match self.src.get(self.pos) {
            Some(b) if b.is_ascii_alphabetic() => {
                self.pos += 1;
                Ok(*b)
            }
            Some(b) => Err(self.err(format!("expected a command letter, found '{}'", *b as char))),
            None => Err(self.err("unexpected end of path data")),
        }
    }

    fn number(&mut self) -> Result<f64> {
        self.skip_separators();
        let start = self.pos;
        let mut end = start;
        let bytes = self.src;
        if matches!(bytes.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        while matches!(bytes.get(end), Some(b) if b.is_ascii_digit() || *b == b'.') {
            end += 1;
        }
        if matches!(bytes.get(end), Some(b'e' | b'E')) {
            let mut exp = end + 1;
            if matches!(bytes.get(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            if matches!(bytes.get(exp), Some(b) if b.is_ascii_digit()) {
                while matches!(bytes.get(exp), Some(b) if b.is_ascii_digit()) {
                    exp += 1;
                }
                end = exp;
            }
        }
        let text = std::str::from_utf8(&bytes[start..end]).map_err(|_| self.err("invalid utf-8"))?;
        let v: f64 = text
            .parse()
            .map_err(|_| self.err(format!("expected a number, found '{text}'")))?;
        if !v.is_finite() {
            return Err(self.err(format!("coordinate '{text}' is not finite")));
        }
        self.pos = end;
        Ok(v)
    }

    fn pair(&mut self) -> Result<PxPoint> {
        let x = self.number()?;
        let y = self.number()?;
        Ok(PxPoint::new(x, y))
    }
}

/// Parse absolute path data into commands.
///
/// Coordinate groups may repeat after a command letter (`L 1 2 3 4`); extra
/// pairs after `M` are implicit line-tos, as in SVG.
pub fn parse(d: &str) -> Result<Vec<PathCommand>> {
    let mut lx = Lexer::new(d);
    let mut cmds = Vec::new();

    if lx.eof() {
        return Err(lx.err("path data is empty"));
    }

    while !lx.eof() {
        let at = lx.pos;
        let letter = lx.command()?;
        if cmds.is_empty() && letter != b'M' {
            return Err(GraphicsError::InvalidPath {
                offset: at,
                reason: "path data must start with 'M'".into(),
            });
        }
        match letter {
            b'M' => {
                cmds.push(PathCommand::MoveTo(lx.pair()?));
                while lx.at_number() {
                    cmds.push(PathCommand::LineTo(lx.pair()?));
                }
            }
            b'L' => {
                cmds.push(PathCommand::LineTo(lx.pair()?));
                while lx.at_number() {
                    cmds.push(PathCommand::LineTo(lx.pair()?));
                }
            }
            b'C' => loop {
                let c1 = lx.pair()?;
                let c2 = lx.pair()?;
                let to = lx.pair()?;
                cmds.push(PathCommand::CubicTo { c1, c2, to });
                if !lx.at_number() {
                    break;
                }
            },
            b'R' => {
                let mut pts = vec![lx.pair()?];
                while lx.at_number() {
                    pts.push(lx.pair()?);
                }
                cmds.push(PathCommand::CatmullRom(pts));
            }
            b'Z' | b'z' => cmds.push(PathCommand::Close),
            b'm' | b'l' | b'c' | b'r' => {
                return Err(GraphicsError::InvalidPath {
                    offset: at,
                    reason: format!("relative command '{}' is not supported", letter as char),
                })
            }
            other => {
                return Err(GraphicsError::InvalidPath {
                    offset: at,
                    reason: format!("unknown command '{}'", other as char),
                })
            }
        }
    }
    Ok(cmds)
}

// ---- conversion -------------------------------------------------------------

/// Rewrite every Catmull-Rom run as cubic Béziers; other commands pass through.
///
/// The spline runs through the current point followed by the listed points.
/// Tangents use the uniform 1/6 construction, with the first and last points
/// duplicated, so `n` spline points yield `n - 1` cubic segments.
pub fn to_cubic(cmds: &[PathCommand]) -> Vec<PathCommand> {
    let mut out = Vec::with_capacity(cmds.len());
    let mut current = PxPoint::default();
    let mut subpath_start = PxPoint::default();

    for cmd in cmds {
        match cmd {
            PathCommand::MoveTo(p) => {
                current = *p;
                subpath_start = *p;
                out.push(cmd.clone());
            }
            PathCommand::LineTo(p) | PathCommand::CubicTo { to: p, .. } => {
                current = *p;
                out.push(cmd.clone());
            }
            PathCommand::Close => {
                current = subpath_start;
                out.push(PathCommand::Close);
            }
            PathCommand::CatmullRom(pts) => {
                let mut spline = Vec::with_capacity(pts.len() + 1);
                spline.push(current);
                spline.extend_from_slice(pts);
                let n = spline.len();
                for i in 0..n - 1 {
                    let p0 = if i == 0 { spline[i] } else { spline[i - 1] };
                    let p1 = spline[i];
                    let p2 = spline[i + 1];
                    let p3 = if i + 2 < n { spline[i + 2] } else { spline[i + 1] };
                    out.push(PathCommand::CubicTo {
                        c1: p1 + (p2 - p0) / 6.0,
                        c2: p2 - (p3 - p1) / 6.0,
                        to: p2,
                    });
                }
                current = spline[n - 1];
            }
        }
    }
    out
}

/// Serialize commands back to path data, one space between tokens.
pub fn to_svg_d(cmds: &[PathCommand]) -> String {
    let mut parts: Vec<String> = Vec::new();
    let push = |parts: &mut Vec<String>, p: &PxPoint| {
        parts.push(fmt_num(p.x));
        parts.push(fmt_num(p.y));
    };
    for cmd in cmds {
        match cmd {
            PathCommand::MoveTo(p) => {
                parts.push("M".into());
                push(&mut parts, p);
            }
            PathCommand::LineTo(p) => {
                parts.push("L".into());
                push(&mut parts, p);
            }
            PathCommand::CubicTo { c1, c2, to } => {
                parts.push("C".into());
                push(&mut parts, c1);
                push(&mut parts, c2);
                push(&mut parts, to);
            }
            PathCommand::CatmullRom(pts) => {
                parts.push("R".into());
                for p in pts {
                    push(&mut parts, p);
                }
            }
            PathCommand::Close => parts.push("Z".into()),
        }
    }
    parts.join(" ")
}
