// File: crates/plot-demo/src/main.rs
// Summary: Demo plots a preset curve with axes and writes SVG, PNG and a CSV of the sampled points.

use std::f64::consts::PI;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use plot_core::types::{HEIGHT, WIDTH};
use plot_core::{
    draw_axis, draw_chart, AxisLabels, DrawnChart, ImportantPoints, Point, RenderOptions, Scene,
    SceneHandle, Size, DEFAULT_FIELDS,
};
use plot_render_skia::SkiaRenderer;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

struct Preset {
    curve: Curve,
    dep: fn(f64) -> f64,
    points: ImportantPoints,
}

fn presets() -> Vec<Preset> {
    vec![
        Preset {
            curve: Curve::Parabola,
            dep: |x| x * x,
            points: ImportantPoints {
                start: Point::new(0.0, 0.0),
                highest: Point::new(10.0, 100.0),
                end: Point::new(10.0, 100.0),
            },
        },
        Preset {
            curve: Curve::Hump,
            dep: |x| x * (10.0 - x),
            points: ImportantPoints {
                start: Point::new(0.0, 0.0),
                highest: Point::new(5.0, 25.0),
                end: Point::new(10.0, 0.0),
            },
        },
        Preset {
            curve: Curve::Sine,
            dep: |x| 5.0 * x.sin() + 5.0,
            points: ImportantPoints {
                start: Point::new(0.0, 5.0),
                highest: Point::new(PI / 2.0, 10.0),
                end: Point::new(2.0 * PI, 5.0),
            },
        },
        Preset {
            curve: Curve::Cubic,
            dep: |x| x * x * x / 10.0,
            points: ImportantPoints {
                start: Point::new(0.0, 0.0),
                highest: Point::new(5.0, 12.5),
                end: Point::new(5.0, 12.5),
            },
        },
        Preset {
            curve: Curve::Tent,
            dep: |x| 10.0 - (x - 5.0).abs() * 2.0,
            points: ImportantPoints {
                start: Point::new(0.0, 0.0),
                highest: Point::new(5.0, 10.0),
                end: Point::new(10.0, 0.0),
            },
        },
    ]
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Curve {
    /// x² on 0..10
    Parabola,
    /// x·(10−x) on 0..10
    Hump,
    /// 5·sin(x)+5 on 0..2π
    Sine,
    /// x³/10 on 0..5
    Cubic,
    /// 10−2|x−5| on 0..10
    Tent,
}

impl Curve {
    fn name(self) -> &'static str {
        match self {
            Curve::Parabola => "parabola",
            Curve::Hump => "hump",
            Curve::Sine => "sine",
            Curve::Cubic => "cubic",
            Curve::Tent => "tent",
        }
    }
}

/// Plot a preset curve with axes to SVG, PNG and a CSV of the drawn points.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Curve preset to plot
    #[arg(value_enum, default_value_t = Curve::Parabola)]
    curve: Curve,
    /// Paper width in pixels
    #[arg(long, default_value_t = WIDTH)]
    width: f64,
    /// Paper height in pixels
    #[arg(long, default_value_t = HEIGHT)]
    height: f64,
    /// Margin around the plot in pixels
    #[arg(long, default_value_t = DEFAULT_FIELDS)]
    fields: f64,
    /// Output directory
    #[arg(long, default_value = "target/out")]
    out: PathBuf,
}

impl Cli {
    fn options(&self) -> RenderOptions {
        RenderOptions { paper: Size::new(self.width, self.height), fields: self.fields }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("plot_demo=info".parse()?))
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let opts = cli.options();
    let preset = presets()
        .into_iter()
        .find(|p| p.curve == cli.curve)
        .with_context(|| format!("no preset for curve '{}'", cli.curve.name()))?;
    let name = preset.curve.name();
    info!(curve = name, width = opts.paper.width, height = opts.paper.height, "plotting");

    let paper = opts.paper;
    let mut scene = Scene::new(paper)?;
    let chart = draw_chart(preset.dep, &preset.points, &mut scene, paper, opts.fields)
        .with_context(|| format!("drawing curve '{}'", name))?;
    draw_axis(&mut scene, paper, chart.scale, &AxisLabels::new("x", "y"), opts.fields)?;
    debug!(path = %chart.path_data, "curve path");
    info!(scale = chart.scale, points = chart.points.len(), "chart drawn");

    let svg_out = cli.out.join(format!("{}.svg", name));
    scene
        .save_svg(&svg_out)
        .with_context(|| format!("writing {}", svg_out.display()))?;
    info!("Wrote {}", svg_out.display());

    let png_out = svg_out.with_extension("png");
    SkiaRenderer::default().render_to_png(&scene, &png_out)?;
    info!("Wrote {}", png_out.display());

    let csv_out = cli.out.join(format!("{}_points.csv", name));
    write_points_csv(&csv_out, &chart, paper, opts.fields)?;
    info!("Wrote {}", csv_out.display());

    Ok(())
}

/// One row per curve point: logical coordinates and their pixel position.
fn write_points_csv(path: &Path, chart: &DrawnChart<SceneHandle>, paper: Size, fields: f64) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    wtr.write_record(["x", "y", "px", "py"])?;
    let t = chart.transform(paper, fields);
    for p in &chart.points {
        let px = t.to_px(*p);
        wtr.write_record([p.x.to_string(), p.y.to_string(), px.x.to_string(), px.y.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}
