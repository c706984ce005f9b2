// File: crates/plot-core/tests/chart.rs
// Purpose: Curve construction: scale, sampling, peak insertion and pixel mapping.

mod common;

use std::cell::Cell;

use common::{split_path, Call, RecordingCanvas};
use plot_core::path::fmt_num;
use plot_core::{
    draw_chart, draw_chart_with, GraphicsError, ImportantPoints, Point, RenderOptions, Size,
    DEFAULT_FIELDS,
};

fn parabola() -> ImportantPoints {
    ImportantPoints {
        start: Point::new(0.0, 0.0),
        highest: Point::new(10.0, 100.0),
        end: Point::new(10.0, 100.0),
    }
}

fn hump() -> ImportantPoints {
    ImportantPoints {
        start: Point::new(0.0, 0.0),
        highest: Point::new(5.5, 30.0),
        end: Point::new(10.0, 0.0),
    }
}

#[test]
fn parabola_on_square_paper() {
    let mut canvas = RecordingCanvas::default();
    let chart = draw_chart(|x| x * x, &parabola(), &mut canvas, Size::new(500.0, 500.0), DEFAULT_FIELDS)
        .expect("draw chart");

    // round((500 - 20) / (100 + 20)) = 4
    assert_eq!(chart.scale, 4.0);
    assert!(chart.path_data.starts_with("M 10 490 R 10 490 14 486 18 474 "));
    assert!(chart.path_data.ends_with("50 90 "));
    assert_eq!(chart.points.len(), 11);
    assert_eq!(canvas.calls, vec![Call::Path(chart.path_data.clone())]);

    assert_eq!(chart.path.attr_value("stroke-width"), Some("3"));
    assert_eq!(chart.path.attr_value("stroke"), Some("#5389e0"));
    assert_eq!(chart.path.attr_value("fill"), Some("#FFF"));
}

#[test]
fn points_begin_with_start_and_end_with_end() {
    for imp in [parabola(), hump()] {
        let mut canvas = RecordingCanvas::default();
        let chart = draw_chart(|x| x * (10.0 - x), &imp, &mut canvas, Size::new(400.0, 300.0), 10.0).unwrap();
        assert_eq!(chart.points.first(), Some(&imp.start));
        assert_eq!(chart.points.last(), Some(&imp.end));
    }
}

#[test]
fn highest_already_sampled_is_not_added() {
    let imp = ImportantPoints {
        start: Point::new(0.0, 0.0),
        highest: Point::new(5.0, 25.0),
        end: Point::new(10.0, 0.0),
    };
    let mut canvas = RecordingCanvas::default();
    let chart = draw_chart(|x| x * (10.0 - x), &imp, &mut canvas, Size::new(500.0, 500.0), 10.0).unwrap();
    assert_eq!(chart.points.len(), 11);
    assert_eq!(chart.points.iter().filter(|p| **p == imp.highest).count(), 1);
}

#[test]
fn missing_highest_is_inserted_in_x_order() {
    let imp = hump();
    let mut canvas = RecordingCanvas::default();
    let chart = draw_chart(|x| x * (10.0 - x), &imp, &mut canvas, Size::new(500.0, 500.0), 10.0).unwrap();
    assert_eq!(chart.points.len(), 12);
    assert!(chart.points.windows(2).all(|w| w[0].x <= w[1].x));
    let at = chart.points.iter().position(|p| *p == imp.highest).expect("highest present");
    assert_eq!(chart.points[at - 1].x, 5.0);
    assert_eq!(chart.points[at + 1].x, 6.0);
}

#[test]
fn scale_follows_formula() {
    let cases = [
        (Size::new(500.0, 500.0), 10.0, 4.0),
        (Size::new(800.0, 300.0), 10.0, 2.0),
        (Size::new(300.0, 800.0), 0.0, 3.0),
        (Size::new(1000.0, 1000.0), 25.0, 6.0),
    ];
    for (paper, fields, want) in cases {
        let imp = parabola();
        let expected = ((paper.width.min(paper.height) - 2.0 * fields)
            / (imp.highest.y.max(imp.end.x) + 2.0 * fields)
            + 0.5)
            .floor();
        assert_eq!(expected, want, "formula check for {paper:?}");

        let mut canvas = RecordingCanvas::default();
        let chart = draw_chart(|x| x * x, &imp, &mut canvas, paper, fields).unwrap();
        assert_eq!(chart.scale, want, "scale for {paper:?} / {fields}");
    }
}

// The scale compares the peak height (a y extent) with the domain end (an x
// extent). This pins the current behaviour: a wide, flat curve is sized by
// its x extent, and a narrow, tall one by its height.
#[test]
fn scale_mixes_peak_height_with_domain_end() {
    let wide = ImportantPoints {
        start: Point::new(0.0, 0.0),
        highest: Point::new(50.0, 5.0),
        end: Point::new(100.0, 0.0),
    };
    let mut canvas = RecordingCanvas::default();
    let chart = draw_chart(|_| 1.0, &wide, &mut canvas, Size::new(500.0, 500.0), 10.0).unwrap();
    assert_eq!(chart.scale, 4.0); // 480 / (100 + 20)

    let tall = ImportantPoints {
        start: Point::new(0.0, 0.0),
        highest: Point::new(5.0, 200.0),
        end: Point::new(10.0, 0.0),
    };
    let chart = draw_chart(|_| 1.0, &tall, &mut canvas, Size::new(500.0, 500.0), 10.0).unwrap();
    assert_eq!(chart.scale, 2.0); // round(480 / 220)
}

#[test]
fn path_points_use_pixel_transform() {
    let paper = Size::new(640.0, 480.0);
    let fields = 12.0;
    let mut canvas = RecordingCanvas::default();
    let chart = draw_chart(|x| 0.5 * x * x, &hump(), &mut canvas, paper, fields).unwrap();

    let (start, pts) = split_path(&chart.path_data);
    let t = chart.transform(paper, fields);
    let s = t.to_px(hump().start);
    assert_eq!(start, (s.x, s.y));
    assert_eq!(pts.len(), chart.points.len());
    for (got, p) in pts.iter().zip(&chart.points) {
        let px = p.x * chart.scale + fields;
        let py = paper.height - (p.y * chart.scale + fields);
        assert_eq!(fmt_num(got.0), fmt_num(px));
        assert_eq!(fmt_num(got.1), fmt_num(py));
    }
}

#[test]
fn repeated_calls_are_identical() {
    let mut a = RecordingCanvas::default();
    let mut b = RecordingCanvas::default();
    let one = draw_chart(f64::sin, &hump(), &mut a, Size::new(500.0, 500.0), 10.0).unwrap();
    let two = draw_chart(f64::sin, &hump(), &mut b, Size::new(500.0, 500.0), 10.0).unwrap();
    assert_eq!(one.path_data, two.path_data);
    assert_eq!(a.calls, b.calls);
}

#[test]
fn options_default_to_square_paper_and_ten_pixel_fields() {
    let mut a = RecordingCanvas::default();
    let mut b = RecordingCanvas::default();
    let one = draw_chart_with(|x| x * x, &parabola(), &mut a, &RenderOptions::default()).unwrap();
    let two = draw_chart(|x| x * x, &parabola(), &mut b, Size::new(500.0, 500.0), 10.0).unwrap();
    assert_eq!(one.path_data, two.path_data);
}

#[test]
fn reversed_domain_is_invalid() {
    let imp = ImportantPoints {
        start: Point::new(10.0, 0.0),
        highest: Point::new(5.0, 5.0),
        end: Point::new(0.0, 0.0),
    };
    let mut canvas = RecordingCanvas::default();
    let err = draw_chart(|x| x, &imp, &mut canvas, Size::new(500.0, 500.0), 10.0).unwrap_err();
    assert!(matches!(err, GraphicsError::InvalidArgument(_)));
    assert!(canvas.calls.is_empty());
}

#[test]
fn empty_canvas_is_invalid() {
    let mut canvas = RecordingCanvas::default();
    let err = draw_chart(|x| x, &parabola(), &mut canvas, Size::new(0.0, 500.0), 10.0).unwrap_err();
    assert!(matches!(err, GraphicsError::InvalidArgument(_)));
}

#[test]
fn undefined_curve_is_invalid() {
    let mut canvas = RecordingCanvas::default();
    let err = draw_chart(|x| (x - 3.0).sqrt(), &parabola(), &mut canvas, Size::new(500.0, 500.0), 10.0)
        .unwrap_err();
    assert!(matches!(err, GraphicsError::InvalidArgument(_)));
    assert!(canvas.calls.is_empty());
}

#[test]
fn domain_far_from_origin_terminates() {
    // At |x| = 1e16 the float spacing is 2, so a 0.8 step does not move x.
    let imp = ImportantPoints {
        start: Point::new(-1e16, 0.0),
        highest: Point::new(-1e16 + 4.0, 100.0),
        end: Point::new(-1e16 + 8.0, 0.0),
    };
    let calls = Cell::new(0usize);
    let mut canvas = RecordingCanvas::default();
    let chart = draw_chart(
        |_| {
            calls.set(calls.get() + 1);
            50.0
        },
        &imp,
        &mut canvas,
        Size::new(500.0, 500.0),
        DEFAULT_FIELDS,
    )
    .expect("draw chart");

    assert!(calls.get() >= 1 && calls.get() <= 9, "dep called {} times", calls.get());
    assert_eq!(chart.scale, 4.0);
    assert_eq!(chart.points.first(), Some(&imp.start));
    assert_eq!(chart.points.last(), Some(&imp.end));
    assert_eq!(canvas.calls.len(), 1);
}

#[test]
fn canvas_failure_propagates() {
    let mut canvas = RecordingCanvas { fail_with: Some("surface lost".into()), ..Default::default() };
    let err = draw_chart(|x| x * x, &parabola(), &mut canvas, Size::new(500.0, 500.0), 10.0).unwrap_err();
    assert_eq!(err, GraphicsError::Canvas("surface lost".into()));
}
