//! Integration tests for the DiagramBuilder API
//!
//! These tests drive the public API end to end against the recording
//! surface and the file-producing surfaces.

use std::fs;

use radial::{
    DiagramBuilder, Node, RadialError,
    composition::flow_diagram,
    config::AppConfig,
    draw::{DrawingSurface, RecordingSurface, SurfaceCall, TextOptions},
    export::Format,
    geometry::{Direction, Point},
};

fn circle(x: f32, y: f32) -> SurfaceCall {
    SurfaceCall::StrokeCircle {
        center: Point::new(x, y),
        radius: 50.0,
    }
}

fn text(label: &str, x: f32, y: f32) -> SurfaceCall {
    SurfaceCall::DrawText {
        text: label.to_string(),
        options: TextOptions::new(16, Point::new(x, y)),
    }
}

fn segment(from: (f32, f32), to: (f32, f32)) -> [SurfaceCall; 2] {
    [
        SurfaceCall::MoveTo(Point::from(from)),
        SurfaceCall::LineTo(Point::from(to)),
    ]
}

fn record(root: &Node) -> RecordingSurface {
    let mut surface = RecordingSurface::new();
    DiagramBuilder::default().draw(root, &mut surface);
    surface
}

#[test]
fn test_flow_diagram_call_sequence() {
    let surface = record(&flow_diagram());

    let mut expected = vec![circle(250.0, 450.0), text("base", 225.0, 450.0)];
    expected.extend(segment((200.0, 450.0), (100.0, 450.0)));
    expected.extend([circle(50.0, 450.0), text("left", 25.0, 450.0)]);
    expected.extend(segment((300.0, 450.0), (400.0, 450.0)));
    expected.extend([circle(450.0, 450.0), text("right", 425.0, 450.0)]);
    expected.extend(segment((250.0, 500.0), (250.0, 600.0)));
    expected.extend([circle(250.0, 650.0), text("top", 225.0, 650.0)]);
    expected.extend(segment((250.0, 400.0), (250.0, 300.0)));
    expected.extend([circle(250.0, 250.0), text("bottom", 225.0, 250.0)]);
    expected.extend(segment((250.0, 200.0), (250.0, 100.0)));
    expected.extend([circle(250.0, 50.0), text("bottom", 225.0, 50.0)]);
    expected.extend(segment((300.0, 250.0), (400.0, 250.0)));
    expected.extend([circle(450.0, 250.0), text("right", 425.0, 250.0)]);

    assert_eq!(surface.calls(), expected.as_slice());
}

#[test]
fn test_flow_diagram_call_counts() {
    let surface = record(&flow_diagram());

    assert_eq!(surface.circle_count(), 7);
    assert_eq!(surface.text_count(), 7);
    assert_eq!(surface.line_count(), 6);
}

#[test]
fn test_drawing_twice_repeats_the_same_calls() {
    let root = flow_diagram();
    let builder = DiagramBuilder::default();

    let mut surface = RecordingSurface::new();
    builder.draw(&root, &mut surface);
    let first = surface.calls().to_vec();
    builder.draw(&root, &mut surface);

    let calls = surface.into_calls();
    assert_eq!(calls.len(), first.len() * 2);
    assert_eq!(&calls[..first.len()], first.as_slice());
    assert_eq!(&calls[first.len()..], first.as_slice());
}

#[test]
fn test_leaf_draws_one_circle_and_label() {
    let root = Node::root(Point::new(10.0, 20.0), "only");
    let surface = record(&root);

    assert_eq!(
        surface.calls(),
        &[circle(10.0, 20.0), text("only", -15.0, 20.0)]
    );
}

#[test]
fn test_arrowheads_follow_each_connector() {
    let config: AppConfig = toml::from_str(
        r#"
        [style]
        arrowheads = true
        "#,
    )
    .unwrap();
    let builder = DiagramBuilder::new(config);

    let mut root = Node::root(Point::default(), "root");
    root.attach("right", Direction::Right);

    let mut surface = RecordingSurface::new();
    builder.draw(&root, &mut surface);

    let calls = surface.calls();
    assert!(matches!(calls[2], SurfaceCall::MoveTo(_)));
    assert!(matches!(calls[3], SurfaceCall::LineTo(_)));
    match &calls[4] {
        SurfaceCall::FillPolygon(points) => {
            assert_eq!(points.len(), 3);
            assert_eq!(points[0], Point::new(150.0, 0.0));
        }
        other => panic!("expected an arrowhead, got {other:?}"),
    }
}

#[test]
fn test_parse_matches_built_in_diagram() {
    let source = fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../demos/flow_diagram.toml"
    ))
    .unwrap();

    let root = DiagramBuilder::default().parse(&source).unwrap();
    assert_eq!(root, flow_diagram());
}

#[test]
fn test_parse_invalid_direction_returns_error() {
    let source = r#"
        label = "base"

        [[children]]
        direction = "up"
        label = "up"
    "#;

    let err = DiagramBuilder::default().parse(source).unwrap_err();
    match err {
        RadialError::Parse { src, .. } => assert_eq!(src, source),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_render_svg() {
    let builder = DiagramBuilder::default();
    let svg = builder.render_svg(&flow_diagram()).unwrap();

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert_eq!(svg.matches("<circle").count(), 7);
    assert_eq!(svg.matches("<text").count(), 7);
    assert_eq!(svg.matches("<path").count(), 6);
}

#[test]
fn test_render_trace_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flow_diagram.trace");

    DiagramBuilder::default()
        .render_to_file(&flow_diagram(), &path, Format::Trace)
        .unwrap();

    let listing = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = listing.lines().collect();
    assert_eq!(lines.len(), 26);
    assert_eq!(lines[0], "stroke_circle 250 450 50");
    assert_eq!(lines[2], "move_to 200 450");
    assert_eq!(lines[3], "line_to 100 450");
}

#[test]
fn test_render_pdf_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flow_diagram.pdf");

    let result = DiagramBuilder::default().render_to_file(&flow_diagram(), &path, Format::Pdf);

    match result {
        Ok(()) => {
            let bytes = fs::read(&path).unwrap();
            assert!(bytes.starts_with(b"%PDF"));
            assert!(
                bytes.windows(5).any(|window| window == b"/Font"),
                "labels were dropped from the PDF"
            );
        }
        // Only a machine without any installed font may refuse to draw labels.
        Err(RadialError::Export(err)) => {
            assert!(err.to_string().contains("font"), "unexpected error: {err}");
            assert!(!path.exists());
        }
        Err(other) => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_render_with_bad_stroke_color_fails() {
    let config: AppConfig = toml::from_str(
        r#"
        [style]
        stroke_color = "definitely-not-a-color"
        "#,
    )
    .unwrap();
    let dir = tempfile::tempdir().unwrap();

    let result = DiagramBuilder::new(config).render_to_file(
        &flow_diagram(),
        &dir.path().join("out.svg"),
        Format::Svg,
    );
    assert!(matches!(result, Err(RadialError::Config(_))));
}

#[test]
fn test_surface_is_usable_as_trait_object() {
    let mut surface: Box<dyn DrawingSurface> = Box::new(RecordingSurface::new());
    DiagramBuilder::default().draw(&flow_diagram(), surface.as_mut());
}
