// Copyright 2025 the WxChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump of a recorded chart for `wxchart_demo`.

use std::fmt::Write as _;

use kurbo::{Affine, Circle, Point, Rect, Shape};
use peniko::Brush;
use wxchart_core::{
    Artifact, ArtifactId, RecordingSurface, StrokeStyle, Surface, TextAnchor, TextBaseline,
    TextStyle, wedge_sweep,
};

const GRID_STROKE: &str = "#d0d0d0";

/// A [`Surface`] that records artifacts and serializes them as SVG.
///
/// Chart coordinates (y up) inside `bounds` are mapped to pixels (y down) at `scale` pixels per
/// unit, with a `margin` pixel border.
#[derive(Debug)]
pub(crate) struct SvgSurface {
    scene: RecordingSurface,
    bounds: Rect,
    scale: f64,
    margin: f64,
}

impl SvgSurface {
    pub(crate) fn new(bounds: Rect, scale: f64) -> Self {
        Self {
            scene: RecordingSurface::new(),
            bounds,
            scale,
            margin: 30.0,
        }
    }

    pub(crate) fn scene(&self) -> &RecordingSurface {
        &self.scene
    }

    fn transform(&self) -> Affine {
        Affine::new([
            self.scale,
            0.0,
            0.0,
            -self.scale,
            self.margin - self.bounds.x0 * self.scale,
            self.margin + self.bounds.y1 * self.scale,
        ])
    }

    fn size(&self) -> (f64, f64) {
        (
            self.bounds.width() * self.scale + 2.0 * self.margin,
            self.bounds.height() * self.scale + 2.0 * self.margin,
        )
    }

    /// Union of the bounds of every live artifact that has bounds.
    pub(crate) fn content_bounds(&self) -> Option<Rect> {
        self.scene
            .artifacts()
            .into_iter()
            .filter_map(|(_, a)| a.bounds())
            .reduce(|a, b| a.union(b))
    }

    /// Serializes the live artifacts in paint order, under a unit grid.
    ///
    /// `status` is written above the chart and the `toolbar` captions below it.
    pub(crate) fn to_svg_string(&self, status: &str, toolbar: &[&str]) -> String {
        let t = self.transform();
        let (width, height) = self.size();
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = writeln!(
            out,
            r#"viewBox="0 0 {width} {height}" width="{width}" height="{height}">"#
        );
        let _ = writeln!(
            out,
            r##"<rect x="0" y="0" width="{width}" height="{height}" fill="#ffffff"/>"##
        );
        self.write_grid(&mut out);

        for (_id, artifact) in self.scene.artifacts() {
            write_artifact(&mut out, t, self.scale, artifact);
        }

        let _ = writeln!(
            out,
            r#"<text x="{}" y="{}" font-size="14">{}</text>"#,
            self.margin,
            0.6 * self.margin,
            escape_xml(status)
        );
        let _ = writeln!(
            out,
            r##"<text x="{}" y="{}" font-size="12" fill="#606060">{}</text>"##,
            self.margin,
            height - 0.4 * self.margin,
            escape_xml(&toolbar.join(" | "))
        );
        out.push_str("</svg>\n");
        out
    }

    fn write_grid(&self, out: &mut String) {
        let t = self.transform();
        let b = self.bounds;
        let mut x = b.x0.ceil();
        while x <= b.x1 {
            let p0 = t * Point::new(x, b.y0);
            let p1 = t * Point::new(x, b.y1);
            write_grid_line(out, p0, p1);
            x += 1.0;
        }
        let mut y = b.y0.ceil();
        while y <= b.y1 {
            let p0 = t * Point::new(b.x0, y);
            let p1 = t * Point::new(b.x1, y);
            write_grid_line(out, p0, p1);
            y += 1.0;
        }
    }
}

impl Surface for SvgSurface {
    fn draw_line(&mut self, points: &[Point], stroke: &StrokeStyle) -> ArtifactId {
        self.scene.draw_line(points, stroke)
    }

    fn draw_filled_polygon(&mut self, vertices: &[Point], fill: &Brush) -> ArtifactId {
        self.scene.draw_filled_polygon(vertices, fill)
    }

    fn draw_open_path(&mut self, vertices: &[Point], stroke: &StrokeStyle) -> ArtifactId {
        self.scene.draw_open_path(vertices, stroke)
    }

    fn draw_circle(
        &mut self,
        circle: Circle,
        stroke: &StrokeStyle,
        fill: Option<&Brush>,
    ) -> ArtifactId {
        self.scene.draw_circle(circle, stroke, fill)
    }

    fn draw_wedge(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        fill: &Brush,
    ) -> ArtifactId {
        self.scene
            .draw_wedge(center, radius, start_angle, end_angle, fill)
    }

    fn draw_text(&mut self, pos: Point, text: &str, style: &TextStyle) -> ArtifactId {
        self.scene.draw_text(pos, text, style)
    }

    fn remove_artifact(&mut self, id: ArtifactId) {
        self.scene.remove_artifact(id);
    }
}

fn write_grid_line(out: &mut String, p0: Point, p1: Point) {
    let _ = writeln!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{GRID_STROKE}" stroke-width="1"/>"#,
        p0.x, p0.y, p1.x, p1.y
    );
}

fn write_artifact(out: &mut String, t: Affine, scale: f64, artifact: &Artifact) {
    match artifact {
        Artifact::Line { points, stroke } | Artifact::OpenPath { points, stroke } => {
            out.push_str(r#"<polyline points=""#);
            write_points(out, t, points);
            out.push('"');
            out.push_str(r#" fill="none""#);
            write_stroke_attrs(out, stroke);
            out.push_str("/>\n");
        }
        Artifact::Polygon { vertices, fill } => {
            out.push_str(r#"<polygon points=""#);
            write_points(out, t, vertices);
            out.push('"');
            write_paint_attr(out, "fill", fill);
            out.push_str("/>\n");
        }
        Artifact::Circle {
            circle,
            stroke,
            fill,
        } => {
            let c = t * circle.center;
            let _ = write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}""#,
                c.x,
                c.y,
                circle.radius * scale
            );
            match fill {
                Some(fill) => write_paint_attr(out, "fill", fill),
                None => out.push_str(r#" fill="none""#),
            }
            write_stroke_attrs(out, stroke);
            out.push_str("/>\n");
        }
        Artifact::Wedge {
            center,
            radius,
            start_angle,
            end_angle,
            fill,
        } => {
            let sweep = wedge_sweep(*start_angle, *end_angle);
            let path = t * Circle::new(*center, *radius)
                .segment(0.0, *start_angle, sweep)
                .to_path(1e-3);
            let _ = write!(out, r#"<path d="{}""#, path.to_svg());
            write_paint_attr(out, "fill", fill);
            out.push_str("/>\n");
        }
        Artifact::Text { pos, text, style } => {
            let p = t * *pos;
            let baseline = match style.baseline {
                TextBaseline::Alphabetic => "alphabetic",
                TextBaseline::Middle => "middle",
            };
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{baseline}""#,
                p.x, p.y, style.font_size
            );
            out.push_str(match style.anchor {
                TextAnchor::Start => r#" text-anchor="start""#,
                TextAnchor::Middle => r#" text-anchor="middle""#,
                TextAnchor::End => r#" text-anchor="end""#,
            });
            if style.bold {
                out.push_str(r#" font-weight="bold""#);
            }
            write_paint_attr(out, "fill", &style.fill);
            out.push('>');
            out.push_str(&escape_xml(text));
            out.push_str("</text>\n");
        }
    }
}

fn write_points(out: &mut String, t: Affine, points: &[Point]) {
    for (i, p) in points.iter().enumerate() {
        let p = t * *p;
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{},{}", p.x, p.y);
    }
}

fn write_stroke_attrs(out: &mut String, stroke: &StrokeStyle) {
    write_paint_attr(out, "stroke", &stroke.brush);
    let _ = write!(out, r#" stroke-width="{}""#, stroke.stroke_width);
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn chart_origin_maps_to_bottom_left() {
        let surface = SvgSurface::new(Rect::new(0.0, 0.0, 6.0, 6.0), 100.0);
        let p = surface.transform() * Point::new(0.0, 0.0);
        assert!((p.x - 30.0).abs() < 1e-9);
        assert!((p.y - 630.0).abs() < 1e-9);
        let q = surface.transform() * Point::new(6.0, 6.0);
        assert!((q.x - 630.0).abs() < 1e-9);
        assert!((q.y - 30.0).abs() < 1e-9);
    }

    #[test]
    fn removed_artifacts_are_not_serialized() {
        let mut surface = SvgSurface::new(Rect::new(0.0, 0.0, 6.0, 6.0), 100.0);
        let keep = surface.draw_text(
            Point::new(1.0, 1.0),
            "H",
            &TextStyle::new(css::BLUE, 20.0).with_bold(true),
        );
        let gone = surface.draw_filled_polygon(
            &[
                Point::new(1.0, 1.0),
                Point::new(2.0, 1.0),
                Point::new(1.5, 2.0),
            ],
            &css::RED.into(),
        );
        surface.remove_artifact(gone);
        assert!(surface.scene().get(keep).is_some());

        let svg = surface.to_svg_string("Mode: Default", &["Default", "Cold Front"]);
        assert!(svg.contains(r#"font-weight="bold""#));
        assert!(svg.contains(">H</text>"));
        assert!(!svg.contains("<polygon"));
        assert!(svg.contains("Mode: Default"));
        assert!(svg.contains(">Default | Cold Front</text>"));
    }

    #[test]
    fn wedge_and_circle_serialize_in_pixels() {
        let mut surface = SvgSurface::new(Rect::new(0.0, 0.0, 6.0, 6.0), 100.0);
        surface.draw_circle(
            Circle::new(Point::new(1.0, 1.0), 0.25),
            &StrokeStyle::solid(css::BLACK, 1.2),
            None,
        );
        surface.draw_wedge(
            Point::new(1.0, 1.0),
            0.07,
            0.0,
            core::f64::consts::FRAC_PI_2,
            &css::BLACK.into(),
        );
        let svg = surface.to_svg_string("", &[]);
        assert!(svg.contains(r#"<circle cx="130" cy="530" r="25""#));
        assert!(svg.contains(r#"fill="none""#));
        assert!(svg.contains("<path d=\"M"));
    }

    #[test]
    fn content_bounds_cover_shapes_but_not_text() {
        let mut surface = SvgSurface::new(Rect::new(0.0, 0.0, 6.0, 6.0), 100.0);
        assert_eq!(surface.content_bounds(), None);
        surface.draw_text(Point::new(5.5, 5.5), "L", &TextStyle::new(css::RED, 20.0));
        assert_eq!(surface.content_bounds(), None);
        surface.draw_line(
            &[Point::new(1.0, 2.0), Point::new(3.0, 1.0)],
            &StrokeStyle::default(),
        );
        surface.draw_circle(
            Circle::new(Point::new(4.0, 4.0), 0.5),
            &StrokeStyle::default(),
            None,
        );
        assert_eq!(
            surface.content_bounds(),
            Some(Rect::new(1.0, 1.0, 4.5, 4.5))
        );
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(escape_xml("a<b & 'c'"), "a&lt;b &amp; &apos;c&apos;");
    }
}
