// Copyright 2025 the WxChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendered primitives and their handles.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::f64::consts::TAU;

use kurbo::{Circle, Point, Rect, Shape};
use peniko::Brush;

use crate::style::{StrokeStyle, TextStyle};

/// Opaque handle for an artifact created by a [`Surface`](crate::Surface).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArtifactId(pub u64);

/// The primitive kind of an artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// A stroked polyline (front lines, barb shafts and ticks, bars).
    Line,
    /// A stroked open path (unfilled pip outlines).
    OpenPath,
    /// A filled polygon (pips).
    Polygon,
    /// A circle, stroked and optionally filled.
    Circle,
    /// A filled circular wedge.
    Wedge,
    /// An unshaped text label.
    Text,
}

/// A rendered primitive, as recorded by a surface.
#[derive(Clone, Debug, PartialEq)]
pub enum Artifact {
    /// A stroked polyline.
    Line {
        /// Polyline vertices.
        points: Vec<Point>,
        /// Stroke paint and width.
        stroke: StrokeStyle,
    },
    /// A stroked open path.
    OpenPath {
        /// Path vertices.
        points: Vec<Point>,
        /// Stroke paint and width.
        stroke: StrokeStyle,
    },
    /// A filled polygon; the last vertex connects back to the first.
    Polygon {
        /// Polygon vertices.
        vertices: Vec<Point>,
        /// Fill paint.
        fill: Brush,
    },
    /// A circle.
    Circle {
        /// Center and radius.
        circle: Circle,
        /// Outline.
        stroke: StrokeStyle,
        /// Interior paint, `None` for an open circle.
        fill: Option<Brush>,
    },
    /// A filled wedge sweeping counter-clockwise from `start_angle` to `end_angle` (radians).
    Wedge {
        /// Wedge center.
        center: Point,
        /// Wedge radius.
        radius: f64,
        /// Start angle in radians.
        start_angle: f64,
        /// End angle in radians.
        end_angle: f64,
        /// Fill paint.
        fill: Brush,
    },
    /// A text label.
    Text {
        /// Anchor position.
        pos: Point,
        /// Text content (unshaped).
        text: String,
        /// Text styling.
        style: TextStyle,
    },
}

impl Artifact {
    /// Returns the primitive kind.
    pub fn kind(&self) -> ArtifactKind {
        match self {
            Self::Line { .. } => ArtifactKind::Line,
            Self::OpenPath { .. } => ArtifactKind::OpenPath,
            Self::Polygon { .. } => ArtifactKind::Polygon,
            Self::Circle { .. } => ArtifactKind::Circle,
            Self::Wedge { .. } => ArtifactKind::Wedge,
            Self::Text { .. } => ArtifactKind::Text,
        }
    }

    /// Returns the geometric bounds of the artifact.
    ///
    /// Text is unshaped here, so text artifacts have no bounds.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Line { points, .. } | Self::OpenPath { points, .. } => points_bounds(points),
            Self::Polygon { vertices, .. } => points_bounds(vertices),
            Self::Circle { circle, .. } => Some(circle.bounding_box()),
            Self::Wedge {
                center,
                radius,
                start_angle,
                end_angle,
                ..
            } => {
                let sweep = wedge_sweep(*start_angle, *end_angle);
                Some(
                    Circle::new(*center, *radius)
                        .segment(0.0, *start_angle, sweep)
                        .bounding_box(),
                )
            }
            Self::Text { .. } => None,
        }
    }
}

/// Returns the counter-clockwise sweep from `start` to `end`, in `(0, 2π]`.
///
/// Equal angles describe a full turn.
pub fn wedge_sweep(start: f64, end: f64) -> f64 {
    let sweep = (end - start) % TAU;
    if sweep <= 0.0 { sweep + TAU } else { sweep }
}

fn points_bounds(points: &[Point]) -> Option<Rect> {
    let (first, rest) = points.split_first()?;
    Some(
        rest.iter()
            .fold(Rect::from_points(*first, *first), |r, p| r.union_pt(*p)),
    )
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, PI};

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn wedge_sweep_wraps_through_zero() {
        let sweep = wedge_sweep(3.0 * FRAC_PI_2, FRAC_PI_2);
        assert!((sweep - PI).abs() < 1e-12, "sweep was {sweep}");
        assert!((wedge_sweep(0.0, FRAC_PI_2) - FRAC_PI_2).abs() < 1e-12);
        assert!((wedge_sweep(1.0, 1.0) - TAU).abs() < 1e-12);
    }

    #[test]
    fn polygon_bounds_cover_all_vertices() {
        let poly = Artifact::Polygon {
            vertices: alloc::vec![
                Point::new(1.0, 2.0),
                Point::new(-1.0, 0.5),
                Point::new(0.0, 3.0),
            ],
            fill: css::BLUE.into(),
        };
        assert_eq!(poly.kind(), ArtifactKind::Polygon);
        assert_eq!(poly.bounds(), Some(Rect::new(-1.0, 0.5, 1.0, 3.0)));
    }

    #[test]
    fn right_half_wedge_bounds_stay_right_of_center() {
        let wedge = Artifact::Wedge {
            center: Point::new(2.0, 2.0),
            radius: 1.0,
            start_angle: 3.0 * FRAC_PI_2,
            end_angle: FRAC_PI_2,
            fill: css::BLACK.into(),
        };
        let b = wedge.bounds().expect("wedges have bounds");
        assert!(b.x0 >= 2.0 - 1e-3, "bounds {b:?}");
        assert!((b.x1 - 3.0).abs() < 1e-3, "bounds {b:?}");
    }

    #[test]
    fn empty_line_and_text_have_no_bounds() {
        let line = Artifact::Line {
            points: Vec::new(),
            stroke: StrokeStyle::default(),
        };
        assert_eq!(line.bounds(), None);
        let text = Artifact::Text {
            pos: Point::ORIGIN,
            text: "H".into(),
            style: TextStyle::default(),
        };
        assert_eq!(text.kind(), ArtifactKind::Text);
        assert_eq!(text.bounds(), None);
    }
}
