// Copyright 2025 the WxChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Front pips: the triangles and semicircles placed along front lines.

use core::f64::consts::{FRAC_PI_2, PI};

use kurbo::{Point, Vec2};
use peniko::Brush;
use smallvec::SmallVec;
use wxchart_core::{ArtifactId, StrokeStyle, Surface};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Vertex list for a single pip.
pub type PipVertices = SmallVec<[Point; 24]>;

/// Which side of the direction of travel a pip points to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left of travel (`θ + π/2`).
    Left,
    /// Right of travel (`θ − π/2`).
    Right,
}

impl Side {
    /// `+1` for [`Side::Left`], `-1` for [`Side::Right`].
    pub fn sign(self) -> f64 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }

    /// The opposite side.
    pub fn flip(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Pip dimensions in chart units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PipSizes {
    /// Triangle base length, laid along the segment.
    pub triangle_base: f64,
    /// Triangle height, perpendicular to the segment.
    pub triangle_height: f64,
    /// Semicircle radius.
    pub semicircle_radius: f64,
    /// Number of points sampled along a semicircle arc.
    pub semicircle_samples: usize,
}

impl Default for PipSizes {
    fn default() -> Self {
        Self {
            triangle_base: 0.2,
            triangle_height: 0.1,
            semicircle_radius: 0.1,
            semicircle_samples: 20,
        }
    }
}

/// A pip shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pip {
    /// A filled isosceles triangle.
    Triangle {
        /// Side the apex points to.
        side: Side,
    },
    /// A semicircle, filled as a wedge or drawn as an open arc.
    Semicircle {
        /// Side the bulge points to.
        side: Side,
        /// Whether the semicircle is closed back to its center and filled.
        filled: bool,
    },
}

impl Pip {
    /// Returns `true` if the pip is drawn as a filled polygon.
    pub fn is_filled(self) -> bool {
        match self {
            Self::Triangle { .. } => true,
            Self::Semicircle { filled, .. } => filled,
        }
    }

    /// Vertices of this pip centered at `center` on a segment heading `theta`.
    pub fn vertices(self, center: Point, theta: f64, sizes: &PipSizes) -> PipVertices {
        match self {
            Self::Triangle { side } => triangle_pip(
                center,
                theta,
                sizes.triangle_base,
                sizes.triangle_height,
                side,
            )
            .into_iter()
            .collect(),
            Self::Semicircle { side, filled } => semicircle_pip(
                center,
                theta + side.sign() * FRAC_PI_2,
                sizes.semicircle_radius,
                sizes.semicircle_samples,
                filled,
            ),
        }
    }

    /// Draws this pip; unfilled pips are stroked with `outline_width`.
    pub fn draw<S: Surface + ?Sized>(
        self,
        center: Point,
        theta: f64,
        sizes: &PipSizes,
        brush: &Brush,
        outline_width: f64,
        surface: &mut S,
    ) -> ArtifactId {
        let vertices = self.vertices(center, theta, sizes);
        if self.is_filled() {
            surface.draw_filled_polygon(&vertices, brush)
        } else {
            surface.draw_open_path(&vertices, &StrokeStyle::solid(brush.clone(), outline_width))
        }
    }
}

/// An isosceles triangle whose base is centered on `center` and parallel to `theta`.
///
/// Vertices are `[base start, base end, apex]`; the apex sits `height` away along the
/// perpendicular on `side`.
pub fn triangle_pip(center: Point, theta: f64, base: f64, height: f64, side: Side) -> [Point; 3] {
    let along = Vec2::new(theta.cos(), theta.sin());
    let perp_angle = theta + FRAC_PI_2;
    let perp = Vec2::new(perp_angle.cos(), perp_angle.sin());
    let half_base = along * (base / 2.0);
    [
        center - half_base,
        center + half_base,
        center + perp * (side.sign() * height),
    ]
}

/// A half circle of `samples` points spanning `[−π/2, +π/2]` around `theta_perp`.
///
/// Filled semicircles start with `center` so the polygon closes into a wedge.
pub fn semicircle_pip(
    center: Point,
    theta_perp: f64,
    radius: f64,
    samples: usize,
    filled: bool,
) -> PipVertices {
    let mut out = PipVertices::new();
    if filled {
        out.push(center);
    }
    let steps = samples.saturating_sub(1).max(1) as f64;
    for i in 0..samples {
        let angle = -FRAC_PI_2 + PI * (i as f64 / steps) + theta_perp;
        out.push(center + Vec2::new(angle.cos(), angle.sin()) * radius);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Point, b: Point) {
        let eps = 1e-12;
        assert!((a.x - b.x).abs() <= eps, "{a:?} != {b:?}");
        assert!((a.y - b.y).abs() <= eps, "{a:?} != {b:?}");
    }

    #[test]
    fn triangle_on_eastward_segment_points_north() {
        let [b0, b1, apex] = triangle_pip(Point::new(1.0, 1.0), 0.0, 0.2, 0.1, Side::Left);
        assert_close(b0, Point::new(0.9, 1.0));
        assert_close(b1, Point::new(1.1, 1.0));
        assert_close(apex, Point::new(1.0, 1.1));
    }

    #[test]
    fn right_side_triangle_points_the_other_way() {
        let [_, _, apex] = triangle_pip(Point::new(1.0, 1.0), 0.0, 0.2, 0.1, Side::Right);
        assert_close(apex, Point::new(1.0, 0.9));
    }

    #[test]
    fn filled_semicircle_starts_at_center_and_spans_half_a_turn() {
        let center = Point::new(2.0, 3.0);
        let v = semicircle_pip(center, FRAC_PI_2, 0.1, 20, true);
        assert_eq!(v.len(), 21);
        assert_close(v[0], center);
        // -π/2 + π/2 = 0 (east), through north, to π (west).
        assert_close(v[1], Point::new(2.1, 3.0));
        assert_close(v[20], Point::new(1.9, 3.0));
        assert!(v[1..].iter().all(|p| p.y >= 3.0 - 1e-12));
    }

    #[test]
    fn open_semicircle_has_only_arc_samples() {
        let v = semicircle_pip(Point::ORIGIN, 0.0, 0.1, 20, false);
        assert_eq!(v.len(), 20);
        for p in &v {
            assert!((p.to_vec2().hypot() - 0.1).abs() < 1e-12);
        }
    }

    #[test]
    fn pip_vertices_follow_side() {
        let sizes = PipSizes::default();
        let left = Pip::Semicircle {
            side: Side::Left,
            filled: true,
        }
        .vertices(Point::ORIGIN, 0.0, &sizes);
        let right = Pip::Semicircle {
            side: Side::Right,
            filled: true,
        }
        .vertices(Point::ORIGIN, 0.0, &sizes);
        assert!(left.iter().all(|p| p.y >= -1e-12));
        assert!(right.iter().all(|p| p.y <= 1e-12));
        assert_eq!(Side::Left.flip(), Side::Right);
    }
}
