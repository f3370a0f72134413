// Copyright 2025 the WxChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing-surface capability set.

use kurbo::{Circle, Point};
use peniko::Brush;

use crate::artifact::ArtifactId;
use crate::style::{StrokeStyle, TextStyle};

/// A 2-D drawing surface in chart coordinates (y up).
///
/// Each draw call renders one primitive and returns a handle for it. Handles are only ever
/// removed in bulk by the caller (see [`ArtifactRegistry::clear`](crate::ArtifactRegistry::clear)).
pub trait Surface {
    /// Draws a stroked polyline through `points`.
    fn draw_line(&mut self, points: &[Point], stroke: &StrokeStyle) -> ArtifactId;

    /// Draws a filled polygon; the last vertex connects back to the first.
    fn draw_filled_polygon(&mut self, vertices: &[Point], fill: &Brush) -> ArtifactId;

    /// Draws a stroked, unclosed path through `vertices`.
    fn draw_open_path(&mut self, vertices: &[Point], stroke: &StrokeStyle) -> ArtifactId;

    /// Draws a circle outline, filled with `fill` when given.
    fn draw_circle(
        &mut self,
        circle: Circle,
        stroke: &StrokeStyle,
        fill: Option<&Brush>,
    ) -> ArtifactId;

    /// Draws a filled wedge sweeping counter-clockwise from `start_angle` to `end_angle`.
    ///
    /// Angles are in radians, measured from the positive x axis.
    fn draw_wedge(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        fill: &Brush,
    ) -> ArtifactId;

    /// Draws a text label anchored at `pos`.
    fn draw_text(&mut self, pos: Point, text: &str, style: &TextStyle) -> ArtifactId;

    /// Removes a previously drawn artifact.
    fn remove_artifact(&mut self, id: ArtifactId);
}
