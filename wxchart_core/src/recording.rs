// Copyright 2025 the WxChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory surface that records artifacts instead of painting them.

extern crate alloc;

use alloc::string::ToString;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Circle, Point};
use peniko::Brush;

use crate::artifact::{Artifact, ArtifactId, ArtifactKind};
use crate::style::{StrokeStyle, TextStyle};
use crate::surface::Surface;

/// A [`Surface`] that stores every drawn primitive as an [`Artifact`].
///
/// Ids are allocated sequentially, so sorting by id gives paint order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    artifacts: HashMap<ArtifactId, Artifact>,
    next_id: u64,
}

impl RecordingSurface {
    /// Creates an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live artifacts.
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Returns `true` if no artifacts are live.
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Looks up a live artifact.
    pub fn get(&self, id: ArtifactId) -> Option<&Artifact> {
        self.artifacts.get(&id)
    }

    /// Live artifacts in paint order.
    pub fn artifacts(&self) -> Vec<(ArtifactId, &Artifact)> {
        let mut out: Vec<_> = self.artifacts.iter().map(|(id, a)| (*id, a)).collect();
        out.sort_by_key(|(id, _)| *id);
        out
    }

    /// Number of live artifacts of the given kind.
    pub fn count(&self, kind: ArtifactKind) -> usize {
        self.artifacts.values().filter(|a| a.kind() == kind).count()
    }

    fn insert(&mut self, artifact: Artifact) -> ArtifactId {
        let id = ArtifactId(self.next_id);
        self.next_id += 1;
        self.artifacts.insert(id, artifact);
        id
    }
}

impl Surface for RecordingSurface {
    fn draw_line(&mut self, points: &[Point], stroke: &StrokeStyle) -> ArtifactId {
        self.insert(Artifact::Line {
            points: points.to_vec(),
            stroke: stroke.clone(),
        })
    }

    fn draw_filled_polygon(&mut self, vertices: &[Point], fill: &Brush) -> ArtifactId {
        self.insert(Artifact::Polygon {
            vertices: vertices.to_vec(),
            fill: fill.clone(),
        })
    }

    fn draw_open_path(&mut self, vertices: &[Point], stroke: &StrokeStyle) -> ArtifactId {
        self.insert(Artifact::OpenPath {
            points: vertices.to_vec(),
            stroke: stroke.clone(),
        })
    }

    fn draw_circle(
        &mut self,
        circle: Circle,
        stroke: &StrokeStyle,
        fill: Option<&Brush>,
    ) -> ArtifactId {
        self.insert(Artifact::Circle {
            circle,
            stroke: stroke.clone(),
            fill: fill.cloned(),
        })
    }

    fn draw_wedge(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        fill: &Brush,
    ) -> ArtifactId {
        self.insert(Artifact::Wedge {
            center,
            radius,
            start_angle,
            end_angle,
            fill: fill.clone(),
        })
    }

    fn draw_text(&mut self, pos: Point, text: &str, style: &TextStyle) -> ArtifactId {
        self.insert(Artifact::Text {
            pos,
            text: text.to_string(),
            style: style.clone(),
        })
    }

    fn remove_artifact(&mut self, id: ArtifactId) {
        if self.artifacts.remove(&id).is_none() {
            log::warn!("remove_artifact: unknown artifact {id:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn ids_follow_paint_order() {
        let mut s = RecordingSurface::new();
        let a = s.draw_text(Point::ORIGIN, "L", &TextStyle::new(css::RED, 20.0));
        let b = s.draw_circle(
            Circle::new((1.0, 1.0), 0.07),
            &StrokeStyle::default(),
            None,
        );
        let c = s.draw_filled_polygon(&[Point::ORIGIN, Point::new(1.0, 0.0)], &css::BLUE.into());
        assert!(a < b && b < c);

        let kinds: Vec<_> = s.artifacts().iter().map(|(_, a)| a.kind()).collect();
        assert_eq!(
            kinds,
            [ArtifactKind::Text, ArtifactKind::Circle, ArtifactKind::Polygon]
        );
        assert_eq!(s.count(ArtifactKind::Circle), 1);
    }

    #[test]
    fn removing_twice_is_harmless() {
        let mut s = RecordingSurface::new();
        let id = s.draw_wedge(Point::ORIGIN, 1.0, 0.0, 1.0, &css::BLACK.into());
        s.remove_artifact(id);
        s.remove_artifact(id);
        assert!(s.is_empty());
        assert!(s.get(id).is_none());
    }
}
