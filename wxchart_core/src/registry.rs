// Copyright 2025 the WxChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered collection of artifact handles.

extern crate alloc;

use alloc::vec::Vec;

use crate::artifact::ArtifactId;
use crate::surface::Surface;

/// Ordered collection of every artifact handle drawn into one layer.
///
/// Artifacts are appended as they are created and only ever removed all at once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArtifactRegistry {
    handles: Vec<ArtifactId>,
}

impl ArtifactRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handle.
    pub fn push(&mut self, id: ArtifactId) {
        self.handles.push(id);
    }

    /// Number of registered artifacts.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Returns `true` if `id` is registered.
    pub fn contains(&self, id: ArtifactId) -> bool {
        self.handles.contains(&id)
    }

    /// Registered handles, in creation order.
    pub fn as_slice(&self) -> &[ArtifactId] {
        &self.handles
    }

    /// Iterates registered handles, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = ArtifactId> + '_ {
        self.handles.iter().copied()
    }

    /// Removes every registered artifact from `surface` and empties the registry.
    ///
    /// Returns the number of artifacts removed.
    pub fn clear<S: Surface + ?Sized>(&mut self, surface: &mut S) -> usize {
        let removed = self.handles.len();
        for id in self.handles.drain(..) {
            surface.remove_artifact(id);
        }
        removed
    }
}

impl Extend<ArtifactId> for ArtifactRegistry {
    fn extend<T: IntoIterator<Item = ArtifactId>>(&mut self, iter: T) {
        self.handles.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;
    use crate::{RecordingSurface, StrokeStyle};

    #[test]
    fn clear_removes_every_registered_artifact_and_nothing_else() {
        let mut surface = RecordingSurface::new();
        let mut registry = ArtifactRegistry::new();
        let stroke = StrokeStyle::default();

        let background = surface.draw_line(&[Point::ORIGIN, Point::new(1.0, 0.0)], &stroke);
        for i in 0..3 {
            let y = f64::from(i);
            registry.push(surface.draw_line(&[Point::new(0.0, y), Point::new(1.0, y)], &stroke));
        }
        assert_eq!(registry.len(), 3);
        assert_eq!(surface.len(), 4);

        assert_eq!(registry.clear(&mut surface), 3);
        assert!(registry.is_empty());
        assert_eq!(surface.len(), 1);
        assert!(surface.get(background).is_some());
    }

    #[test]
    fn preserves_creation_order() {
        let mut registry = ArtifactRegistry::new();
        registry.extend([ArtifactId(3), ArtifactId(1), ArtifactId(2)]);
        assert_eq!(
            registry.as_slice(),
            &[ArtifactId(3), ArtifactId(1), ArtifactId(2)]
        );
        assert!(registry.contains(ArtifactId(1)));
        assert!(!registry.contains(ArtifactId(4)));
    }
}
