// Copyright 2025 the WxChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing-surface boundary for `WxChart`.
//!
//! Everything the chart editor draws goes through a [`Surface`]:
//! - **Artifacts** are the rendered primitives (lines, polygons, circles, wedges, text).
//! - Each draw call returns an opaque [`ArtifactId`], collected into an [`ArtifactRegistry`]
//!   so that a whole layer can later be removed in one go.
//!
//! [`RecordingSurface`] keeps artifacts in memory. It backs tests and can be wrapped by renderers
//! that emit a file format (SVG) after the fact.

#![no_std]

extern crate alloc;

mod artifact;
mod recording;
mod registry;
mod style;
mod surface;

pub use artifact::{Artifact, ArtifactId, ArtifactKind, wedge_sweep};
pub use recording::RecordingSurface;
pub use registry::ArtifactRegistry;
pub use style::{StrokeStyle, TextAnchor, TextBaseline, TextStyle};
pub use surface::Surface;
