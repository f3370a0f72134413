// Copyright 2025 the WxChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Front decoration.
//!
//! A front is a polyline decorated with pips. Every front kind runs through the same decorator;
//! kinds differ only by their [`FrontStyle`] (line paint, pip spacing and the pip shapes used on
//! even and odd ticks).
//!
//! For each consecutive point pair the decorator places `floor(length / spacing)` pips, centered
//! at `(j + 0.5) / n` along the pair, so pips never sit on a vertex.

use core::fmt;

use kurbo::Point;
use peniko::Brush;
use peniko::color::palette::css;
use wxchart_core::{ArtifactRegistry, StrokeStyle, Surface};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::pip::{Pip, PipSizes, Side};

/// Front kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrontKind {
    /// Cold front: blue triangles.
    Cold,
    /// Warm front: red semicircles.
    Warm,
    /// Occluded front: alternating purple triangles and semicircles.
    Occluded,
    /// Stationary front: alternating blue triangles and red semicircles on opposite sides.
    Stationary,
    /// Dryline: orange semicircle outlines.
    Dryline,
}

impl FrontKind {
    /// All kinds, in toolbar order.
    pub const ALL: [Self; 5] = [
        Self::Cold,
        Self::Warm,
        Self::Occluded,
        Self::Stationary,
        Self::Dryline,
    ];

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cold => "Cold Front",
            Self::Warm => "Warm Front",
            Self::Occluded => "Occluded Front",
            Self::Stationary => "Stationary Front",
            Self::Dryline => "Dryline",
        }
    }
}

impl fmt::Display for FrontKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the front line itself is painted.
#[derive(Clone, Debug, PartialEq)]
pub enum LinePaint {
    /// One line per point pair, pips in the same paint.
    Solid(Brush),
    /// Each pair split into `n` sub-segments painted alternately; pips take their sub-segment's
    /// paint. Pairs too short for one sub-segment are not drawn at all.
    Alternating([Brush; 2]),
}

impl LinePaint {
    /// Paint for sub-segment or pip index `j`.
    pub fn brush_for(&self, j: usize) -> &Brush {
        match self {
            Self::Solid(brush) => brush,
            Self::Alternating(brushes) => &brushes[j % 2],
        }
    }
}

/// Decoration parameters for one front kind.
#[derive(Clone, Debug, PartialEq)]
pub struct FrontStyle {
    /// Line paint.
    pub line: LinePaint,
    /// Line width.
    pub stroke_width: f64,
    /// Nominal distance between pips, in chart units.
    pub spacing: f64,
    /// Pip shapes for even and odd tick indices.
    pub pips: [Pip; 2],
    /// Stroke width for unfilled pips.
    pub outline_width: f64,
}

impl FrontStyle {
    /// A solid front using the same pip on every tick.
    pub fn solid(brush: impl Into<Brush>, spacing: f64, pip: Pip) -> Self {
        Self {
            line: LinePaint::Solid(brush.into()),
            stroke_width: 2.0,
            spacing,
            pips: [pip, pip],
            outline_width: 1.5,
        }
    }

    /// Sets the even/odd pip shapes.
    pub fn with_pips(mut self, even: Pip, odd: Pip) -> Self {
        self.pips = [even, odd];
        self
    }

    /// Sets the line width.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the pip spacing.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Number of pips placed on a pair of the given length.
    #[allow(clippy::cast_possible_truncation, reason = "non-negative and finite")]
    pub fn tick_count(&self, length: f64) -> usize {
        if !(length.is_finite() && self.spacing > 0.0) {
            return 0;
        }
        (length / self.spacing).floor() as usize
    }

    /// Decorates `points`, registering each artifact in `out`.
    ///
    /// Zero-length pairs are skipped. The decoration is computed from scratch on each call.
    pub fn decorate<S: Surface + ?Sized>(
        &self,
        points: &[Point],
        sizes: &PipSizes,
        surface: &mut S,
        out: &mut ArtifactRegistry,
    ) -> DecorationReport {
        let mut report = DecorationReport::default();
        let before = out.len();

        for (i, pair) in points.windows(2).enumerate() {
            let (p0, p1) = (pair[0], pair[1]);
            let delta = p1 - p0;
            let length = delta.x.hypot(delta.y);
            if length == 0.0 {
                log::debug!("front segment {i}: zero length, skipped");
                report.degenerate += 1;
                continue;
            }
            let theta = delta.y.atan2(delta.x);
            let n = self.tick_count(length);

            match &self.line {
                LinePaint::Solid(brush) => {
                    let stroke = StrokeStyle::solid(brush.clone(), self.stroke_width);
                    out.push(surface.draw_line(&[p0, p1], &stroke));
                }
                LinePaint::Alternating(_) if n == 0 => {
                    log::debug!("front segment {i}: length {length} shorter than one tick");
                    report.short += 1;
                    continue;
                }
                LinePaint::Alternating(_) => {}
            }
            if n == 0 {
                report.short += 1;
            }

            for j in 0..n {
                let brush = self.line.brush_for(j);
                if let LinePaint::Alternating(_) = self.line {
                    let start = p0.lerp(p1, j as f64 / n as f64);
                    let end = p0.lerp(p1, (j + 1) as f64 / n as f64);
                    let stroke = StrokeStyle::solid(brush.clone(), self.stroke_width);
                    out.push(surface.draw_line(&[start, end], &stroke));
                }
                let center = p0.lerp(p1, (j as f64 + 0.5) / n as f64);
                let pip = self.pips[j % 2];
                out.push(pip.draw(
                    center,
                    theta,
                    sizes,
                    brush,
                    self.outline_width,
                    surface,
                ));
                report.pips += 1;
            }
            report.segments += 1;
        }

        report.artifacts = out.len() - before;
        report
    }
}

/// What a decoration pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecorationReport {
    /// Point pairs that were drawn.
    pub segments: usize,
    /// Zero-length pairs that were skipped.
    pub degenerate: usize,
    /// Pairs shorter than one pip spacing (line only, or nothing for alternating fronts).
    pub short: usize,
    /// Pips placed.
    pub pips: usize,
    /// Artifacts registered.
    pub artifacts: usize,
}

/// Per-kind style table.
#[derive(Clone, Debug, PartialEq)]
pub struct FrontStyles {
    /// Cold front style.
    pub cold: FrontStyle,
    /// Warm front style.
    pub warm: FrontStyle,
    /// Occluded front style.
    pub occluded: FrontStyle,
    /// Stationary front style.
    pub stationary: FrontStyle,
    /// Dryline style.
    pub dryline: FrontStyle,
}

impl FrontStyles {
    /// Style for `kind`.
    pub fn get(&self, kind: FrontKind) -> &FrontStyle {
        match kind {
            FrontKind::Cold => &self.cold,
            FrontKind::Warm => &self.warm,
            FrontKind::Occluded => &self.occluded,
            FrontKind::Stationary => &self.stationary,
            FrontKind::Dryline => &self.dryline,
        }
    }

    /// Replaces the style for `kind`.
    pub fn with_style(mut self, kind: FrontKind, style: FrontStyle) -> Self {
        let slot = match kind {
            FrontKind::Cold => &mut self.cold,
            FrontKind::Warm => &mut self.warm,
            FrontKind::Occluded => &mut self.occluded,
            FrontKind::Stationary => &mut self.stationary,
            FrontKind::Dryline => &mut self.dryline,
        };
        *slot = style;
        self
    }
}

impl Default for FrontStyles {
    fn default() -> Self {
        let triangle = Pip::Triangle { side: Side::Left };
        let semicircle = Pip::Semicircle {
            side: Side::Left,
            filled: true,
        };
        Self {
            cold: FrontStyle::solid(css::BLUE, 0.5, triangle),
            warm: FrontStyle::solid(css::RED, 0.5, semicircle),
            occluded: FrontStyle::solid(css::PURPLE, 0.5, triangle)
                .with_pips(triangle, semicircle),
            stationary: FrontStyle {
                line: LinePaint::Alternating([css::BLUE.into(), css::RED.into()]),
                ..FrontStyle::solid(css::BLUE, 0.5, triangle)
            }
            .with_pips(Pip::Triangle { side: Side::Right }, semicircle),
            dryline: FrontStyle::solid(
                css::ORANGE,
                0.2,
                Pip::Semicircle {
                    side: Side::Left,
                    filled: false,
                },
            ),
        }
    }
}
