// Copyright 2025 the WxChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cloud-cover (okta) pictograms, following the WMO station-model convention.

use core::f64::consts::{FRAC_PI_2, PI};

use kurbo::{Circle, Line, Point};
use peniko::Brush;
use peniko::color::palette::css;
use smallvec::SmallVec;
use wxchart_core::{ArtifactRegistry, StrokeStyle, Surface};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Converts a cloud-cover fraction in `[0, 1]` to oktas (eighths of sky covered).
///
/// Values outside the range are clamped. Halves round to even, so `0.0625` is 0 oktas and
/// `0.1875` is 2.
#[allow(clippy::cast_possible_truncation, reason = "clamped to 0..=8")]
pub fn oktas(cover: f64) -> u8 {
    (cover.clamp(0.0, 1.0) * 8.0).round_ties_even() as u8
}

/// Pictogram styling.
#[derive(Clone, Debug, PartialEq)]
pub struct CloudStyle {
    /// Circle radius in chart units.
    pub radius: f64,
    /// Outline of the base circle.
    pub outline: StrokeStyle,
    /// Paint for wedges, discs and bars.
    pub ink: Brush,
    /// Paint for the bar cut out of a 7-okta disc.
    pub cutout: Brush,
    /// Stroke width for bars.
    pub bar_width: f64,
}

impl Default for CloudStyle {
    fn default() -> Self {
        Self {
            radius: 0.07,
            outline: StrokeStyle::solid(css::BLACK, 1.2),
            ink: css::BLACK.into(),
            cutout: css::WHITE.into(),
            bar_width: 1.0,
        }
    }
}

/// One drawing step of a pictogram.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CloudPart {
    /// The open base circle.
    Outline,
    /// A filled wedge from `start` to `end` (radians, counter-clockwise).
    Wedge {
        /// Start angle.
        start: f64,
        /// End angle.
        end: f64,
    },
    /// A fully filled disc.
    Disc,
    /// A straight bar across the circle.
    Bar {
        /// Bar segment.
        line: Line,
        /// `true` when the bar is cut out of a filled disc.
        cutout: bool,
    },
}

/// The drawing steps for `oktas` at `center`, in paint order.
///
/// Okta values above 8 draw as 8.
pub fn cloud_parts(center: Point, oktas: u8, radius: f64) -> SmallVec<[CloudPart; 3]> {
    let vertical = Line::new((center.x, center.y + radius), (center.x, center.y - radius));
    let horizontal = Line::new((center.x - radius, center.y), (center.x + radius, center.y));
    let bar = |line, cutout| CloudPart::Bar { line, cutout };
    let ne_quadrant = CloudPart::Wedge {
        start: 0.0,
        end: FRAC_PI_2,
    };
    let right_half = CloudPart::Wedge {
        start: 3.0 * FRAC_PI_2,
        end: FRAC_PI_2,
    };

    let mut parts = SmallVec::new();
    parts.push(CloudPart::Outline);
    match oktas {
        0 => {}
        1 => parts.push(bar(vertical, false)),
        2 => parts.push(ne_quadrant),
        3 => parts.extend([ne_quadrant, bar(vertical, false)]),
        4 => parts.push(right_half),
        5 => parts.extend([right_half, bar(horizontal, false)]),
        6 => parts.push(CloudPart::Wedge {
            start: 0.0,
            end: 3.0 * FRAC_PI_2,
        }),
        7 => parts.extend([CloudPart::Disc, bar(vertical, true)]),
        _ => parts.push(CloudPart::Disc),
    }
    parts
}

/// Draws the pictogram for `oktas` at `center`, registering each artifact in `out`.
pub fn draw_cloud_cover<S: Surface + ?Sized>(
    center: Point,
    oktas: u8,
    style: &CloudStyle,
    surface: &mut S,
    out: &mut ArtifactRegistry,
) {
    let circle = Circle::new(center, style.radius);
    for part in cloud_parts(center, oktas, style.radius) {
        let id = match part {
            CloudPart::Outline => surface.draw_circle(circle, &style.outline, None),
            CloudPart::Wedge { start, end } => {
                surface.draw_wedge(center, style.radius, start, end, &style.ink)
            }
            CloudPart::Disc => surface.draw_circle(
                circle,
                &StrokeStyle::solid(style.ink.clone(), style.outline.stroke_width),
                Some(&style.ink),
            ),
            CloudPart::Bar { line, cutout } => {
                let brush = if cutout { &style.cutout } else { &style.ink };
                surface.draw_line(
                    &[line.p0, line.p1],
                    &StrokeStyle::solid(brush.clone(), style.bar_width),
                )
            }
        };
        out.push(id);
    }
}

/// Angular extent of the filled area of a pictogram, in radians.
///
/// Bars are not counted; this is the sky fraction the fill represents times `2π`.
pub fn filled_sweep(parts: &[CloudPart]) -> f64 {
    parts
        .iter()
        .map(|p| match *p {
            CloudPart::Wedge { start, end } => wxchart_core::wedge_sweep(start, end),
            CloudPart::Disc => 2.0 * PI,
            CloudPart::Outline | CloudPart::Bar { .. } => 0.0,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use wxchart_core::{Artifact, ArtifactKind, RecordingSurface};

    use super::*;

    #[test]
    fn okta_rounding_matches_eighths() {
        assert_eq!(oktas(0.0), 0);
        assert_eq!(oktas(0.0625), 0);
        assert_eq!(oktas(0.0625 + 1e-9), 1);
        assert_eq!(oktas(0.1875), 2);
        assert_eq!(oktas(0.5), 4);
        assert_eq!(oktas(1.0), 8);
    }

    #[test]
    fn okta_input_is_clamped() {
        assert_eq!(oktas(-0.3), 0);
        assert_eq!(oktas(1.7), 8);
    }

    #[test]
    fn every_okta_has_a_base_circle_and_expected_fill() {
        let expected_quarters = [0.0, 0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 4.0, 4.0];
        for (okta, quarters) in (0_u8..=8).zip(expected_quarters) {
            let parts = cloud_parts(Point::ORIGIN, okta, 0.07);
            assert_eq!(parts[0], CloudPart::Outline, "okta {okta}");
            let sweep = filled_sweep(&parts);
            assert!(
                (sweep - quarters * FRAC_PI_2).abs() < 1e-12,
                "okta {okta}: sweep {sweep}"
            );
        }
    }

    #[test]
    fn bars_appear_on_odd_oktas_only() {
        for okta in 0_u8..=8 {
            let bars = cloud_parts(Point::ORIGIN, okta, 0.07)
                .iter()
                .filter(|p| matches!(p, CloudPart::Bar { .. }))
                .count();
            let expected = usize::from(okta % 2 == 1);
            assert_eq!(bars, expected, "okta {okta}");
        }
    }

    #[test]
    fn full_cover_is_a_solid_disc_without_white_bar() {
        let mut surface = RecordingSurface::new();
        let mut out = ArtifactRegistry::new();
        draw_cloud_cover(
            Point::new(2.0, 5.0),
            oktas(1.0),
            &CloudStyle::default(),
            &mut surface,
            &mut out,
        );
        assert_eq!(out.len(), 2);
        assert_eq!(surface.count(ArtifactKind::Circle), 2);
        assert_eq!(surface.count(ArtifactKind::Line), 0);
        let filled = surface
            .artifacts()
            .iter()
            .filter(|(_, a)| matches!(a, Artifact::Circle { fill: Some(_), .. }))
            .count();
        assert_eq!(filled, 1);
    }

    #[test]
    fn seven_oktas_cut_a_white_vertical_bar() {
        let mut surface = RecordingSurface::new();
        let mut out = ArtifactRegistry::new();
        draw_cloud_cover(
            Point::new(1.0, 1.0),
            7,
            &CloudStyle::default(),
            &mut surface,
            &mut out,
        );
        let (_, last) = *surface.artifacts().last().expect("artifacts drawn");
        let Artifact::Line { points, stroke } = last else {
            panic!("expected the bar to be drawn last");
        };
        assert_eq!(stroke.brush, Brush::from(css::WHITE));
        assert!((points[0].x - points[1].x).abs() < 1e-12);
    }

    #[test]
    fn half_cover_fills_the_right_half() {
        let parts = cloud_parts(Point::ORIGIN, 4, 0.07);
        assert_eq!(
            parts[1],
            CloudPart::Wedge {
                start: 3.0 * FRAC_PI_2,
                end: FRAC_PI_2
            }
        );
    }
}
