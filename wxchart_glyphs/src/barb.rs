// Copyright 2025 the WxChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wind barbs.
//!
//! A barb is a shaft pointing into the wind with ticks at its far end: one full tick per 10 kt
//! and a half tick for a remaining 5 kt. Flagged speed is capped at 45 kt; 50-kt pennants are
//! not drawn.

use kurbo::{Circle, Line, Point, Vec2};
use smallvec::SmallVec;
use wxchart_core::{ArtifactRegistry, StrokeStyle, Surface};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Conversion factor from m/s to knots.
pub const KNOTS_PER_METER_PER_SECOND: f64 = 1.94384;

/// Wind speed in knots for the `(u, v)` components given in m/s.
pub fn wind_speed_knots(u: f64, v: f64) -> f64 {
    u.hypot(v) * KNOTS_PER_METER_PER_SECOND
}

/// Rounds a speed to the nearest multiple of 5 kt (ties to even).
pub fn quantize_knots(knots: f64) -> f64 {
    (knots / 5.0).round_ties_even() * 5.0
}

/// Barb dimensions in chart units.
#[derive(Clone, Debug, PartialEq)]
pub struct BarbStyle {
    /// Shaft length.
    pub shaft_length: f64,
    /// Distance between ticks, as a fraction of the shaft vector.
    pub tick_spacing: f64,
    /// Full (10 kt) tick length; half ticks are half as long.
    pub tick_length: f64,
    /// Highest speed represented by ticks.
    pub max_flagged_knots: f64,
    /// Radius of the calm circle.
    pub calm_radius: f64,
    /// Shaft and tick stroke.
    pub stroke: StrokeStyle,
    /// Calm circle outline.
    pub calm_stroke: StrokeStyle,
}

impl Default for BarbStyle {
    fn default() -> Self {
        Self {
            shaft_length: 0.3,
            tick_spacing: 0.15,
            tick_length: 0.1,
            max_flagged_knots: 45.0,
            calm_radius: 0.07,
            stroke: StrokeStyle::default(),
            calm_stroke: StrokeStyle {
                stroke_width: 1.2,
                ..StrokeStyle::default()
            },
        }
    }
}

/// One barb tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarbTick {
    /// Tick segment, starting on the shaft.
    pub line: Line,
    /// `true` for a 5 kt half tick.
    pub half: bool,
}

/// Wind barb geometry for one observation.
#[derive(Clone, Debug, PartialEq)]
pub enum WindBarb {
    /// Quantized speed below 1 kt: an open circle, no shaft.
    Calm {
        /// The calm circle.
        circle: Circle,
    },
    /// A shaft with ticks.
    Barbed {
        /// Quantized speed in knots.
        knots: f64,
        /// Shaft from the station toward the wind source.
        shaft: Line,
        /// Ticks, from the far end of the shaft inward.
        ticks: SmallVec<[BarbTick; 5]>,
    },
}

impl WindBarb {
    /// Computes the barb at `origin` for wind components `(u, v)` in m/s.
    pub fn new(origin: Point, u: f64, v: f64, style: &BarbStyle) -> Self {
        let knots = quantize_knots(wind_speed_knots(u, v));
        if knots < 1.0 {
            return Self::Calm {
                circle: Circle::new(origin, style.calm_radius),
            };
        }

        // Direction the wind blows from.
        let theta = u.atan2(v);
        let shaft_vec = Vec2::new(-theta.sin(), -theta.cos()) * style.shaft_length;
        let end = origin + shaft_vec;
        let perp = Vec2::new(theta.cos(), -theta.sin());
        let step = shaft_vec * style.tick_spacing;

        let mut ticks = SmallVec::new();
        let mut remaining = knots.min(style.max_flagged_knots);
        let mut pos = 0.0;
        let mut push = |pos: f64, len: f64, half: bool| {
            let start = end - step * pos;
            ticks.push(BarbTick {
                line: Line::new(start, start + perp * len),
                half,
            });
        };
        while remaining >= 10.0 {
            push(pos, style.tick_length, false);
            remaining -= 10.0;
            pos += 1.0;
        }
        if remaining >= 5.0 {
            push(pos, style.tick_length * 0.5, true);
        }

        Self::Barbed {
            knots,
            shaft: Line::new(origin, end),
            ticks,
        }
    }

    /// Number of 10 kt ticks.
    pub fn full_ticks(&self) -> usize {
        match self {
            Self::Calm { .. } => 0,
            Self::Barbed { ticks, .. } => ticks.iter().filter(|t| !t.half).count(),
        }
    }

    /// Number of 5 kt ticks.
    pub fn half_ticks(&self) -> usize {
        match self {
            Self::Calm { .. } => 0,
            Self::Barbed { ticks, .. } => ticks.iter().filter(|t| t.half).count(),
        }
    }

    /// Returns `true` for a calm observation.
    pub fn is_calm(&self) -> bool {
        matches!(self, Self::Calm { .. })
    }

    /// Draws the barb, registering each artifact in `out`.
    pub fn draw<S: Surface + ?Sized>(
        &self,
        style: &BarbStyle,
        surface: &mut S,
        out: &mut ArtifactRegistry,
    ) {
        match self {
            Self::Calm { circle } => {
                out.push(surface.draw_circle(*circle, &style.calm_stroke, None));
            }
            Self::Barbed { shaft, ticks, .. } => {
                out.push(surface.draw_line(&[shaft.p0, shaft.p1], &style.stroke));
                for tick in ticks {
                    out.push(surface.draw_line(&[tick.line.p0, tick.line.p1], &style.stroke));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use wxchart_core::{ArtifactKind, RecordingSurface};

    use super::*;

    #[test]
    fn ten_meters_per_second_is_two_full_ticks() {
        let barb = WindBarb::new(Point::ORIGIN, 10.0, 0.0, &BarbStyle::default());
        let WindBarb::Barbed { knots, .. } = &barb else {
            panic!("expected a barbed wind");
        };
        assert_eq!(*knots, 20.0);
        assert_eq!(barb.full_ticks(), 2);
        assert_eq!(barb.half_ticks(), 0);
    }

    #[test]
    fn zero_wind_is_calm_without_shaft() {
        let style = BarbStyle::default();
        let barb = WindBarb::new(Point::new(1.0, 1.0), 0.0, 0.0, &style);
        assert!(barb.is_calm());

        let mut surface = RecordingSurface::new();
        let mut out = ArtifactRegistry::new();
        barb.draw(&style, &mut surface, &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(surface.count(ArtifactKind::Circle), 1);
        assert_eq!(surface.count(ArtifactKind::Line), 0);
    }

    #[test]
    fn light_wind_rounds_down_to_calm() {
        // 1 m/s is ~1.94 kt, which quantizes to 0 kt.
        assert!(WindBarb::new(Point::ORIGIN, 1.0, 0.0, &BarbStyle::default()).is_calm());
    }

    #[test]
    fn quantization_ties_go_to_even() {
        assert_eq!(quantize_knots(12.5), 10.0);
        assert_eq!(quantize_knots(17.5), 20.0);
        assert_eq!(quantize_knots(19.4384), 20.0);
    }

    #[test]
    fn half_tick_sits_after_full_ticks() {
        let style = BarbStyle::default();
        // 8 m/s = 15.55 kt -> 15 kt: one full and one half tick.
        let barb = WindBarb::new(Point::ORIGIN, 8.0, 0.0, &style);
        let WindBarb::Barbed { shaft, ticks, .. } = &barb else {
            panic!("expected a barbed wind");
        };
        assert_eq!(ticks.len(), 2);
        assert!(!ticks[0].half);
        assert!(ticks[1].half);
        assert_eq!(ticks[0].line.p0, shaft.p1);
        assert!((ticks[0].line.length() - 0.1).abs() < 1e-12);
        assert!((ticks[1].line.length() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn westerly_shaft_points_west() {
        // u > 0 blows toward the east, so the shaft points west, into the wind.
        let barb = WindBarb::new(Point::new(3.0, 1.0), 10.0, 0.0, &BarbStyle::default());
        let WindBarb::Barbed { shaft, ticks, .. } = &barb else {
            panic!("expected a barbed wind");
        };
        assert!((shaft.p1.x - 2.7).abs() < 1e-12);
        assert!((shaft.p1.y - 1.0).abs() < 1e-12);
        // Ticks hang below the shaft for this direction.
        assert!(ticks.iter().all(|t| t.line.p1.y < t.line.p0.y));
    }

    #[test]
    fn strong_wind_is_capped_without_pennants() {
        // 30 m/s = 58.3 kt -> 60 kt, drawn as 45 kt: four full ticks and one half tick.
        let barb = WindBarb::new(Point::ORIGIN, 30.0, 0.0, &BarbStyle::default());
        assert_eq!(barb.full_ticks(), 4);
        assert_eq!(barb.half_ticks(), 1);
    }

    #[test]
    fn draws_shaft_plus_one_line_per_tick_in_a_single_pass() {
        let style = BarbStyle::default();
        let barb = WindBarb::new(Point::ORIGIN, 0.0, 13.0, &style);
        let mut surface = RecordingSurface::new();
        let mut out = ArtifactRegistry::new();
        barb.draw(&style, &mut surface, &mut out);
        // 13 m/s = 25.3 kt -> 25 kt: shaft, two full ticks, one half tick.
        assert_eq!(out.len(), 4);
        assert_eq!(surface.count(ArtifactKind::Line), 4);
    }
}
