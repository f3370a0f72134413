// Copyright 2025 the WxChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Station plots: okta pictogram, wind barb and value labels.

extern crate alloc;

use alloc::format;

use kurbo::{Point, Vec2};
use peniko::Brush;
use peniko::color::palette::css;
use wxchart_core::{ArtifactRegistry, Surface, TextStyle};

use crate::barb::{BarbStyle, WindBarb};
use crate::cloud::{CloudStyle, draw_cloud_cover, oktas};

/// One surface observation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Station {
    /// Station location in chart coordinates.
    pub position: Point,
    /// Air temperature.
    pub temperature: i32,
    /// Dew point.
    pub dewpoint: i32,
    /// Coded sea-level pressure (last three digits in tenths of hPa).
    pub pressure_code: u16,
    /// Eastward wind component, m/s.
    pub wind_u: f64,
    /// Northward wind component, m/s.
    pub wind_v: f64,
    /// Fraction of the sky covered by cloud, `0.0..=1.0`.
    pub cloud_cover: f64,
}

impl Station {
    /// Creates a calm, clear station with zeroed readings at `position`.
    pub fn new(position: impl Into<Point>) -> Self {
        Self {
            position: position.into(),
            temperature: 0,
            dewpoint: 0,
            pressure_code: 0,
            wind_u: 0.0,
            wind_v: 0.0,
            cloud_cover: 0.0,
        }
    }

    /// Sets temperature, dew point and pressure code.
    pub fn with_readings(mut self, temperature: i32, dewpoint: i32, pressure_code: u16) -> Self {
        self.temperature = temperature;
        self.dewpoint = dewpoint;
        self.pressure_code = pressure_code;
        self
    }

    /// Sets the wind components (m/s).
    pub fn with_wind(mut self, u: f64, v: f64) -> Self {
        self.wind_u = u;
        self.wind_v = v;
        self
    }

    /// Sets the cloud-cover fraction.
    pub fn with_cloud_cover(mut self, cover: f64) -> Self {
        self.cloud_cover = cover;
        self
    }

    /// Cloud cover in oktas.
    pub fn oktas(&self) -> u8 {
        oktas(self.cloud_cover)
    }
}

/// Station-plot styling.
#[derive(Clone, Debug, PartialEq)]
pub struct StationStyle {
    /// Temperature label offset (upper left).
    pub temperature_offset: Vec2,
    /// Dew point label offset (lower left).
    pub dewpoint_offset: Vec2,
    /// Pressure label offset (upper right).
    pub pressure_offset: Vec2,
    /// Temperature label paint.
    pub temperature_fill: Brush,
    /// Dew point label paint.
    pub dewpoint_fill: Brush,
    /// Pressure label paint.
    pub pressure_fill: Brush,
    /// Label font size.
    pub font_size: f64,
    /// Wind barb styling.
    pub barb: BarbStyle,
    /// Okta pictogram styling.
    pub cloud: CloudStyle,
}

impl Default for StationStyle {
    fn default() -> Self {
        Self {
            temperature_offset: Vec2::new(-0.3, 0.1),
            dewpoint_offset: Vec2::new(-0.3, -0.1),
            pressure_offset: Vec2::new(0.1, 0.1),
            temperature_fill: css::RED.into(),
            dewpoint_fill: css::GREEN.into(),
            pressure_fill: css::ORANGE.into(),
            font_size: 8.0,
            barb: BarbStyle::default(),
            cloud: CloudStyle::default(),
        }
    }
}

/// Draws one station plot, registering each artifact in `out`.
///
/// Returns the number of artifacts drawn.
pub fn render_station<S: Surface + ?Sized>(
    station: &Station,
    style: &StationStyle,
    surface: &mut S,
    out: &mut ArtifactRegistry,
) -> usize {
    let before = out.len();
    let pos = station.position;

    draw_cloud_cover(pos, station.oktas(), &style.cloud, surface, out);
    WindBarb::new(pos, station.wind_u, station.wind_v, &style.barb).draw(
        &style.barb,
        surface,
        out,
    );

    let labels = [
        (
            style.temperature_offset,
            format!("{}", station.temperature),
            &style.temperature_fill,
        ),
        (
            style.dewpoint_offset,
            format!("{}", station.dewpoint),
            &style.dewpoint_fill,
        ),
        (
            style.pressure_offset,
            format!("{}", station.pressure_code),
            &style.pressure_fill,
        ),
    ];
    for (offset, text, fill) in labels {
        let text_style = TextStyle::new(fill.clone(), style.font_size);
        out.push(surface.draw_text(pos + offset, &text, &text_style));
    }

    out.len() - before
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use wxchart_core::{Artifact, ArtifactKind, RecordingSurface};

    use super::*;

    #[test]
    fn labels_sit_at_fixed_offsets() {
        let station = Station::new((3.0, 2.0))
            .with_readings(50, 40, 122)
            .with_wind(11.0, 0.0)
            .with_cloud_cover(0.0);
        let mut surface = RecordingSurface::new();
        let mut out = ArtifactRegistry::new();
        let drawn = render_station(&station, &StationStyle::default(), &mut surface, &mut out);
        assert_eq!(drawn, out.len());

        let labels: Vec<(Point, String)> = surface
            .artifacts()
            .into_iter()
            .filter_map(|(_, a)| match a {
                Artifact::Text { pos, text, .. } => Some((*pos, text.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(labels.len(), 3);
        let expect = [((2.7, 2.1), "50"), ((2.7, 1.9), "40"), ((3.1, 2.1), "122")];
        for ((pos, text), ((x, y), want)) in labels.iter().zip(expect) {
            assert!((pos.x - x).abs() < 1e-12 && (pos.y - y).abs() < 1e-12, "{pos:?}");
            assert_eq!(text, want);
        }
    }

    #[test]
    fn calm_clear_station_is_two_circles_and_labels() {
        let station = Station::new((1.0, 1.0)).with_readings(30, 20, 122);
        let mut surface = RecordingSurface::new();
        let mut out = ArtifactRegistry::new();
        render_station(&station, &StationStyle::default(), &mut surface, &mut out);
        // Okta outline, calm circle, three labels.
        assert_eq!(surface.count(ArtifactKind::Circle), 2);
        assert_eq!(surface.count(ArtifactKind::Text), 3);
        assert_eq!(surface.count(ArtifactKind::Line), 0);
    }

    #[test]
    fn windy_overcast_station_draws_disc_and_barb() {
        // 9 m/s = 17.49 kt -> 15 kt.
        let station = Station::new((2.0, 5.0))
            .with_readings(40, 30, 122)
            .with_wind(9.0, 0.0)
            .with_cloud_cover(1.0);
        assert_eq!(station.oktas(), 8);
        let mut surface = RecordingSurface::new();
        let mut out = ArtifactRegistry::new();
        let drawn = render_station(&station, &StationStyle::default(), &mut surface, &mut out);
        // Outline + disc, shaft + full and half tick, three labels.
        assert_eq!(drawn, 8);
        assert_eq!(surface.count(ArtifactKind::Line), 3);
    }
}
