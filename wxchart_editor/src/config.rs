// Copyright 2025 the WxChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editor configuration.

use kurbo::{Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;
use wxchart_glyphs::{FrontStyles, MarkerStyle, PipSizes, StationStyle};

/// Editor configuration: drawable region plus the styles of everything the editor draws.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
    /// Drawable region in chart coordinates; clicks outside it are ignored.
    pub bounds: Rect,
    /// Per-kind front styles.
    pub fronts: FrontStyles,
    /// Pip dimensions.
    pub pips: PipSizes,
    /// Station plot styling.
    pub station: StationStyle,
    /// Pressure marker styling.
    pub marker: MarkerStyle,
    /// Radius of the dot drawn for each recorded point.
    pub dot_radius: f64,
    /// Paint of recorded-point dots.
    pub dot_fill: Brush,
}

impl EditorConfig {
    /// Sets the drawable region.
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Sets the front style table.
    pub fn with_fronts(mut self, fronts: FrontStyles) -> Self {
        self.fronts = fronts;
        self
    }

    /// Sets the pip dimensions.
    pub fn with_pips(mut self, pips: PipSizes) -> Self {
        self.pips = pips;
        self
    }

    /// Sets the station plot styling.
    pub fn with_station(mut self, station: StationStyle) -> Self {
        self.station = station;
        self
    }

    /// Sets the pressure marker styling.
    pub fn with_marker(mut self, marker: MarkerStyle) -> Self {
        self.marker = marker;
        self
    }

    /// Returns `true` if `p` lies in the drawable region, edges included.
    pub fn contains(&self, p: Point) -> bool {
        let b = self.bounds;
        p.is_finite() && p.x >= b.x0 && p.x <= b.x1 && p.y >= b.y0 && p.y <= b.y1
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            bounds: Rect::new(0.0, 0.0, 6.0, 6.0),
            fronts: FrontStyles::default(),
            pips: PipSizes::default(),
            station: StationStyle::default(),
            marker: MarkerStyle::default(),
            dot_radius: 0.04,
            dot_fill: css::BLACK.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let config = EditorConfig::default();
        assert!(config.contains(Point::new(0.0, 0.0)));
        assert!(config.contains(Point::new(6.0, 6.0)));
        assert!(config.contains(Point::new(3.2, 0.5)));
        assert!(!config.contains(Point::new(6.01, 3.0)));
        assert!(!config.contains(Point::new(3.0, -0.1)));
        assert!(!config.contains(Point::new(f64::NAN, 1.0)));
    }

    #[test]
    fn bounds_can_be_replaced() {
        let config = EditorConfig::default().with_bounds(Rect::new(-1.0, -1.0, 1.0, 1.0));
        assert!(config.contains(Point::new(-0.5, 0.5)));
        assert!(!config.contains(Point::new(2.0, 0.5)));
    }
}
