// Copyright 2025 the WxChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pressure-center markers ("H" and "L").

use core::fmt;

use kurbo::Point;
use peniko::Brush;
use peniko::color::palette::css;
use wxchart_core::{ArtifactId, Surface, TextAnchor, TextBaseline, TextStyle};

/// Pressure-center kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// High pressure center.
    High,
    /// Low pressure center.
    Low,
}

impl MarkerKind {
    /// The glyph placed on the chart.
    pub fn letter(self) -> &'static str {
        match self {
            Self::High => "H",
            Self::Low => "L",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High Pressure Marker",
            Self::Low => "Low Pressure Marker",
        }
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Marker styling.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerStyle {
    /// Paint for "H".
    pub high_fill: Brush,
    /// Paint for "L".
    pub low_fill: Brush,
    /// Font size.
    pub font_size: f64,
}

impl MarkerStyle {
    /// Text style for `kind`: bold and centered on the click position.
    pub fn text_style(&self, kind: MarkerKind) -> TextStyle {
        let fill = match kind {
            MarkerKind::High => &self.high_fill,
            MarkerKind::Low => &self.low_fill,
        };
        TextStyle::new(fill.clone(), self.font_size)
            .with_bold(true)
            .with_anchor(TextAnchor::Middle)
            .with_baseline(TextBaseline::Middle)
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            high_fill: css::BLUE.into(),
            low_fill: css::RED.into(),
            font_size: 20.0,
        }
    }
}

/// Places a marker glyph centered at `pos`.
pub fn place_marker<S: Surface + ?Sized>(
    kind: MarkerKind,
    pos: Point,
    style: &MarkerStyle,
    surface: &mut S,
) -> ArtifactId {
    surface.draw_text(pos, kind.letter(), &style.text_style(kind))
}
