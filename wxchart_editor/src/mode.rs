// Copyright 2025 the WxChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edit modes and the mode buttons that select them.

use core::fmt;

use wxchart_glyphs::{FrontKind, MarkerKind};

/// What a pointer click currently does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EditMode {
    /// Clicks do nothing.
    #[default]
    Idle,
    /// Clicks record polyline points for a front of this kind.
    DrawingFront(FrontKind),
    /// Clicks place a pressure-center marker of this kind.
    PlacingMarker(MarkerKind),
}

impl EditMode {
    /// Human-readable name, as shown in the status line.
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Default",
            Self::DrawingFront(kind) => kind.label(),
            Self::PlacingMarker(kind) => kind.label(),
        }
    }

    /// The front being drawn, if any.
    pub fn front(self) -> Option<FrontKind> {
        match self {
            Self::DrawingFront(kind) => Some(kind),
            _ => None,
        }
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mode: {}", self.label())
    }
}

/// Toolbar mode buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModeId {
    /// Back to [`EditMode::Idle`].
    Default,
    /// Cold front.
    ColdFront,
    /// Warm front.
    WarmFront,
    /// Occluded front.
    OccludedFront,
    /// Stationary front.
    StationaryFront,
    /// Dryline.
    Dryline,
    /// High pressure marker.
    HighMarker,
    /// Low pressure marker.
    LowMarker,
}

impl ModeId {
    /// All mode buttons, in toolbar order.
    pub const ALL: [Self; 8] = [
        Self::Default,
        Self::ColdFront,
        Self::WarmFront,
        Self::OccludedFront,
        Self::StationaryFront,
        Self::Dryline,
        Self::HighMarker,
        Self::LowMarker,
    ];

    /// Button caption.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::ColdFront => "Cold Front",
            Self::WarmFront => "Warm Front",
            Self::OccludedFront => "Occluded Front",
            Self::StationaryFront => "Stationary Front",
            Self::Dryline => "Dryline",
            Self::HighMarker => "High Marker",
            Self::LowMarker => "Low Marker",
        }
    }

    /// The mode this button selects.
    pub fn target(self) -> EditMode {
        match self {
            Self::Default => EditMode::Idle,
            Self::ColdFront => EditMode::DrawingFront(FrontKind::Cold),
            Self::WarmFront => EditMode::DrawingFront(FrontKind::Warm),
            Self::OccludedFront => EditMode::DrawingFront(FrontKind::Occluded),
            Self::StationaryFront => EditMode::DrawingFront(FrontKind::Stationary),
            Self::Dryline => EditMode::DrawingFront(FrontKind::Dryline),
            Self::HighMarker => EditMode::PlacingMarker(MarkerKind::High),
            Self::LowMarker => EditMode::PlacingMarker(MarkerKind::Low),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    #[test]
    fn every_button_targets_a_distinct_mode() {
        for (i, a) in ModeId::ALL.iter().enumerate() {
            for b in &ModeId::ALL[i + 1..] {
                assert_ne!(a.target(), b.target(), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn status_line_reads_mode_label() {
        assert_eq!(EditMode::Idle.to_string(), "Mode: Default");
        assert_eq!(ModeId::WarmFront.target().to_string(), "Mode: Warm Front");
        assert_eq!(
            EditMode::PlacingMarker(MarkerKind::High).label(),
            "High Pressure Marker"
        );
        assert_eq!(ModeId::Dryline.target().front(), Some(FrontKind::Dryline));
    }

    #[test]
    fn front_buttons_are_captioned_with_their_kind() {
        for id in ModeId::ALL {
            if let EditMode::DrawingFront(kind) = id.target() {
                assert_eq!(id.button_label(), kind.label());
            }
        }
        assert_eq!(ModeId::Default.button_label(), EditMode::Idle.label());
        assert_eq!(ModeId::HighMarker.button_label(), "High Marker");
        assert_eq!(ModeId::LowMarker.button_label(), "Low Marker");
    }
}
