// Copyright 2025 the WxChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interaction state machine.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Circle, Point};
use wxchart_core::{ArtifactRegistry, StrokeStyle, Surface};
use wxchart_glyphs::{
    DecorationReport, FrontKind, MarkerKind, Station, place_marker, render_station,
};

use crate::config::EditorConfig;
use crate::input::{Command, InputEvent, Key};
use crate::mode::{EditMode, ModeId};

/// Current mode plus the polyline being recorded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorState {
    mode: EditMode,
    polyline: Vec<Point>,
}

impl EditorState {
    /// The current mode.
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Points recorded since the last mode switch, commit or clear.
    pub fn polyline(&self) -> &[Point] {
        &self.polyline
    }

    /// Status label of the current mode.
    pub fn label(&self) -> &'static str {
        self.mode.label()
    }
}

/// Why an event changed nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IgnoreReason {
    /// The key has no binding.
    UnmappedKey(Key),
    /// The click fell outside the drawable region.
    OutsideBounds(Point),
    /// The click arrived while idle.
    NoActiveTool,
    /// A commit arrived while not drawing a front.
    NotDrawing,
    /// A commit arrived with fewer than two recorded points.
    TooFewPoints {
        /// Points recorded at the time of the commit.
        have: usize,
    },
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmappedKey(key) => write!(f, "no binding for {key:?}"),
            Self::OutsideBounds(p) => {
                write!(f, "click at ({:.2}, {:.2}) is off the chart", p.x, p.y)
            }
            Self::NoActiveTool => f.write_str("no tool selected"),
            Self::NotDrawing => f.write_str("not drawing a front"),
            Self::TooFewPoints { have } => write!(f, "need at least 2 points, have {have}"),
        }
    }
}

/// The effect of one handled event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    /// The mode was (re)selected.
    ModeChanged {
        /// The new mode.
        mode: EditMode,
        /// Recorded points that were dropped.
        discarded: usize,
    },
    /// A polyline point was recorded.
    PointAdded {
        /// The recorded point.
        point: Point,
        /// Polyline length after the append.
        count: usize,
    },
    /// A pressure marker was placed.
    MarkerPlaced {
        /// Marker kind.
        kind: MarkerKind,
        /// Marker position.
        at: Point,
    },
    /// A front was decorated.
    Committed {
        /// Front kind.
        kind: FrontKind,
        /// What the decorator drew.
        report: DecorationReport,
    },
    /// User artifacts were removed.
    Cleared {
        /// Number of artifacts removed.
        removed: usize,
    },
    /// Nothing happened.
    Ignored(IgnoreReason),
}

impl Outcome {
    /// Returns `true` if the event changed nothing.
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}

/// The chart editor.
///
/// Owns the drawing surface, the edit state and two artifact layers: user artifacts (fronts,
/// markers, point dots), which "Clear All" removes, and station plots, which it keeps.
#[derive(Debug)]
pub struct Editor<S> {
    surface: S,
    config: EditorConfig,
    state: EditorState,
    artifacts: ArtifactRegistry,
    stations: ArtifactRegistry,
}

impl<S: Surface> Editor<S> {
    /// Creates an idle editor drawing onto `surface`.
    pub fn new(surface: S, config: EditorConfig) -> Self {
        Self {
            surface,
            config,
            state: EditorState::default(),
            artifacts: ArtifactRegistry::new(),
            stations: ArtifactRegistry::new(),
        }
    }

    /// Edit state.
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Current mode.
    pub fn mode(&self) -> EditMode {
        self.state.mode
    }

    /// Recorded polyline.
    pub fn polyline(&self) -> &[Point] {
        &self.state.polyline
    }

    /// User artifacts, in creation order.
    pub fn artifacts(&self) -> &ArtifactRegistry {
        &self.artifacts
    }

    /// Station plot artifacts.
    pub fn station_artifacts(&self) -> &ArtifactRegistry {
        &self.stations
    }

    /// Configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The drawing surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consumes the editor, returning its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Draws station plots into the background layer.
    ///
    /// Returns the number of artifacts drawn.
    pub fn plot_stations(&mut self, stations: &[Station]) -> usize {
        let drawn: usize = stations
            .iter()
            .map(|s| {
                render_station(s, &self.config.station, &mut self.surface, &mut self.stations)
            })
            .sum();
        log::info!("plotted {} stations ({drawn} artifacts)", stations.len());
        drawn
    }

    /// Handles one input event.
    pub fn handle(&mut self, event: InputEvent) -> Outcome {
        let outcome = match event {
            InputEvent::KeyPress(key) => match Command::from_key(key) {
                Some(command) => self.apply(command),
                None => Outcome::Ignored(IgnoreReason::UnmappedKey(key)),
            },
            InputEvent::ModeButton(id) => self.apply(Command::Select(id)),
            InputEvent::ClearButton => self.apply(Command::ClearAll),
            InputEvent::PointerClick(p) => self.click(p),
        };
        if let Outcome::Ignored(reason) = outcome {
            log::debug!("ignored {event:?}: {reason}");
        }
        outcome
    }

    /// Runs one command.
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Select(id) => self.select(id),
            Command::Commit => self.commit(),
            Command::ClearAll => self.clear(),
        }
    }

    /// Switches to the mode selected by `id`, dropping any recorded points.
    pub fn select(&mut self, id: ModeId) -> Outcome {
        let mode = id.target();
        let discarded = self.state.polyline.len();
        self.state.polyline.clear();
        self.state.mode = mode;
        log::info!("{mode}");
        Outcome::ModeChanged { mode, discarded }
    }

    /// Handles a pointer click at chart coordinates.
    pub fn click(&mut self, p: Point) -> Outcome {
        if !self.config.contains(p) {
            return Outcome::Ignored(IgnoreReason::OutsideBounds(p));
        }
        match self.state.mode {
            EditMode::Idle => Outcome::Ignored(IgnoreReason::NoActiveTool),
            EditMode::DrawingFront(_) => {
                self.state.polyline.push(p);
                let dot = Circle::new(p, self.config.dot_radius);
                let stroke = StrokeStyle::solid(self.config.dot_fill.clone(), 1.0);
                let id = self
                    .surface
                    .draw_circle(dot, &stroke, Some(&self.config.dot_fill));
                self.artifacts.push(id);
                let count = self.state.polyline.len();
                log::debug!("point {count} added at ({:.2}, {:.2})", p.x, p.y);
                Outcome::PointAdded { point: p, count }
            }
            EditMode::PlacingMarker(kind) => {
                let id = place_marker(kind, p, &self.config.marker, &mut self.surface);
                self.artifacts.push(id);
                log::debug!("placed {} at ({:.2}, {:.2})", kind.letter(), p.x, p.y);
                Outcome::MarkerPlaced { kind, at: p }
            }
        }
    }

    /// Decorates the recorded polyline with the current front kind, then forgets the points.
    ///
    /// Fewer than two points is a no-op that keeps the points.
    pub fn commit(&mut self) -> Outcome {
        let Some(kind) = self.state.mode.front() else {
            return Outcome::Ignored(IgnoreReason::NotDrawing);
        };
        let have = self.state.polyline.len();
        if have < 2 {
            return Outcome::Ignored(IgnoreReason::TooFewPoints { have });
        }
        let report = self.config.fronts.get(kind).decorate(
            &self.state.polyline,
            &self.config.pips,
            &mut self.surface,
            &mut self.artifacts,
        );
        self.state.polyline.clear();
        log::info!(
            "committed {kind}: {} segments, {} pips, {} skipped",
            report.segments,
            report.pips,
            report.degenerate + report.short
        );
        Outcome::Committed { kind, report }
    }

    /// Removes every user artifact and the recorded polyline; the mode is kept.
    pub fn clear(&mut self) -> Outcome {
        let removed = self.artifacts.clear(&mut self.surface);
        self.state.polyline.clear();
        log::info!("cleared {removed} artifacts");
        Outcome::Cleared { removed }
    }
}
