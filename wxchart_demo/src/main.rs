// Copyright 2025 the WxChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted surface-analysis session rendered to an SVG file.
//!
//! Plots the demo stations, then drives the editor through the same events a user would send:
//! mode shortcuts, pointer clicks, toolbar buttons and Enter. The first command-line argument
//! overrides the output path.

mod stations;
mod svg;

use kurbo::Point;
use wxchart_editor::{Editor, EditorConfig, InputEvent, Key, ModeId};

use crate::svg::SvgSurface;

const DEFAULT_OUTPUT: &str = "wxchart_demo.svg";

fn key(c: char) -> InputEvent {
    InputEvent::KeyPress(Key::Char(c))
}

fn click(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerClick(Point::new(x, y))
}

fn session() -> Vec<InputEvent> {
    let enter = InputEvent::KeyPress(Key::Enter);
    vec![
        // A scratch front, thrown away by Clear All.
        key('c'),
        click(0.5, 0.5),
        click(2.5, 0.5),
        InputEvent::ClearButton,
        // Cold front sweeping south-west.
        key('c'),
        click(3.6, 5.6),
        click(3.2, 4.4),
        click(2.4, 3.5),
        click(1.4, 2.9),
        enter,
        // Warm front east of the low.
        InputEvent::ModeButton(ModeId::WarmFront),
        click(3.6, 5.6),
        click(4.6, 5.1),
        click(5.7, 4.9),
        enter,
        // Occluded front into the low.
        key('o'),
        click(2.6, 5.8),
        click(3.6, 5.6),
        enter,
        key('s'),
        click(0.4, 1.5),
        click(1.4, 1.5),
        click(2.6, 1.2),
        enter,
        key('d'),
        click(4.5, 3.6),
        click(4.3, 2.5),
        click(4.6, 1.4),
        enter,
        key('l'),
        click(2.9, 5.5),
        key('h'),
        click(5.4, 0.6),
        // Ignored: out of bounds.
        click(7.0, 3.0),
        InputEvent::ModeButton(ModeId::Default),
    ]
}

fn main() {
    env_logger::init();

    let config = EditorConfig::default();
    let surface = SvgSurface::new(config.bounds, 100.0);
    let mut editor = Editor::new(surface, config);
    editor.plot_stations(&stations::demo_stations());

    let events = session();
    let mut ignored = 0_usize;
    for event in events {
        let outcome = editor.handle(event);
        if outcome.is_ignored() {
            ignored += 1;
        }
        log::trace!("{event:?} -> {outcome:?}");
    }
    log::info!(
        "session done: {} user artifacts, {} station artifacts, {ignored} events ignored",
        editor.artifacts().len(),
        editor.station_artifacts().len()
    );

    let status = editor.mode().to_string();
    let surface = editor.into_surface();
    log::debug!(
        "serializing {} live artifacts, extent {:?}",
        surface.scene().len(),
        surface.content_bounds()
    );
    let mut toolbar: Vec<&str> = ModeId::ALL.iter().map(|id| id.button_label()).collect();
    toolbar.push("Clear All");
    let out = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    std::fs::write(&out, surface.to_svg_string(&status, &toolbar)).expect("write SVG output");
    println!("Wrote {out}");
}
