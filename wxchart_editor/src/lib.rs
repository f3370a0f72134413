// Copyright 2025 the WxChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive editing of surface-analysis charts.
//!
//! [`Editor`] is a single-threaded state machine: each [`InputEvent`] is handled to completion
//! and reported as an [`Outcome`]. The editor owns one [`EditMode`] at a time:
//! - **Idle**: clicks do nothing.
//! - **Drawing a front**: clicks record polyline points; Enter decorates them.
//! - **Placing a marker**: clicks drop "H" or "L" glyphs.
//!
//! Keyboard shortcuts and toolbar buttons resolve to the same [`Command`]s.

#![no_std]

extern crate alloc;

mod config;
mod editor;
mod input;
mod mode;

pub use config::EditorConfig;
pub use editor::{Editor, EditorState, IgnoreReason, Outcome};
pub use input::{Command, InputEvent, Key};
pub use mode::{EditMode, ModeId};
