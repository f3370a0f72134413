// Copyright 2025 the WxChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Meteorological symbol geometry for `wxchart_core` surfaces.
//!
//! This crate turns picked points and station readings into the vector glyphs of a surface
//! analysis chart:
//! - **Fronts**: one generic decorator driven by a per-kind [`FrontStyle`] table.
//! - **Pips**: triangle and semicircle vertex sets ([`Pip`]).
//! - **Station plots**: okta pictograms, [`WindBarb`]s and value labels.
//! - **Pressure centers**: "H" and "L" markers.
//!
//! Everything here is deterministic: the same inputs always produce the same artifacts.
//! Coordinates are chart units with y pointing up.

#![no_std]

extern crate alloc;

mod barb;
mod cloud;
#[cfg(not(feature = "std"))]
mod float;
mod front;
mod pip;
mod pressure;
mod station;

pub use barb::{
    BarbStyle, BarbTick, KNOTS_PER_METER_PER_SECOND, WindBarb, quantize_knots, wind_speed_knots,
};
pub use cloud::{CloudPart, CloudStyle, cloud_parts, draw_cloud_cover, filled_sweep, oktas};
pub use front::{DecorationReport, FrontKind, FrontStyle, FrontStyles, LinePaint};
pub use pip::{Pip, PipSizes, PipVertices, Side, semicircle_pip, triangle_pip};
pub use pressure::{MarkerKind, MarkerStyle, place_marker};
pub use station::{Station, StationStyle, render_station};
