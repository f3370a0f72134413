// Copyright 2025 the WxChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed demo observations on a 5×5 grid.

use wxchart_glyphs::Station;

// (x, y, temperature, dew point, pressure code, u, v, cloud cover)
const DEMO: [(f64, f64, i32, i32, u16, f64, f64, f64); 25] = [
    (1.0, 1.0, 30, 20, 122, 0.0, 0.0, 0.1),
    (1.0, 2.0, 30, 20, 122, 1.0, 0.0, 0.2),
    (1.0, 3.0, 30, 20, 122, 2.0, 0.0, 0.3),
    (1.0, 4.0, 30, 30, 122, 3.0, 0.0, 0.4),
    (1.0, 5.0, 30, 30, 122, 4.0, 0.0, 0.5),
    (2.0, 1.0, 40, 30, 122, 5.0, 0.0, 0.6),
    (2.0, 2.0, 40, 30, 122, 6.0, 0.0, 0.7),
    (2.0, 3.0, 40, 30, 122, 7.0, 0.0, 0.8),
    (2.0, 4.0, 40, 30, 122, 8.0, 0.0, 0.9),
    (2.0, 5.0, 40, 30, 122, 9.0, 0.0, 1.0),
    (3.0, 1.0, 50, 40, 122, 10.0, 0.0, 0.0),
    (3.0, 2.0, 50, 40, 122, 11.0, 0.0, 0.0),
    (3.0, 3.0, 50, 40, 122, 12.0, 0.0, 0.0),
    (3.0, 4.0, 50, 40, 122, 13.0, 0.0, 0.0),
    (3.0, 5.0, 50, 40, 122, 14.0, 0.0, 0.0),
    (4.0, 1.0, 60, 50, 122, 15.0, 0.0, 0.0),
    (4.0, 2.0, 60, 50, 122, 16.0, 0.0, 0.0),
    (4.0, 3.0, 60, 50, 122, 17.0, 0.0, 0.0),
    (4.0, 4.0, 60, 50, 122, 18.0, 0.0, 0.0),
    (4.0, 5.0, 60, 50, 122, 19.0, 0.0, 0.0),
    (5.0, 1.0, 70, 60, 122, 20.0, 0.0, 0.0),
    (5.0, 2.0, 70, 60, 122, 21.0, 0.0, 0.0),
    (5.0, 3.0, 70, 60, 122, 22.0, 0.0, 0.0),
    (5.0, 4.0, 70, 60, 122, 23.0, 0.0, 0.0),
    (5.0, 5.0, 70, 60, 122, 24.0, 0.0, 0.0),
];

pub(crate) fn demo_stations() -> Vec<Station> {
    DEMO.iter()
        .map(|&(x, y, temp, dew, pres, u, v, cover)| {
            Station::new((x, y))
                .with_readings(temp, dew, pres)
                .with_wind(u, v)
                .with_cloud_cover(cover)
        })
        .collect()
}
