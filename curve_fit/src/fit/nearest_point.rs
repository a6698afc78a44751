/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::parameterize::*;
use crate::bezier::*;
use crate::geo::*;

/// Number of evenly spaced samples used to find a starting point for the search
const NEAREST_POINT_SAMPLES: usize = 64;

/// Number of Newton-Raphson steps used to refine the closest sample
const NEAREST_POINT_ITERATIONS: usize = 8;

///
/// Finds the `t` value (in `0..=1`) of the point on a curve that's closest to the specified point
///
/// This samples the curve to find an approximate answer, then refines it with a few Newton-Raphson steps. The
/// refined value is only used if it's actually closer, so the result is never worse than the best sample.
///
pub fn nearest_point_t(curve: &Curve, point: &Coord2) -> f64 {
    let (mut best_t, mut best_distance) = (0..=NEAREST_POINT_SAMPLES)
        .map(|sample| (sample as f64) / (NEAREST_POINT_SAMPLES as f64))
        .map(|t| (t, curve.point_at_pos(t).squared_distance_to(point)))
        .fold((0.0, f64::MAX), |best, candidate| if candidate.1 < best.1 { candidate } else { best });

    let mut t = best_t;
    for _ in 0..NEAREST_POINT_ITERATIONS {
        t = newton_raphson_root_find(curve, point, t).max(0.0).min(1.0);

        let distance = curve.point_at_pos(t).squared_distance_to(point);
        if distance < best_distance {
            best_t = t;
            best_distance = distance;
        }
    }

    best_t
}

///
/// Returns the squared distance from a point to the nearest point on a curve
///
pub fn squared_distance_to_curve(curve: &Curve, point: &Coord2) -> f64 {
    curve.point_at_pos(nearest_point_t(curve, point)).squared_distance_to(point)
}
