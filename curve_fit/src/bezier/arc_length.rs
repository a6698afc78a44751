/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::curve::*;
use crate::consts::*;

///
/// Approximate mapping from relative distance along a curve to the `t` value where that distance is reached
///
/// The curve is sampled at `ARC_LENGTH_SEGMENTS` evenly spaced `t` values and the cumulative length of the
/// resulting polyline is stored as a fraction of its total length. The table is a separate value from the
/// curve it was built from, so callers build it when they need it and drop it when they're done.
///
#[derive(Clone, PartialEq, Debug)]
pub struct ArcLengthTable {
    /// `relative_distances[i]` is the fraction of the total length covered at `t = i / ARC_LENGTH_SEGMENTS`
    relative_distances: [f64; ARC_LENGTH_SEGMENTS + 1],
}

impl ArcLengthTable {
    ///
    /// Samples a curve to create its arc-length table
    ///
    pub fn for_curve(curve: &Curve) -> ArcLengthTable {
        let mut relative_distances = [0.0; ARC_LENGTH_SEGMENTS + 1];
        let mut total_length = 0.0;
        let mut last_point = curve.start_point();

        for segment in 1..=ARC_LENGTH_SEGMENTS {
            let next_point = curve.point_at_pos((segment as f64) / (ARC_LENGTH_SEGMENTS as f64));

            total_length += next_point.distance_to(&last_point);
            relative_distances[segment] = total_length;
            last_point = next_point;
        }

        // Rounding can give a curve whose points all coincide a tiny length, so check the points themselves too
        let [start_point, cp1, cp2, end_point] = curve.to_points();
        let is_point = start_point == cp1 && cp1 == cp2 && cp2 == end_point;

        if !is_point && total_length > 0.0 && total_length.is_finite() {
            relative_distances.iter_mut().for_each(|distance| *distance /= total_length);
        } else {
            // No usable length: treat t as the relative distance
            relative_distances
                .iter_mut()
                .enumerate()
                .for_each(|(segment, distance)| *distance = (segment as f64) / (ARC_LENGTH_SEGMENTS as f64));
        }

        ArcLengthTable { relative_distances }
    }

    ///
    /// The relative distances covered at each sampled `t` value
    ///
    #[inline]
    pub fn relative_distances(&self) -> &[f64] {
        &self.relative_distances
    }

    ///
    /// Finds the `t` value at which the specified fraction of the curve's length has been covered
    ///
    /// Values at or below 0 map to 0 and values at or above 1 map to 1.
    ///
    pub fn t_for_relative_distance(&self, relative_distance: f64) -> f64 {
        if relative_distance <= 0.0 {
            return 0.0;
        }
        if relative_distance >= 1.0 {
            return 1.0;
        }

        let segments = ARC_LENGTH_SEGMENTS as f64;

        for segment in 1..=ARC_LENGTH_SEGMENTS {
            let max_distance = self.relative_distances[segment];

            if relative_distance <= max_distance {
                let min_distance = self.relative_distances[segment - 1];
                let min_t = ((segment - 1) as f64) / segments;
                let max_t = (segment as f64) / segments;

                if max_distance <= min_distance {
                    return min_t;
                }

                return (relative_distance - min_distance) / (max_distance - min_distance) * (max_t - min_t) + min_t;
            }
        }

        // Only reachable if rounding left the final entry fractionally below 1
        1.0
    }
}
