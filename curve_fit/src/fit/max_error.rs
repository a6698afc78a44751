/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::bezier::*;
use crate::geo::*;

///
/// Finds the largest squared distance between a set of points and a fitted curve, and the index of the point where it occurs
///
/// The parameters are treated as fractions of the distance along the curve: each is converted to a `t` value
/// using the curve's arc-length table before the curve is evaluated. If no point is any distance from the curve
/// the error is 0 and the index is the middle point. A distance that can't be computed (it overflows or is NaN)
/// counts as an infinite error.
///
pub fn compute_max_error(points: &[Coord2], curve: &Curve, parameters: &[f64]) -> (f64, usize) {
    test_assert!(points.len() == parameters.len());

    let arc_lengths = ArcLengthTable::for_curve(curve);

    let mut max_distance = 0.0;
    let mut split_point = points.len() / 2;

    for (index, (point, parameter)) in points.iter().zip(parameters.iter()).enumerate() {
        let t = arc_lengths.t_for_relative_distance(*parameter);
        let distance = curve.point_at_pos(t).squared_distance_to(point);
        let distance = if distance.is_nan() { f64::INFINITY } else { distance };

        if distance > max_distance {
            max_distance = distance;
            split_point = index;
        }
    }

    (max_distance, split_point)
}
