/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::bezier::*;
use crate::geo::*;

///
/// Assigns a `t` value to each point according to the fraction of the total polyline length at that point
///
/// The first point always gets `0` and the last `1`. If every point is in the same place there's no length to
/// divide by, and every point is given `0`.
///
pub fn chord_length_parameterize(points: &[Coord2]) -> Vec<f64> {
    let mut total_length = 0.0;
    let mut parameters = Vec::with_capacity(points.len());

    for (index, point) in points.iter().enumerate() {
        if index > 0 {
            total_length += point.distance_to(&points[index - 1]);
        }

        parameters.push(total_length);
    }

    if total_length > 0.0 {
        parameters.iter_mut().for_each(|t| *t /= total_length);
    }

    parameters
}

///
/// Performs a single Newton-Raphson step to move `u` closer to the `t` value of the nearest point on the curve
///
/// At the nearest point, the vector from the curve to `point` is perpendicular to the curve, so this searches
/// for a root of `(Q(u) - point)·Q'(u)`. The result isn't clamped, so may be outside of `0..=1`. If the
/// derivative of that function is 0, no improvement can be made and `u` is returned unchanged.
///
pub fn newton_raphson_root_find(curve: &Curve, point: &Coord2, u: f64) -> f64 {
    let d = curve.point_at_pos(u) - *point;
    let q_prime = curve.derivative_at(u);
    let q_prime_prime = curve.second_derivative_at(u);

    let numerator = d.dot(&q_prime);
    let denominator = q_prime.dot(&q_prime) + d.dot(&q_prime_prime);

    if denominator == 0.0 {
        u
    } else {
        u - numerator / denominator
    }
}

///
/// Refines the parameters for a set of points by taking a Newton-Raphson step towards the nearest point on a curve
///
pub fn reparameterize(curve: &Curve, points: &[Coord2], parameters: &[f64]) -> Vec<f64> {
    test_assert!(points.len() == parameters.len());

    points
        .iter()
        .zip(parameters.iter())
        .map(|(point, u)| newton_raphson_root_find(curve, point, *u))
        .collect()
}
