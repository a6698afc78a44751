/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::bezier::*;
use crate::consts::*;
use crate::geo::*;

///
/// Uses least squares to find the control points of a curve through the first and last of a set of points
///
/// The control points are constrained to lie along `left_tangent` from the first point and along
/// `right_tangent` from the last point, so only their two distances along the tangents ('alpha' values) are
/// solved for. When the solution is degenerate (the system has no unique solution, or either distance is
/// close to zero or negative) both control points are instead placed a third of the chord length out along
/// their tangents.
///
pub fn generate_bezier(points: &[Coord2], parameters: &[f64], left_tangent: Coord2, right_tangent: Coord2) -> Curve {
    test_assert!(points.len() >= 2);
    test_assert!(points.len() == parameters.len());

    let first_point = points[0];
    let last_point = points[points.len() - 1];

    // Build the 2x2 normal equations C·[alpha_l, alpha_r] = X
    let mut c = [[0.0, 0.0], [0.0, 0.0]];
    let mut x = [0.0, 0.0];

    for (point, u) in points.iter().zip(parameters.iter()) {
        let u = *u;
        let ux = 1.0 - u;

        let a0 = left_tangent * (3.0 * u * (ux * ux));
        let a1 = right_tangent * (3.0 * ux * (u * u));

        c[0][0] += a0.dot(&a0);
        c[0][1] += a0.dot(&a1);
        c[1][0] += a0.dot(&a1);
        c[1][1] += a1.dot(&a1);

        let tmp = *point - basis(u, first_point, first_point, last_point, last_point);

        x[0] += a0.dot(&tmp);
        x[1] += a1.dot(&tmp);
    }

    // Cramer's rule
    let det_c0_c1 = c[0][0] * c[1][1] - c[1][0] * c[0][1];
    let det_c0_x = c[0][0] * x[1] - c[1][0] * x[0];
    let det_x_c1 = x[0] * c[1][1] - x[1] * c[0][1];

    let (alpha_l, alpha_r) = if det_c0_c1 == 0.0 {
        (0.0, 0.0)
    } else {
        (det_x_c1 / det_c0_c1, det_c0_x / det_c0_c1)
    };

    // Alphas near zero put the control points on top of the end points, and negative alphas produce loops
    let segment_length = first_point.distance_to(&last_point);
    let epsilon = ALPHA_EPSILON * segment_length;

    if alpha_l < epsilon || alpha_r < epsilon {
        let distance = segment_length / 3.0;

        Curve::from_points(
            first_point,
            (first_point + left_tangent * distance, last_point + right_tangent * distance),
            last_point,
        )
    } else {
        Curve::from_points(
            first_point,
            (first_point + left_tangent * alpha_l, last_point + right_tangent * alpha_r),
            last_point,
        )
    }
}
