/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

///
/// Unit vector pointing from `point_b` towards `point_a`, or `None` if the two points are the same
///
/// The tangent at the start of a set of points is `derive_tangent(points[1], points[0])` and the tangent at
/// the end is `derive_tangent(points[len-2], points[len-1])`: both point inwards, towards the rest of the curve.
///
#[inline]
pub fn derive_tangent(point_a: Coord2, point_b: Coord2) -> Option<Coord2> {
    (point_a - point_b).normalize()
}

///
/// Computes the unit tangent used at the point where a range of points is split into two
///
/// This points from the split towards the earlier points (it becomes the end tangent of the first range,
/// and is reversed to become the start tangent of the second). It's the direction from the point after the
/// split to the point before it; if those two points are in the same place (the stroke doubles back on
/// itself), the direction from the split point to the previous point rotated by 90 degrees counter-clockwise
/// is used instead.
///
/// `split_point` must have a point either side of it. Returns `None` only when the split point is also
/// at the same position as the point before it, which can't happen once duplicate points are removed.
///
pub fn center_tangent(points: &[Coord2], split_point: usize) -> Option<Coord2> {
    let before = points[split_point - 1];
    let after = points[split_point + 1];
    let center_vector = before - after;

    if center_vector.0 == 0.0 && center_vector.1 == 0.0 {
        (before - points[split_point]).rotate_90().normalize()
    } else {
        center_vector.normalize()
    }
}
