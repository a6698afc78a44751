/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::*;

///
/// Returns the weights of the quadratic curve that is the derivative of the cubic curve with the specified weights
///
#[inline]
pub fn derivative4<Point>(w1: Point, w2: Point, w3: Point, w4: Point) -> (Point, Point, Point)
where
    Point: Copy + Sub<Output = Point> + Mul<f64, Output = Point>,
{
    ((w2 - w1) * 3.0, (w3 - w2) * 3.0, (w4 - w3) * 3.0)
}

///
/// Returns the weights of the linear curve that is the derivative of the quadratic curve with the specified weights
///
#[inline]
pub fn derivative3<Point>(w1: Point, w2: Point, w3: Point) -> (Point, Point)
where
    Point: Copy + Sub<Output = Point> + Mul<f64, Output = Point>,
{
    ((w2 - w1) * 2.0, (w3 - w2) * 2.0)
}
