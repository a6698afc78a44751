/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::*;

///
/// Evaluates the cubic Bernstein polynomial with the specified weights at `t`
///
/// This works for single values as well as for points: `(1-t)³w1 + 3(1-t)²t·w2 + 3(1-t)t²·w3 + t³w4`
///
#[inline]
pub fn basis<Point>(t: f64, w1: Point, w2: Point, w3: Point, w4: Point) -> Point
where
    Point: Copy + Add<Output = Point> + Mul<f64, Output = Point>,
{
    let t_squared = t * t;
    let t_cubed = t_squared * t;

    let one_minus_t = 1.0 - t;
    let one_minus_t_squared = one_minus_t * one_minus_t;
    let one_minus_t_cubed = one_minus_t_squared * one_minus_t;

    w1 * one_minus_t_cubed
        + w2 * (3.0 * one_minus_t_squared * t)
        + w3 * (3.0 * one_minus_t * t_squared)
        + w4 * t_cubed
}

///
/// Evaluates the quadratic Bernstein polynomial with the specified weights at `t`
///
#[inline]
pub fn basis3<Point>(t: f64, w1: Point, w2: Point, w3: Point) -> Point
where
    Point: Copy + Add<Output = Point> + Mul<f64, Output = Point>,
{
    let one_minus_t = 1.0 - t;

    w1 * (one_minus_t * one_minus_t) + w2 * (2.0 * one_minus_t * t) + w3 * (t * t)
}

///
/// Evaluates the linear Bernstein polynomial (a linear interpolation) at `t`
///
#[inline]
pub fn basis2<Point>(t: f64, w1: Point, w2: Point) -> Point
where
    Point: Copy + Add<Output = Point> + Mul<f64, Output = Point>,
{
    w1 * (1.0 - t) + w2 * t
}
