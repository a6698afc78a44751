/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::bezier::*;
use crate::geo::*;

///
/// Describes a candidate curve that the fitting algorithm has just generated and scored
///
/// Passed to the callback supplied to `fit_curve_with_progress()`, which makes it possible to animate or
/// debug the fitting process. With the `multithreading` feature, callbacks for different ranges of points
/// can arrive from different threads.
///
#[derive(Copy, Clone, Debug)]
pub struct FitProgress<'a> {
    /// The candidate curve
    pub curve: Curve,

    /// The range of points the curve is being fitted to
    pub points: &'a [Coord2],

    /// The chord-length parameters the error was measured at
    pub parameters: &'a [f64],

    /// The largest squared distance between a point and the curve
    pub max_error: f64,

    /// Index into `points` of the point furthest from the curve
    pub split_point: usize,

    /// How many times the input was split to reach this range of points
    pub depth: usize,
}
