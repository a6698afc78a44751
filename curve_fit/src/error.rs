/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

///
/// Reasons a set of points can't be fitted
///
/// Numeric stalls inside the algorithm (a Newton-Raphson step with a zero denominator, or a least-squares
/// system with a zero determinant) are not errors: they fall back to well-defined values and fitting carries on.
///
#[derive(Error, Copy, Clone, PartialEq, Debug)]
#[non_exhaustive]
pub enum FitError {
    /// At least two points are needed to fit a curve
    #[error("at least 2 points are needed to fit a curve (got {0})")]
    TooFewPoints(usize),

    /// The tolerance must be a finite number greater than 0
    #[error("tolerance must be a positive finite number (got {0})")]
    InvalidTolerance(f64),

    /// The point at the specified index has a NaN or infinite coordinate
    #[error("point {0} has a coordinate that is not a finite number")]
    NonFinitePoint(usize),

    /// A supplied tangent was zero-length or not finite
    #[error("tangents must be finite, non-zero vectors")]
    InvalidTangent,

    /// Every point is in the same place, so there's no direction to fit a curve along
    #[error("all {0} points are at the same position")]
    DegenerateInput(usize),

    /// The points are so far apart that the distances between them can't be represented
    #[error("the points are too far apart to fit a curve without overflowing")]
    CoordinateOverflow,
}
