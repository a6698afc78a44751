/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::*;
use crate::geo::*;

use itertools::*;

///
/// Checks that a set of points and a tolerance are suitable for fitting
///
pub fn check_fit_input(points: &[Coord2], tolerance: f64) -> Result<(), FitError> {
    if points.len() < 2 {
        return Err(FitError::TooFewPoints(points.len()));
    }

    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(FitError::InvalidTolerance(tolerance));
    }

    if let Some(bad_index) = points.iter().position(|point| !point.is_finite()) {
        return Err(FitError::NonFinitePoint(bad_index));
    }

    if !Bounds::bounds_for_points(points.iter().copied()).diagonal().is_finite() {
        return Err(FitError::CoordinateOverflow);
    }

    Ok(())
}

///
/// Removes points that are at exactly the same position as the point before them
///
/// A point that repeats its predecessor has no direction and no chord length, so it can't be parameterized.
/// Fails with `DegenerateInput` if fewer than two distinct points remain.
///
pub fn remove_duplicate_points(points: &[Coord2]) -> Result<Vec<Coord2>, FitError> {
    let distinct = points.iter().copied().dedup().collect::<Vec<_>>();

    if distinct.len() < 2 {
        Err(FitError::DegenerateInput(points.len()))
    } else {
        Ok(distinct)
    }
}
