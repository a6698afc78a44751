/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::generate::*;
use super::max_error::*;
use super::options::*;
use super::parameterize::*;
use super::prepare::*;
use super::progress::*;
use super::tangent::*;
use crate::bezier::*;
use crate::consts::*;
use crate::error::*;
use crate::geo::*;

use itertools::*;
use log::{debug, trace, warn};

///
/// Fits a series of Bezier curves to a set of points
///
/// The tolerance is the largest *squared* distance allowed between any point and the fitted curves. The
/// tangents at the two ends are taken from the direction of the first and last pairs of points.
///
/// Returns the curves in order: the end point of each curve is the start point of the next, the first curve
/// starts at the first point and the last curve ends at the last point.
///
pub fn fit_curve(points: &[Coord2], tolerance: f64) -> Result<Vec<Curve>, FitError> {
    fit_curve_with_options(points, &FitOptions::with_tolerance(tolerance))
}

///
/// Fits a series of Bezier curves to a set of points, using the specified tangents at either end
///
/// `left_tangent` is the direction the curve leaves the first point and `right_tangent` is the direction the
/// curve arrives at the last point from (so both point towards the interior of the curve). The tangents are
/// normalized before they're used.
///
pub fn fit_curve_with_tangents(
    points: &[Coord2],
    left_tangent: Coord2,
    right_tangent: Coord2,
    tolerance: f64,
) -> Result<Vec<Curve>, FitError> {
    let options = FitOptions::with_tolerance(tolerance);

    fit_points(points, Some((left_tangent, right_tangent)), &options, None)
}

///
/// Fits a series of Bezier curves to a set of points, with full control over the fitting options
///
pub fn fit_curve_with_options(points: &[Coord2], options: &FitOptions) -> Result<Vec<Curve>, FitError> {
    fit_points(points, None, options, None)
}

///
/// As for `fit_curve_with_options()`, but calls `progress` every time a candidate curve is scored
///
pub fn fit_curve_with_progress<ProgressFn>(
    points: &[Coord2],
    options: &FitOptions,
    progress: ProgressFn,
) -> Result<Vec<Curve>, FitError>
where
    ProgressFn: Fn(&FitProgress) + Sync,
{
    let progress: &(dyn Fn(&FitProgress) + Sync) = &progress;

    fit_points(points, None, options, Some(progress))
}

///
/// True if the end point of each curve is the start point of the next
///
pub fn curves_are_continuous(curves: &[Curve]) -> bool {
    curves
        .iter()
        .tuple_windows()
        .all(|(previous, next)| previous.end_point() == next.start_point())
}

///
/// Validates the input, chooses the tangents and runs the fitting algorithm
///
fn fit_points(
    points: &[Coord2],
    tangents: Option<(Coord2, Coord2)>,
    options: &FitOptions,
    progress: Option<&(dyn Fn(&FitProgress) + Sync)>,
) -> Result<Vec<Curve>, FitError> {
    check_fit_input(points, options.tolerance)?;

    let explicit_tangents = match tangents {
        Some((left_tangent, right_tangent)) => Some((checked_tangent(left_tangent)?, checked_tangent(right_tangent)?)),
        None => None,
    };

    let points = remove_duplicate_points(points)?;
    let len = points.len();

    let (left_tangent, right_tangent) = match explicit_tangents {
        Some(tangents) => tangents,
        None => {
            // Distinct neighbours always have a direction
            let left_tangent = derive_tangent(points[1], points[0]).ok_or(FitError::DegenerateInput(len))?;
            let right_tangent = derive_tangent(points[len - 2], points[len - 1]).ok_or(FitError::DegenerateInput(len))?;

            (left_tangent, right_tangent)
        }
    };

    let fitter = CurveFitter { options, progress };
    let curves = fitter.fit_range(PointRange {
        points: &points,
        left_tangent,
        right_tangent,
        depth: 0,
    });

    // Points that are in range but far enough apart can still overflow when the control points are generated
    if curves.iter().any(|curve| !curve.is_finite()) {
        return Err(FitError::CoordinateOverflow);
    }

    debug!("Fitted {} points with {} curves", len, curves.len());
    test_assert!(curves_are_continuous(&curves));

    Ok(curves)
}

///
/// Normalizes a caller-supplied tangent
///
fn checked_tangent(tangent: Coord2) -> Result<Coord2, FitError> {
    if !tangent.is_finite() {
        return Err(FitError::InvalidTangent);
    }

    tangent.normalize().ok_or(FitError::InvalidTangent)
}

///
/// A range of points waiting to be fitted, along with the tangents at either end
///
#[derive(Copy, Clone)]
struct PointRange<'p> {
    points: &'p [Coord2],
    left_tangent: Coord2,
    right_tangent: Coord2,

    /// Number of splits that produced this range
    depth: usize,
}

///
/// What happened when trying to fit a single curve to a range of points
///
enum RangeFit<'p> {
    /// The curve is good enough (or can't be improved on)
    Fitted(Curve),

    /// The range needs to be split into these two ranges, which share the point at the split
    Split(PointRange<'p>, PointRange<'p>),
}

///
/// Fits curves to ranges of points, splitting them until each range fits within the tolerance
///
struct CurveFitter<'a> {
    options: &'a FitOptions,
    progress: Option<&'a (dyn Fn(&FitProgress) + Sync)>,
}

impl<'a> CurveFitter<'a> {
    ///
    /// Fits one or more curves to a range of points, returning them in order
    ///
    /// Ranges that need splitting go on a stack rather than being fitted recursively: a stroke that zig-zags
    /// can split once for every point, which would be too deep a recursion for large inputs.
    ///
    fn fit_range<'p>(&self, range: PointRange<'p>) -> Vec<Curve> {
        let mut curves = vec![];
        let mut pending = vec![range];

        while let Some(range) = pending.pop() {
            match self.fit_single(range) {
                RangeFit::Fitted(curve) => curves.push(curve),

                RangeFit::Split(first, second) => {
                    if let Some((first_curves, second_curves)) = self.fit_in_parallel(first, second) {
                        curves.extend(first_curves);
                        curves.extend(second_curves);
                    } else {
                        // The first range is popped next so the curves stay in order
                        pending.push(second);
                        pending.push(first);
                    }
                }
            }
        }

        curves
    }

    ///
    /// Tries to fit a single curve to a range of points, or decides where to split it
    ///
    fn fit_single<'p>(&self, range: PointRange<'p>) -> RangeFit<'p> {
        let PointRange { points, left_tangent, right_tangent, depth } = range;
        test_assert!(points.len() >= 2);

        // Two points have no interior to fit: put the control points a third of the way along the tangents
        if points.len() == 2 {
            let distance = points[0].distance_to(&points[1]) / 3.0;

            return RangeFit::Fitted(Curve::from_points(
                points[0],
                (points[0] + left_tangent * distance, points[1] + right_tangent * distance),
                points[1],
            ));
        }

        let tolerance = self.options.tolerance;

        // Initial fit using the chord lengths as the parameters
        let parameters = chord_length_parameterize(points);
        let mut curve = generate_bezier(points, &parameters, left_tangent, right_tangent);
        let (mut max_error, mut split_point) = self.score(points, &curve, &parameters, depth);

        if max_error < tolerance {
            return RangeFit::Fitted(curve);
        }

        // If the error isn't too large, try improving the parameters
        if max_error < tolerance * tolerance {
            let mut refined_parameters = parameters.clone();
            let mut previous_error = max_error;
            let mut previous_split = split_point;

            for iteration in 0..self.options.max_iterations {
                refined_parameters = reparameterize(&curve, points, &refined_parameters);
                curve = generate_bezier(points, &refined_parameters, left_tangent, right_tangent);

                let (error, split) = self.score(points, &curve, &parameters, depth);
                max_error = error;
                split_point = split;

                if max_error < tolerance {
                    trace!("Refit {} points after {} iterations", points.len(), iteration + 1);
                    return RangeFit::Fitted(curve);
                }

                if split_point == previous_split {
                    let error_change = max_error / previous_error;

                    if error_change > 1.0 - STALL_RATIO && error_change < 1.0 + STALL_RATIO {
                        trace!("Refitting {} points stalled at error {} after {} iterations", points.len(), max_error, iteration + 1);
                        break;
                    }
                }

                previous_error = max_error;
                previous_split = split_point;
            }
        }

        if let Some(max_depth) = self.options.max_depth {
            if depth >= max_depth {
                warn!(
                    "Reached the maximum split depth ({}): accepting a curve with error {} (tolerance {})",
                    max_depth, max_error, tolerance
                );
                return RangeFit::Fitted(curve);
            }
        }

        // Fitting failed: split at the point with the largest error and fit each side separately
        let split_point = split_point.max(1).min(points.len() - 2);

        // Only fails when the split point repeats its neighbour, which duplicate removal rules out
        let center_tangent = center_tangent(points, split_point).unwrap_or(left_tangent);

        debug!("Splitting {} points at index {} (error {}, depth {})", points.len(), split_point, max_error, depth);

        RangeFit::Split(
            PointRange {
                points: &points[..=split_point],
                left_tangent,
                right_tangent: center_tangent,
                depth: depth + 1,
            },
            PointRange {
                points: &points[split_point..],
                left_tangent: -center_tangent,
                right_tangent,
                depth: depth + 1,
            },
        )
    }

    ///
    /// Measures how well a curve fits, and reports the result to the progress callback
    ///
    fn score(&self, points: &[Coord2], curve: &Curve, parameters: &[f64], depth: usize) -> (f64, usize) {
        let (max_error, split_point) = compute_max_error(points, curve, parameters);

        if let Some(progress) = self.progress {
            progress(&FitProgress {
                curve: *curve,
                points,
                parameters,
                max_error,
                split_point,
                depth,
            });
        }

        (max_error, split_point)
    }

    ///
    /// Fits the two halves of a split on separate threads if both of them are large enough to be worth it
    ///
    #[cfg(feature = "multithreading")]
    fn fit_in_parallel(&self, first: PointRange, second: PointRange) -> Option<(Vec<Curve>, Vec<Curve>)> {
        let threshold = self.options.parallel_threshold;

        if first.points.len() >= threshold && second.points.len() >= threshold {
            Some(rayon::join(|| self.fit_range(first), || self.fit_range(second)))
        } else {
            None
        }
    }

    #[cfg(not(feature = "multithreading"))]
    fn fit_in_parallel(&self, _first: PointRange, _second: PointRange) -> Option<(Vec<Curve>, Vec<Curve>)> {
        None
    }
}
