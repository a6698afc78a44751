/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # curve_fit
//!
//! Fits a sequence of digitized points (a mouse or pen stroke, or a polyline to simplify) with as few cubic
//! Bezier curves as will approximate it to within a tolerance.
//!
//! ```
//! # use curve_fit::*;
//! #
//! let stroke      = vec![Coord2(0.0, 0.0), Coord2(10.0, 8.0), Coord2(20.0, 10.0), Coord2(30.0, 8.0), Coord2(40.0, 0.0)];
//! let curves      = fit_curve(&stroke, 4.0).unwrap();
//!
//! assert!(curves[0].start_point() == Coord2(0.0, 0.0));
//! assert!(curves[curves.len()-1].end_point() == Coord2(40.0, 0.0));
//! ```
//!
//! The tolerance is compared against the *squared* distance between each point and the fitted curve, so a
//! tolerance of `4.0` allows points to be about 2 units away from the curve.
//!
//! The algorithm is the one described by Philip J. Schneider in "An Algorithm for Automatically Fitting
//! Digitized Curves" (Graphics Gems, 1990): points are parameterized by chord length, the two free control
//! points are found by least squares, the parameters are refined by Newton-Raphson iteration and the point
//! range is split at the worst-fitting point when none of this produces a good enough curve.
//!

#[macro_use]
mod test_assert;

mod consts;
mod error;

pub mod bezier;
pub mod fit;
pub mod geo;

pub use self::bezier::Curve;
pub use self::consts::*;
pub use self::error::*;
pub use self::fit::{
    derive_tangent, fit_curve, fit_curve_with_options, fit_curve_with_progress, fit_curve_with_tangents, FitOptions,
    FitProgress,
};
pub use self::geo::*;
