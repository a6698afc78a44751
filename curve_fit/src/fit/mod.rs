/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Fitting Bezier curves to points
//!
//! ```
//! # use curve_fit::*;
//! #
//! let points          = (0..50).map(|x| Coord2(x as f64, (x as f64 / 8.0).sin() * 10.0)).collect::<Vec<_>>();
//!
//! let curves          = fit_curve(&points, 0.5).unwrap();
//! let with_tangents   = fit_curve_with_tangents(&points, Coord2(1.0, 0.0), Coord2(-1.0, 0.0), 0.5).unwrap();
//! let tuned           = fit_curve_with_options(&points, &FitOptions::with_tolerance(0.5).with_max_iterations(4)).unwrap();
//! ```
//!
//! `fit_curve()` derives the tangents at either end of the points from the first and last pair of points.
//! `fit_curve_with_tangents()` lets the caller choose them instead, which is useful when several fitted
//! sections need to join smoothly.
//!
//! The individual steps of the algorithm (`chord_length_parameterize()`, `generate_bezier()`,
//! `compute_max_error()`, `reparameterize()`) are public so they can be used separately.
//!

mod fit_curve;
mod generate;
mod max_error;
mod nearest_point;
mod options;
mod parameterize;
mod prepare;
mod progress;
mod tangent;

pub use self::fit_curve::*;
pub use self::generate::*;
pub use self::max_error::*;
pub use self::nearest_point::*;
pub use self::options::*;
pub use self::parameterize::*;
pub use self::prepare::*;
pub use self::progress::*;
pub use self::tangent::*;
