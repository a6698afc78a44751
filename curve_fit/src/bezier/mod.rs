/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Evaluating cubic Bezier curves
//!
//! ```
//! # use curve_fit::*;
//! # use curve_fit::bezier::*;
//! #
//! let curve           = Curve::from_points(Coord2(1.0, 2.0), (Coord2(2.0, 0.0), Coord2(3.0, 5.0)), Coord2(4.0, 2.0));
//!
//! let mid_point       = curve.point_at_pos(0.5);
//! let tangent         = curve.derivative_at(0.5);
//! let arc_lengths     = ArcLengthTable::for_curve(&curve);
//! let halfway         = curve.point_at_pos(arc_lengths.t_for_relative_distance(0.5));
//! ```
//!
//! The evaluation functions are closed-form and accept `t` values outside of `0..=1`: the curve is simply
//! extrapolated, which the fitting algorithm relies on when a Newton-Raphson step overshoots.
//!

mod arc_length;
mod basis;
mod curve;
mod derivative;

pub use self::arc_length::*;
pub use self::basis::*;
pub use self::curve::*;
pub use self::derivative::*;
