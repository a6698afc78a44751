/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Basic 2D geometry
//!
//! `Coord2` is used both for positions (the points being fitted, the anchors and control points of a curve)
//! and for directions (tangents, derivatives). `Bounds` describes an axis-aligned bounding box.
//!

mod bounds;
mod coord2;

pub use self::bounds::*;
pub use self::coord2::*;
