/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coord2::*;

///
/// An axis-aligned bounding box
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Bounds {
    min: Coord2,
    max: Coord2,
}

impl Bounds {
    ///
    /// Creates a bounding box from two corners (in any order)
    ///
    pub fn from_min_max(p1: Coord2, p2: Coord2) -> Bounds {
        Bounds {
            min: Coord2(p1.0.min(p2.0), p1.1.min(p2.1)),
            max: Coord2(p1.0.max(p2.0), p1.1.max(p2.1)),
        }
    }

    ///
    /// Creates the smallest bounding box that encloses all of the specified points
    ///
    /// An empty set of points produces an empty box at the origin.
    ///
    pub fn bounds_for_points<Points: IntoIterator<Item = Coord2>>(points: Points) -> Bounds {
        let mut points = points.into_iter();

        let first = match points.next() {
            Some(first) => first,
            None => return Bounds::from_min_max(Coord2::origin(), Coord2::origin()),
        };

        points.fold(Bounds::from_min_max(first, first), |bounds, point| bounds.union_point(point))
    }

    #[inline]
    pub fn min(&self) -> Coord2 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Coord2 {
        self.max
    }

    ///
    /// Expands this box so it contains the specified point
    ///
    pub fn union_point(&self, point: Coord2) -> Bounds {
        Bounds {
            min: Coord2(self.min.0.min(point.0), self.min.1.min(point.1)),
            max: Coord2(self.max.0.max(point.0), self.max.1.max(point.1)),
        }
    }

    ///
    /// Length of the diagonal of this box
    ///
    pub fn diagonal(&self) -> f64 {
        self.min.distance_to(&self.max)
    }
}
