/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::basis::*;
use super::derivative::*;
use crate::geo::*;

///
/// A cubic Bezier curve
///
/// The start and end points are the anchors of the curve: when a curve is produced by fitting they are always
/// points from the input. The two control points determine the shape in between.
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Curve {
    pub start_point: Coord2,
    pub end_point: Coord2,
    pub control_points: (Coord2, Coord2),
}

impl Curve {
    ///
    /// Creates a curve from its start point, control points and end point
    ///
    #[inline]
    pub fn from_points(start_point: Coord2, (control_point1, control_point2): (Coord2, Coord2), end_point: Coord2) -> Curve {
        Curve {
            start_point,
            end_point,
            control_points: (control_point1, control_point2),
        }
    }

    #[inline]
    pub fn start_point(&self) -> Coord2 {
        self.start_point
    }

    #[inline]
    pub fn end_point(&self) -> Coord2 {
        self.end_point
    }

    #[inline]
    pub fn control_points(&self) -> (Coord2, Coord2) {
        self.control_points
    }

    ///
    /// The four points of this curve, in the order P0, P1, P2, P3
    ///
    #[inline]
    pub fn to_points(&self) -> [Coord2; 4] {
        [self.start_point, self.control_points.0, self.control_points.1, self.end_point]
    }

    ///
    /// Returns the point at the specified `t` value along this curve
    ///
    #[inline]
    pub fn point_at_pos(&self, t: f64) -> Coord2 {
        let (cp1, cp2) = self.control_points;

        basis(t, self.start_point, cp1, cp2, self.end_point)
    }

    ///
    /// Returns the first derivative (the unnormalized tangent) of this curve at `t`
    ///
    #[inline]
    pub fn derivative_at(&self, t: f64) -> Coord2 {
        let (cp1, cp2) = self.control_points;
        let (d1, d2, d3) = derivative4(self.start_point, cp1, cp2, self.end_point);

        basis3(t, d1, d2, d3)
    }

    ///
    /// Returns the second derivative of this curve at `t`
    ///
    #[inline]
    pub fn second_derivative_at(&self, t: f64) -> Coord2 {
        let (cp1, cp2) = self.control_points;
        let (d1, d2, d3) = derivative4(self.start_point, cp1, cp2, self.end_point);
        let (dd1, dd2) = derivative3(d1, d2, d3);

        basis2(t, dd1, dd2)
    }

    ///
    /// True if none of the points defining this curve have a NaN or infinite coordinate
    ///
    pub fn is_finite(&self) -> bool {
        self.to_points().iter().all(|point| point.is_finite())
    }
}

impl From<Curve> for [Coord2; 4] {
    #[inline]
    fn from(curve: Curve) -> [Coord2; 4] {
        curve.to_points()
    }
}

impl From<Curve> for [[f64; 2]; 4] {
    fn from(curve: Curve) -> [[f64; 2]; 4] {
        let [p0, p1, p2, p3] = curve.to_points();

        [p0.into(), p1.into(), p2.into(), p3.into()]
    }
}

impl From<[Coord2; 4]> for Curve {
    #[inline]
    fn from([p0, p1, p2, p3]: [Coord2; 4]) -> Curve {
        Curve::from_points(p0, (p1, p2), p3)
    }
}
