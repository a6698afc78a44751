/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::*;

///
/// Represents a 2D point or vector
///
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Coord2(pub f64, pub f64);

impl Coord2 {
    ///
    /// The origin/zero vector
    ///
    #[inline]
    pub fn origin() -> Coord2 {
        Coord2(0.0, 0.0)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.1
    }

    ///
    /// Multiplies both components by a scalar
    ///
    #[inline]
    pub fn scale(&self, factor: f64) -> Coord2 {
        Coord2(self.0 * factor, self.1 * factor)
    }

    ///
    /// Dot product of this vector and another
    ///
    #[inline]
    pub fn dot(&self, target: &Coord2) -> f64 {
        self.0 * target.0 + self.1 * target.1
    }

    ///
    /// Euclidean length of this vector
    ///
    /// Doesn't overflow or underflow for components whose squares are outside the range of an `f64`
    ///
    #[inline]
    pub fn length(&self) -> f64 {
        self.0.hypot(self.1)
    }

    ///
    /// Returns a vector of length 1 in the same direction as this one, or `None` for the zero vector
    ///
    #[inline]
    pub fn normalize(&self) -> Option<Coord2> {
        let length = self.length();

        if length == 0.0 {
            None
        } else {
            Some(Coord2(self.0 / length, self.1 / length))
        }
    }

    ///
    /// Adds a scalar to both components
    ///
    #[inline]
    pub fn add_scalar(&self, addition: f64) -> Coord2 {
        Coord2(self.0 + addition, self.1 + addition)
    }

    ///
    /// Squares each component separately
    ///
    #[inline]
    pub fn square_elements(&self) -> Coord2 {
        Coord2(self.0 * self.0, self.1 * self.1)
    }

    #[inline]
    pub fn sum_elements(&self) -> f64 {
        self.0 + self.1
    }

    ///
    /// Distance between this point and another
    ///
    #[inline]
    pub fn distance_to(&self, target: &Coord2) -> f64 {
        (*self - *target).length()
    }

    ///
    /// Square of the distance between this point and another
    ///
    #[inline]
    pub fn squared_distance_to(&self, target: &Coord2) -> f64 {
        (*self - *target).square_elements().sum_elements()
    }

    ///
    /// True if neither component is NaN or infinite
    ///
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }

    ///
    /// Rotates this vector by 90 degrees counter-clockwise
    ///
    #[inline]
    pub fn rotate_90(&self) -> Coord2 {
        Coord2(-self.1, self.0)
    }
}

impl Add<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn add(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn sub(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f64> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn mul(self, rhs: f64) -> Coord2 {
        self.scale(rhs)
    }
}

impl Neg for Coord2 {
    type Output = Coord2;

    #[inline]
    fn neg(self) -> Coord2 {
        Coord2(-self.0, -self.1)
    }
}

impl From<(f64, f64)> for Coord2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Coord2 {
        Coord2(x, y)
    }
}

impl From<[f64; 2]> for Coord2 {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Coord2 {
        Coord2(x, y)
    }
}

impl From<Coord2> for (f64, f64) {
    #[inline]
    fn from(coord: Coord2) -> (f64, f64) {
        (coord.0, coord.1)
    }
}

impl From<Coord2> for [f64; 2] {
    #[inline]
    fn from(coord: Coord2) -> [f64; 2] {
        [coord.0, coord.1]
    }
}
