// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::hash::{Hash, Hasher};
use core::ops::{Add, Sub};

use crate::error::GeomError;
use crate::matrix::Matrix;
use crate::native::NativePoint;
use crate::point::Point;

/// Exclusive upper bound of `i32` as an exact `f32` (2^31).
const I32_UPPER: f32 = 2_147_483_648.0;

/// Floating-point 2D coordinate or direction.
///
/// * Equality is exact component comparison; there is no epsilon.
/// * Arithmetic uses `f32` and always yields a new value.
/// * Conversions to integer coordinates truncate toward zero.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    x: f32,
    y: f32,
}

impl Vector {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// `(1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Horizontal component.
    pub const fn x(self) -> f32 {
        self.x
    }

    /// Vertical component.
    pub const fn y(self) -> f32 {
        self.y
    }

    /// Applies the 2x2 linear map `m`.
    ///
    /// The mapping is
    /// `x' = x * r1c1 + y * r2c1` and `y' = x * r2c1 + y * r2c2`.
    /// `row1_col2` does not participate and `row2_col1` feeds both outputs, so
    /// this is *not* the textbook matrix-vector product. Existing geometry
    /// depends on these exact results.
    ///
    /// # Examples
    /// ```
    /// use sable_geom::{Matrix, Vector};
    /// let m = Matrix::new(2.0, 100.0, 3.0, 4.0);
    /// // row1_col2 (100.0) is ignored.
    /// assert_eq!(Vector::new(1.0, 1.0).transform(&m), Vector::new(5.0, 7.0));
    /// ```
    pub fn transform(self, m: &Matrix) -> Self {
        Self::new(
            self.x * m.row1_col1() + self.y * m.row2_col1(),
            self.x * m.row2_col1() + self.y * m.row2_col2(),
        )
    }

    /// Hash value `trunc(y * 5 + (x * 31) mod i32::MAX)`.
    ///
    /// Equal vectors always produce equal values (`0.0` and `-0.0` agree).
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn hash_code(self) -> i32 {
        (self.y * 5.0 + (self.x * 31.0) % (i32::MAX as f32)) as i32
    }

    /// Truncates both components toward zero.
    ///
    /// Out-of-range values saturate at the `i32` bounds and NaN maps to `0`.
    /// Use [`Vector::try_to_point`] to reject those instead.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_point(self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }

    /// Checked counterpart of [`Vector::to_point`].
    ///
    /// # Errors
    /// Returns [`GeomError::NotRepresentable`] if a component is not finite or
    /// its truncated value lies outside the `i32` range.
    pub fn try_to_point(self) -> Result<Point, GeomError> {
        let x = checked_trunc("x", self.x)?;
        let y = checked_trunc("y", self.y)?;
        Ok(Point::new(x, y))
    }

    /// Truncating conversion to the native point record.
    pub fn to_native(self) -> NativePoint {
        self.to_point().to_native()
    }
}

#[allow(clippy::cast_possible_truncation)]
fn checked_trunc(axis: &'static str, value: f32) -> Result<i32, GeomError> {
    let t = value.trunc();
    if !t.is_finite() || t < -I32_UPPER || t >= I32_UPPER {
        return Err(GeomError::NotRepresentable { axis, value });
    }
    Ok(t as i32)
}

impl Add for Vector {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl From<(f32, f32)> for Vector {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector> for (f32, f32) {
    fn from(value: Vector) -> Self {
        (value.x, value.y)
    }
}

impl From<Point> for Vector {
    fn from(value: Point) -> Self {
        value.to_vector()
    }
}
