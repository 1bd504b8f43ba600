// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// 2x2 linear transform with named row/column entries.
///
/// Stored row-major. [`crate::Vector::transform`] documents how a vector
/// consumes these entries.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    data: [f32; 4],
}

impl Matrix {
    /// The identity transform.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0);

    /// Creates a matrix from its entries, row by row.
    pub const fn new(row1_col1: f32, row1_col2: f32, row2_col1: f32, row2_col2: f32) -> Self {
        Self {
            data: [row1_col1, row1_col2, row2_col1, row2_col2],
        }
    }

    /// Non-uniform scale along the axes.
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy)
    }

    /// Rotation by `angle` radians.
    pub fn rotation(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, -s, s, c)
    }

    /// Entry at row 1, column 1.
    pub const fn row1_col1(&self) -> f32 {
        self.data[0]
    }

    /// Entry at row 1, column 2.
    pub const fn row1_col2(&self) -> f32 {
        self.data[1]
    }

    /// Entry at row 2, column 1.
    pub const fn row2_col1(&self) -> f32 {
        self.data[2]
    }

    /// Entry at row 2, column 2.
    pub const fn row2_col2(&self) -> f32 {
        self.data[3]
    }

    /// Returns the entries in row-major order.
    pub const fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// Matrix product `self * rhs`.
    ///
    /// # Examples
    /// ```
    /// use sable_geom::Matrix;
    /// let s = Matrix::scale(2.0, 3.0);
    /// assert_eq!(Matrix::IDENTITY.multiply(&s), s);
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let [a, b, c, d] = self.data;
        let [e, f, g, h] = rhs.data;
        Self::new(a * e + b * g, a * f + b * h, c * e + d * g, c * f + d * h)
    }

    /// Determinant `r1c1 * r2c2 - r1c2 * r2c1`.
    pub fn determinant(&self) -> f32 {
        let [a, b, c, d] = self.data;
        a * d - b * c
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 4]> for Matrix {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Mul for Matrix {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}
