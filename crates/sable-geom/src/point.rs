// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::native::NativePoint;
use crate::vector::Vector;

/// Integer 2D coordinate in screen space.
///
/// Equality is structural. The hash is `x ^ y`, exposed directly through
/// [`Point::hash_code`] so callers that key on it get stable values.
///
/// # Examples
/// ```
/// use sable_geom::Point;
/// let p = Point::new(1, 2);
/// assert_eq!(p, Point::new(1, 2));
/// assert_eq!(p.hash_code(), 3);
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a point from components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate.
    pub const fn x(self) -> i32 {
        self.x
    }

    /// Vertical coordinate.
    pub const fn y(self) -> i32 {
        self.y
    }

    /// Hash value combining both coordinates with XOR.
    pub const fn hash_code(self) -> i32 {
        self.x ^ self.y
    }

    /// Converts to the native point record.
    pub const fn to_native(self) -> NativePoint {
        NativePoint {
            x: self.x,
            y: self.y,
        }
    }

    /// Widens to a float vector.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_vector(self) -> Vector {
        Vector::new(self.x as f32, self.y as f32)
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{X:{} Y:{}}}", self.x, self.y)
    }
}

impl From<NativePoint> for Point {
    fn from(value: NativePoint) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Point> for NativePoint {
    fn from(value: Point) -> Self {
        value.to_native()
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(value: Point) -> Self {
        (value.x, value.y)
    }
}
