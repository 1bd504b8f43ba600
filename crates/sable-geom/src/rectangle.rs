// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::str::FromStr;

use tracing::trace;

use crate::error::GeomError;
use crate::native::NativeRect;
use crate::point::Point;
use crate::vector::Vector;

/// Axis-aligned integer box in screen space.
///
/// `(x, y)` is the top-left origin; `width` extends right and `height` extends
/// down. Dimensions are not validated: negative extents are stored as given
/// and every derived quantity is computed from the stored signs. Edge, area,
/// and center arithmetic wraps on `i32` overflow.
///
/// Invariants:
/// - `contains_*` and [`Rectangle::intersects`] are inclusive on edges.
/// - [`Rectangle::intersection_depth`] treats touching boxes as separated.
///
/// # Examples
/// ```
/// use sable_geom::{Point, Rectangle};
/// let a = Rectangle::new(0, 0, 50, 50);
/// let b = Rectangle::new(25, 25, 50, 50);
/// assert_eq!(a.intersect(&b), Rectangle::new(25, 25, 25, 25));
/// assert!(a.contains_point(Point::new(50, 50)));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl Rectangle {
    /// The all-zero rectangle.
    pub const EMPTY: Self = Self::new(0, 0, 0, 0);

    /// Creates a rectangle from origin and extent.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Origin x.
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Origin y.
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Horizontal extent.
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Vertical extent.
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Left edge, `x`.
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// Top edge, `y`.
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Right edge, `x + width`.
    pub const fn right(&self) -> i32 {
        self.x.wrapping_add(self.width)
    }

    /// Bottom edge, `y + height`.
    pub const fn bottom(&self) -> i32 {
        self.y.wrapping_add(self.height)
    }

    /// Top-left corner.
    pub const fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Center point; half extents truncate toward zero.
    pub const fn center(&self) -> Point {
        Point::new(
            self.x.wrapping_add(self.width / 2),
            self.y.wrapping_add(self.height / 2),
        )
    }

    /// `width * height`, signed.
    pub const fn area(&self) -> i32 {
        self.width.wrapping_mul(self.height)
    }

    /// `true` only when all four fields are zero.
    ///
    /// A zero-area rectangle away from the origin is *not* empty.
    pub const fn is_empty(&self) -> bool {
        self.x == 0 && self.y == 0 && self.width == 0 && self.height == 0
    }

    /// Same extent moved to `location`.
    pub const fn with_location(&self, location: Point) -> Self {
        Self::new(location.x(), location.y(), self.width, self.height)
    }

    /// Same extent shifted by `(dx, dy)`.
    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.x.wrapping_add(dx),
            self.y.wrapping_add(dy),
            self.width,
            self.height,
        )
    }

    /// Inclusive point containment.
    pub const fn contains_point(&self, p: Point) -> bool {
        self.left() <= p.x()
            && self.right() >= p.x()
            && self.top() <= p.y()
            && self.bottom() >= p.y()
    }

    /// Inclusive containment of a float coordinate.
    #[allow(clippy::cast_precision_loss)]
    pub fn contains_vector(&self, v: Vector) -> bool {
        self.left() as f32 <= v.x()
            && self.right() as f32 >= v.x()
            && self.top() as f32 <= v.y()
            && self.bottom() as f32 >= v.y()
    }

    /// `true` if `other` lies entirely inside `self`, edges included.
    pub const fn contains_rect(&self, other: &Self) -> bool {
        self.left() <= other.left()
            && self.right() >= other.right()
            && self.top() <= other.top()
            && self.bottom() >= other.bottom()
    }

    /// Returns `true` if the closed boxes overlap on both axes.
    ///
    /// Touching edges count as intersecting.
    pub const fn intersects(&self, other: &Self) -> bool {
        other.left() <= self.right()
            && self.left() <= other.right()
            && other.top() <= self.bottom()
            && self.top() <= other.bottom()
    }

    /// Smallest rectangle covering both inputs.
    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(x, y, right.wrapping_sub(x), bottom.wrapping_sub(y))
    }

    /// Overlapping region of both inputs.
    ///
    /// Returns [`Rectangle::EMPTY`] when the inputs do not intersect. Inputs
    /// that merely touch produce a zero-width or zero-height box positioned at
    /// the contact, which is distinct from `EMPTY`.
    pub fn intersect(&self, other: &Self) -> Self {
        if !self.intersects(other) {
            trace!(a = %self, b = %other, "disjoint rectangles; intersection is empty");
            return Self::EMPTY;
        }
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Self::new(x, y, right.wrapping_sub(x), bottom.wrapping_sub(y))
    }

    /// Signed per-axis penetration depth of `self` into `other`.
    ///
    /// Uses centers and half extents in `f32`. Boxes whose center distance on
    /// either axis is at least the sum of their half extents are separated and
    /// yield [`Vector::ZERO`]; unlike [`Rectangle::intersects`], touching edges
    /// count as separated. Otherwise each axis reports how far `self` must move
    /// to clear `other`: positive when `self`'s center lies on the positive
    /// side, negative otherwise.
    ///
    /// # Examples
    /// ```
    /// use sable_geom::{Rectangle, Vector};
    /// let a = Rectangle::new(0, 0, 10, 10);
    /// let b = Rectangle::new(8, 0, 10, 10);
    /// assert_eq!(a.intersection_depth(&b), Vector::new(-2.0, -10.0));
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn intersection_depth(&self, other: &Self) -> Vector {
        let half_width_a = self.width as f32 / 2.0;
        let half_height_a = self.height as f32 / 2.0;
        let half_width_b = other.width as f32 / 2.0;
        let half_height_b = other.height as f32 / 2.0;

        let center_a = Vector::new(
            self.left() as f32 + half_width_a,
            self.top() as f32 + half_height_a,
        );
        let center_b = Vector::new(
            other.left() as f32 + half_width_b,
            other.top() as f32 + half_height_b,
        );

        let distance = center_a - center_b;
        let min_x = half_width_a + half_width_b;
        let min_y = half_height_a + half_height_b;

        // Strict: touching is not penetrating.
        if distance.x().abs() >= min_x || distance.y().abs() >= min_y {
            trace!(a = %self, b = %other, "separated; no penetration");
            return Vector::ZERO;
        }

        let depth_x = if distance.x() > 0.0 {
            min_x - distance.x()
        } else {
            -min_x - distance.x()
        };
        let depth_y = if distance.y() > 0.0 {
            min_y - distance.y()
        } else {
            -min_y - distance.y()
        };
        Vector::new(depth_x, depth_y)
    }

    /// Converts to the native rectangle record.
    pub const fn to_native(&self) -> NativeRect {
        NativeRect {
            x: self.x,
            y: self.y,
            w: self.width,
            h: self.height,
        }
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{X:{} Y:{}, Width:{}, Height:{}}}",
            self.x, self.y, self.width, self.height
        )
    }
}

impl FromStr for Rectangle {
    type Err = GeomError;

    /// Parses the [`Display`](fmt::Display) form, e.g. `{X:1 Y:2, Width:3, Height:4}`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |reason| GeomError::Parse {
            input: s.to_owned(),
            reason,
        };
        let body = s
            .trim()
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or_else(|| fail("expected braces"))?;

        let mut fields = body
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|tok| !tok.is_empty());
        let mut values = [0i32; 4];
        for (slot, label) in values.iter_mut().zip(["X", "Y", "Width", "Height"]) {
            let tok = fields.next().ok_or_else(|| fail("missing field"))?;
            let (name, value) = tok
                .split_once(':')
                .ok_or_else(|| fail("expected `name:value`"))?;
            if name != label {
                return Err(fail("unexpected field name"));
            }
            *slot = value.parse().map_err(|_| fail("field is not an i32"))?;
        }
        if fields.next().is_some() {
            return Err(fail("trailing input"));
        }
        let [x, y, width, height] = values;
        Ok(Self::new(x, y, width, height))
    }
}

impl From<NativeRect> for Rectangle {
    fn from(value: NativeRect) -> Self {
        Self::new(value.x, value.y, value.w, value.h)
    }
}

impl From<Rectangle> for NativeRect {
    fn from(value: Rectangle) -> Self {
        value.to_native()
    }
}
