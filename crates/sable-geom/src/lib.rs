// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Geometry primitives for Sable.

This crate provides:
- Integer screen coordinates (`Point`).
- Float coordinates and directions (`Vector`) with a 2x2 linear `Matrix`.
- Axis-aligned integer boxes (`Rectangle`) with containment, intersection,
  union, and penetration depth.
- Plain `#[repr(C)]` records (`NativeRect`, `NativePoint`) in the field order
  native draw calls expect.

Design notes:
- Every type is an immutable `Copy` value; operations return new values.
- All operations are total. Negative widths and heights are representable and
  propagate through the math unchanged; integer edge arithmetic wraps.
- Screen-space convention: increasing `y` points down.
- `Rectangle::intersects` and the `contains_*` family are inclusive on edges,
  while `Rectangle::intersection_depth` uses a strict separation test. The two
  policies are intentionally distinct.
"]

mod error;
mod matrix;
mod native;
mod point;
mod rectangle;
mod vector;

pub use error::GeomError;
pub use matrix::Matrix;
pub use native::{NativePoint, NativeRect};
pub use point::Point;
pub use rectangle::Rectangle;
pub use vector::Vector;
