// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! C-layout records handed to the rendering backend.
//!
//! Field order and widths match the native `{x, y, w, h}` rectangle and
//! `{x, y}` point structures so they can be passed by reference across FFI.

/// Native rectangle record: origin plus extent, all `i32`.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NativeRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width; may be negative.
    pub w: i32,
    /// Height; may be negative.
    pub h: i32,
}

/// Native point record.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NativePoint {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate (down is positive).
    pub y: i32,
}
