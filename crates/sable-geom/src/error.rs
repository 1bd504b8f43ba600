// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors produced by the fallible conversions in this crate.
///
/// The geometric operations themselves are total; only parsing and the
/// checked float-to-integer conversion can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// Text did not match the `{X:_ Y:_, Width:_, Height:_}` form.
    #[error("invalid rectangle literal {input:?}: {reason}")]
    Parse {
        /// The rejected input, verbatim.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },
    /// A float component has no truncated `i32` counterpart.
    #[error("component {axis} = {value} is not representable as i32")]
    NotRepresentable {
        /// Which axis failed (`"x"` or `"y"`).
        axis: &'static str,
        /// The offending value.
        value: f32,
    },
}
