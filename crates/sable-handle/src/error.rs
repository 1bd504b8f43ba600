// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Failures surfaced by native calls and their argument checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NativeError {
    /// The backend reported failure; `message` is its last error string.
    #[error("{call} failed: {message}")]
    CallFailed {
        /// Name of the native entry point.
        call: &'static str,
        /// Backend-provided diagnostic.
        message: String,
    },
    /// An argument was rejected before reaching the backend.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Parameter name.
        name: &'static str,
        /// Why it was rejected.
        reason: &'static str,
    },
}
