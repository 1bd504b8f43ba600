// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Translation of native failure signals into [`NativeError`].
//!
//! `last_error` is only invoked on failure so the backend's error string is
//! read at most once, immediately after the failing call.

use tracing::debug;

use crate::error::NativeError;

/// Maps a status-returning native call to a `Result`.
///
/// Negative codes are failures; anything else is returned unchanged.
///
/// # Errors
/// Returns [`NativeError::CallFailed`] when `code < 0`.
pub fn check_status<F>(call: &'static str, code: i32, last_error: F) -> Result<i32, NativeError>
where
    F: FnOnce() -> String,
{
    if code < 0 {
        let message = last_error();
        debug!(call, code, %message, "native call failed");
        return Err(NativeError::CallFailed { call, message });
    }
    Ok(code)
}

/// Maps a handle-returning native call to a `Result`.
///
/// Callers pass `None` for a null handle, e.g. via `NonNull::new(ptr)`.
///
/// # Errors
/// Returns [`NativeError::CallFailed`] when `raw` is `None`.
pub fn check_handle<T, F>(call: &'static str, raw: Option<T>, last_error: F) -> Result<T, NativeError>
where
    F: FnOnce() -> String,
{
    raw.ok_or_else(|| {
        let message = last_error();
        debug!(call, %message, "native call returned a null handle");
        NativeError::CallFailed { call, message }
    })
}

/// Rejects an argument before it reaches the backend.
///
/// # Errors
/// Returns [`NativeError::InvalidArgument`] when `ok` is false.
pub fn check_arg(name: &'static str, ok: bool, reason: &'static str) -> Result<(), NativeError> {
    if ok {
        Ok(())
    } else {
        Err(NativeError::InvalidArgument { name, reason })
    }
}
