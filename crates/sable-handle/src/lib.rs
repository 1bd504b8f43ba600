// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Ownership of native resource handles for Sable bindings.
//!
//! Every native object a binding creates (window, renderer, surface, font) is
//! an opaque handle that must be released exactly once. [`Owned`] holds one
//! such handle: acquisition is scoped, [`Owned::close`] releases it
//! deterministically, and `Drop` releases anything still held on every other
//! exit path (early `?` returns, unwinding) with a leak warning.
//!
//! The `check_*` helpers turn native failure signals (negative status codes,
//! null handles) into [`NativeError`] values carrying the backend's message.
//!
//! # Examples
//! ```
//! use sable_handle::{check_handle, NativeResource, Owned};
//!
//! struct Texture;
//! impl NativeResource for Texture {
//!     type Raw = u32;
//!     const KIND: &'static str = "texture";
//!     fn release(_raw: u32) {}
//! }
//!
//! let tex = Owned::<Texture>::acquire(|| {
//!     check_handle("create_texture", Some(7), || String::new())
//! })?;
//! assert_eq!(tex.raw(), 7);
//! tex.close();
//! # Ok::<(), sable_handle::NativeError>(())
//! ```

mod check;
mod error;
mod owned;

pub use check::{check_arg, check_handle, check_status};
pub use error::NativeError;
pub use owned::{NativeResource, Owned};
