// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use tracing::{debug, warn};

use crate::error::NativeError;

/// A kind of native resource and how to free it.
pub trait NativeResource {
    /// Raw handle as the backend hands it out.
    type Raw: Copy + fmt::Debug;

    /// Short label used in diagnostics (`"window"`, `"surface"`, ...).
    const KIND: &'static str;

    /// Frees `raw`. Called exactly once per owned handle.
    fn release(raw: Self::Raw);
}

/// Sole owner of one native handle.
///
/// The handle is released by [`Owned::close`] or, failing that, when the
/// owner is dropped. [`Owned::into_raw`] transfers ownership out without
/// releasing.
pub struct Owned<R: NativeResource> {
    raw: R::Raw,
    live: bool,
}

impl<R: NativeResource> Owned<R> {
    /// Takes ownership of an already-created handle.
    pub const fn from_raw(raw: R::Raw) -> Self {
        Self { raw, live: true }
    }

    /// Runs a fallible native constructor and owns its result.
    ///
    /// # Errors
    /// Propagates the constructor's error; nothing is owned in that case.
    pub fn acquire<F>(create: F) -> Result<Self, NativeError>
    where
        F: FnOnce() -> Result<R::Raw, NativeError>,
    {
        let raw = create()?;
        debug!(kind = R::KIND, ?raw, "acquired native handle");
        Ok(Self::from_raw(raw))
    }

    /// The raw handle, for passing to native calls.
    pub fn raw(&self) -> R::Raw {
        self.raw
    }

    /// Releases the handle now.
    pub fn close(mut self) {
        self.release();
    }

    /// Gives up ownership without releasing; the caller must free `raw`.
    pub fn into_raw(mut self) -> R::Raw {
        self.live = false;
        self.raw
    }

    fn release(&mut self) {
        if core::mem::replace(&mut self.live, false) {
            R::release(self.raw);
            debug!(kind = R::KIND, raw = ?self.raw, "released native handle");
        }
    }
}

impl<R: NativeResource> Drop for Owned<R> {
    fn drop(&mut self) {
        if self.live {
            warn!(kind = R::KIND, raw = ?self.raw, "native handle dropped without close");
            self.release();
        }
    }
}

impl<R: NativeResource> fmt::Debug for Owned<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Owned")
            .field("kind", &R::KIND)
            .field("raw", &self.raw)
            .field("live", &self.live)
            .finish()
    }
}
