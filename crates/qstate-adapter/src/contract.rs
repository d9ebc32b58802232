//! The Adapter Contract: the seam between the reactive query state layer
//! and whatever platform actually owns navigation and location.

use crate::error::AdapterError;
use crate::mode::UpdateMode;
use crate::subscription::{ChangeListener, Subscription};

/// Reads the platform's current location and requests navigation to a new
/// one. `Send + Sync` so a [`crate::MemoryAdapter`] (and, with care, a
/// platform binding) can be shared behind an `Arc` across a
/// `QueryStateFactory`'s call sites.
pub trait Adapter: Send + Sync {
    /// The current path, without a query string.
    fn pathname(&self) -> String;

    /// The current query string, without a leading `?`.
    fn search(&self) -> String;

    /// Move the platform to `url` (a path, optionally followed by
    /// `?query-string`), per `mode`. Fire-and-forget: the effect is only
    /// observable through [`ChangeSource::subscribe`], never synchronously.
    fn navigate(&self, url: &str, mode: UpdateMode) -> Result<(), AdapterError>;
}

/// Notifies listeners when the platform's location changed for a reason
/// outside the caller's own `navigate` calls.
pub trait ChangeSource: Send + Sync {
    /// Register `listener` to be invoked on every change. Dropping (or
    /// explicitly unsubscribing) the returned [`Subscription`] unregisters
    /// it exactly once.
    fn subscribe(&self, listener: ChangeListener) -> Subscription;
}

/// A complete platform binding: something that can be both read/written
/// and watched. Any type implementing both halves gets this for free.
pub trait PlatformAdapter: Adapter + ChangeSource {}

impl<T: Adapter + ChangeSource> PlatformAdapter for T {}
