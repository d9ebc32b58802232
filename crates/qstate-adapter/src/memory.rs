//! An in-memory [`Adapter`] for tests and non-browser hosts (a
//! server-rendering-only stand-in).

use parking_lot::{Mutex, RwLock};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::contract::{Adapter, ChangeSource};
use crate::error::AdapterError;
use crate::mode::UpdateMode;
use crate::subscription::{ChangeListener, Subscription};
use crate::url::split_url;

struct Location {
    pathname: String,
    search: String,
}

struct Inner {
    location: RwLock<Location>,
    listeners: Mutex<Vec<(u64, ChangeListener)>>,
    next_id: AtomicU64,
    last_mode: RwLock<Option<UpdateMode>>,
}

/// A cheap, cloneable adapter backed by two `String`s in memory. Every
/// clone shares the same underlying state, so it can stand in for a real
/// platform across a whole test without extra plumbing.
#[derive(Clone)]
pub struct MemoryAdapter {
    inner: Arc<Inner>,
}

impl MemoryAdapter {
    /// Build an adapter starting at `pathname` with `search` as its current
    /// query string (no leading `?`).
    pub fn new(pathname: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Inner {
                location: RwLock::new(Location {
                    pathname: pathname.into(),
                    search: search.into(),
                }),
                listeners: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
                last_mode: RwLock::new(None),
            }),
        }
    }

    /// The `UpdateMode` passed to the most recent `navigate` call, if any.
    /// Lets tests assert a write chose `Push` vs. `Replace` without
    /// wiring up a real browser history to observe it.
    pub fn last_mode(&self) -> Option<UpdateMode> {
        *self.inner.last_mode.read()
    }

    /// Build an adapter with an empty path, starting at `search`.
    /// Convenient for codec-focused tests that don't care about `pathname`.
    pub fn with_search(search: impl Into<String>) -> Self {
        Self::new("", search)
    }

    /// Simulate an external change (e.g. the user clicking back) without
    /// going through `navigate`.
    pub fn simulate_external_change(
        &self,
        pathname: impl Into<String>,
        search: impl Into<String>,
    ) {
        {
            let mut location = self.inner.location.write();
            location.pathname = pathname.into();
            location.search = search.into();
        }
        self.notify();
    }

    fn notify(&self) {
        let listeners = self.inner.listeners.lock().clone();
        for (_, listener) in listeners {
            listener();
        }
    }
}

impl Adapter for MemoryAdapter {
    fn pathname(&self) -> String {
        self.inner.location.read().pathname.clone()
    }

    fn search(&self) -> String {
        self.inner.location.read().search.clone()
    }

    fn navigate(&self, url: &str, mode: UpdateMode) -> Result<(), AdapterError> {
        let (pathname, search) = split_url(url);
        {
            let mut location = self.inner.location.write();
            location.pathname = pathname;
            location.search = search;
        }
        *self.inner.last_mode.write() = Some(mode);
        self.notify();
        Ok(())
    }
}

impl ChangeSource for MemoryAdapter {
    fn subscribe(&self, listener: ChangeListener) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst);
        self.inner.listeners.lock().push((id, listener));

        let inner = Arc::clone(&self.inner);
        Subscription::new(move || {
            inner.listeners.lock().retain(|(lid, _)| *lid != id);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;

    #[test]
    fn navigate_updates_location_and_notifies_subscribers() {
        let adapter = MemoryAdapter::new("/items", "a=1");
        let seen = Arc::new(AtomicBool::new(false));
        let seen_clone = Arc::clone(&seen);
        let _sub = adapter.subscribe(Arc::new(move || seen_clone.store(true, Ordering::SeqCst)));

        adapter.navigate("/items?a=2", UpdateMode::Push).unwrap();

        assert_eq!(adapter.pathname(), "/items");
        assert_eq!(adapter.search(), "a=2");
        assert!(seen.load(Ordering::SeqCst));
    }

    #[test]
    fn navigate_records_the_mode_it_was_called_with() {
        let adapter = MemoryAdapter::with_search("");
        assert_eq!(adapter.last_mode(), None);
        adapter.navigate("?a=1", UpdateMode::Replace).unwrap();
        assert_eq!(adapter.last_mode(), Some(UpdateMode::Replace));
    }

    #[test]
    fn navigate_without_a_query_clears_search() {
        let adapter = MemoryAdapter::new("/items", "a=1");
        adapter.navigate("/other", UpdateMode::Replace).unwrap();
        assert_eq!(adapter.pathname(), "/other");
        assert_eq!(adapter.search(), "");
    }

    #[test]
    fn dropping_subscription_stops_notifications() {
        let adapter = MemoryAdapter::with_search("");
        let count = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);
        let sub = adapter.subscribe(Arc::new(move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        }));

        adapter.simulate_external_change("", "a=1");
        assert_eq!(count.load(Ordering::SeqCst), 1);

        drop(sub);
        adapter.simulate_external_change("", "a=2");
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn clones_share_state() {
        let a = MemoryAdapter::with_search("x=1");
        let b = a.clone();
        b.navigate("?x=2", UpdateMode::Replace).unwrap();
        assert_eq!(a.search(), "x=2");
    }
}
