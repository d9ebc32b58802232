//! Listener handles and the RAII guard that unregisters them.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A callback invoked when the underlying location changed for reasons
/// outside the caller's own `navigate` calls (back/forward navigation,
/// another tab, a different `QueryState` handle writing through the same
/// adapter).
pub type ChangeListener = Arc<dyn Fn() + Send + Sync>;

/// Unregisters its listener when dropped, or when [`Subscription::unsubscribe`]
/// is called explicitly. Either path is safe to use more than once; an
/// `AtomicBool` gate ensures the underlying closure runs exactly once no
/// matter how many times removal is requested.
pub struct Subscription {
    unsubscribe: Arc<dyn Fn() + Send + Sync>,
    done: Arc<AtomicBool>,
}

impl Subscription {
    pub fn new(unsubscribe: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            unsubscribe: Arc::new(unsubscribe),
            done: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Unregister the listener now. Idempotent: a second call (or a
    /// subsequent drop) is a no-op.
    pub fn unsubscribe(&self) {
        if !self.done.swap(true, Ordering::SeqCst) {
            (self.unsubscribe)();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn unsubscribe_runs_exactly_once_across_drop_and_explicit_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        let sub = Subscription::new(move || {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        sub.unsubscribe();
        sub.unsubscribe();
        drop(sub);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
