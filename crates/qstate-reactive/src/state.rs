//! A single subscribable, memoized view over one adapter's query string.

use std::sync::Arc;

use parking_lot::Mutex;

use qstate_adapter::{
    Adapter, ChangeListener, ChangeSource, PlatformAdapter, Result, Subscription, UpdateMode,
};
use qstate_codec::{decode, encode, Patch, QueryObject};

struct MemoSlot {
    search: String,
    value: QueryObject,
}

/// A query object backed by a live adapter, with a single-slot read cache
/// and last-write-wins writes. `mode` is fixed for the lifetime of the
/// handle; callers who need a different mode for one write build a second
/// handle via [`crate::QueryStateFactory::use_query_state`] rather than
/// passing a mode into `set_values` itself.
pub struct QueryState {
    adapter: Arc<dyn PlatformAdapter>,
    defaults: QueryObject,
    mode: UpdateMode,
    memo: Mutex<Option<MemoSlot>>,
}

impl QueryState {
    pub(crate) fn new(adapter: Arc<dyn PlatformAdapter>, defaults: QueryObject, mode: UpdateMode) -> Self {
        Self {
            adapter,
            defaults,
            mode,
            memo: Mutex::new(None),
        }
    }

    /// The current decoded query object.
    ///
    /// Memoized on the raw search string: two calls between navigations
    /// return the same cached [`QueryObject`] without re-decoding. The
    /// cache is keyed on the adapter's search string rather than time, so
    /// it is automatically invalidated by any navigation, including ones
    /// made outside this [`QueryState`].
    pub fn values(&self) -> QueryObject {
        let search = self.adapter.search();
        {
            let memo = self.memo.lock();
            if let Some(slot) = memo.as_ref() {
                if slot.search == search {
                    return slot.value.clone();
                }
            }
        }

        let value = decode(&search, Some(&self.defaults));
        tracing::debug!(query = ?value, "decoded query state");
        *self.memo.lock() = Some(MemoSlot {
            search,
            value: value.clone(),
        });
        value
    }

    /// Apply `patch` on top of the adapter's *current* path and search
    /// string and write the result back.
    ///
    /// This always reads the adapter directly rather than the memo slot,
    /// so a write that races an external change (e.g. a back-button
    /// navigation firing between two calls) applies on top of whatever
    /// the platform says is current right now: last write wins, no
    /// attempt to detect or reject the race.
    pub fn set_values(&self, patch: &Patch) -> Result<()> {
        let pathname = self.adapter.pathname();
        let search = self.adapter.search();
        let new_query = encode(&search, patch);
        let url = if new_query.is_empty() {
            pathname
        } else {
            format!("{pathname}?{new_query}")
        };
        tracing::debug!(from = %search, to = %url, "applying query patch");
        self.adapter.navigate(&url, self.mode)
    }

    /// Subscribe to changes originating outside this handle's own writes.
    pub fn subscribe(&self, listener: ChangeListener) -> Subscription {
        self.adapter.subscribe(listener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qstate_adapter::{Adapter, MemoryAdapter};
    use qstate_codec::{patch, QueryValue};
    use std::sync::atomic::{AtomicBool, Ordering};

    fn state_with(pathname: &str, search: &str) -> (MemoryAdapter, QueryState) {
        let adapter = MemoryAdapter::new(pathname, search);
        let state = QueryState::new(Arc::new(adapter.clone()), QueryObject::new(), UpdateMode::Push);
        (adapter, state)
    }

    #[test]
    fn values_reflects_adapter_search() {
        let (_adapter, state) = state_with("/items", "a=1&b=text");
        let values = state.values();
        assert_eq!(values.get("a"), Some(&QueryValue::Number(1.0)));
        assert_eq!(values.get("b"), Some(&QueryValue::Text("text".to_string())));
    }

    #[test]
    fn set_values_writes_through_the_adapter() {
        let (adapter, state) = state_with("/items", "a=1");

        state.set_values(&patch! { "a" => 2i64 }).unwrap();

        assert_eq!(adapter.pathname(), "/items");
        assert_eq!(adapter.search(), "a=2");
        assert_eq!(state.values().get("a"), Some(&QueryValue::Number(2.0)));
    }

    #[test]
    fn set_values_drops_the_query_string_entirely_when_it_empties_out() {
        let (adapter, state) = state_with("/items", "price=12");

        state.set_values(&patch! { "price" => "" }).unwrap();

        assert_eq!(adapter.pathname(), "/items");
        assert_eq!(adapter.search(), "");
    }

    #[test]
    fn external_change_invalidates_the_memo() {
        let (adapter, state) = state_with("/items", "a=1");

        assert_eq!(state.values().get("a"), Some(&QueryValue::Number(1.0)));
        adapter.simulate_external_change("/items", "a=2");
        assert_eq!(state.values().get("a"), Some(&QueryValue::Number(2.0)));
    }

    #[test]
    fn set_values_always_reads_fresh_not_the_memo() {
        let (adapter, state) = state_with("/items", "a=1&b=1");

        // Warm the memo on the original search.
        let _ = state.values();
        // An external change happens that the memo doesn't know about yet.
        adapter.simulate_external_change("/items", "a=1&b=2");

        state.set_values(&patch! { "a" => 9i64 }).unwrap();

        // The write landed on top of the latest state, not the stale memo.
        assert_eq!(adapter.search(), "a=9&b=2");
    }

    #[test]
    fn end_to_end_patch_updates_one_key_and_leaves_the_rest() {
        let (adapter, state) = state_with("/items", "category=books&price=12");

        state.set_values(&patch! { "price" => 15i64 }).unwrap();

        assert_eq!(adapter.pathname(), "/items");
        assert_eq!(adapter.search(), "category=books&price=15");
        assert_eq!(adapter.last_mode(), Some(UpdateMode::Push));
    }

    #[test]
    fn replace_mode_writes_through_without_changing_the_patch_semantics() {
        let adapter = MemoryAdapter::new("/items", "category=books&price=12");
        let state = QueryState::new(Arc::new(adapter.clone()), QueryObject::new(), UpdateMode::Replace);

        state.set_values(&patch! { "price" => 15i64 }).unwrap();

        assert_eq!(adapter.search(), "category=books&price=15");
        assert_eq!(adapter.last_mode(), Some(UpdateMode::Replace));
    }

    #[test]
    fn subscribe_receives_external_changes() {
        let (adapter, state) = state_with("", "");
        let fired = Arc::new(AtomicBool::new(false));
        let fired_clone = Arc::clone(&fired);
        let _sub = state.subscribe(Arc::new(move || fired_clone.store(true, Ordering::SeqCst)));

        adapter.simulate_external_change("", "a=1");
        assert!(fired.load(Ordering::SeqCst));
    }
}
