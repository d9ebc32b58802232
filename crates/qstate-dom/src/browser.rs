//! The real browser binding: `window.location` and `window.history`, with
//! self-signaling custom events so same-tab `pushState`/`replaceState`
//! calls notify subscribers the same way a genuine `popstate` would.
//!
//! A browser's own `popstate` event fires only for back/forward
//! navigation, never for `history.pushState`/`replaceState` calls made by
//! the page itself, so a caller that writes through this adapter and
//! then reads it back from another `QueryState` handle would otherwise
//! see nothing happen. Dispatching `qstate-pushstate`/`qstate-replacestate`
//! right after each write closes that gap.

use std::cell::Cell;
use std::sync::Arc;

use parking_lot::Mutex;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit, Window};

use qstate_adapter::{
    Adapter, AdapterError, ChangeListener, ChangeSource, Subscription, UpdateMode,
};

const PUSH_EVENT: &str = "qstate-pushstate";
const REPLACE_EVENT: &str = "qstate-replacestate";
const POPSTATE_EVENT: &str = "popstate";

/// An [`Adapter`] bound to a real `Window`. One `dispatch`-bridging
/// `Closure` is installed for the lifetime of the adapter; `subscribe`
/// just adds and removes entries in an in-memory registry behind it.
///
/// # Safety
/// This module only ever compiles for `wasm32`, which runs on a single
/// thread without the `atomics` target feature; `Window`/`JsValue` handles
/// never actually cross a thread boundary here even though `web_sys`
/// doesn't mark them `Send`/`Sync` itself.
pub struct BrowserAdapter {
    window: Window,
    listeners: Arc<Mutex<Vec<(u64, ChangeListener)>>>,
    next_id: Cell<u64>,
    dispatch_closure: Closure<dyn FnMut(web_sys::Event)>,
}

unsafe impl Send for BrowserAdapter {}
unsafe impl Sync for BrowserAdapter {}

impl BrowserAdapter {
    /// `None` when there's no `Window` in this context (not running inside
    /// a browser document), not a failure of the browser API itself.
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;

        let listeners: Arc<Mutex<Vec<(u64, ChangeListener)>>> = Arc::new(Mutex::new(Vec::new()));
        let listeners_for_closure = Arc::clone(&listeners);
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            for (_, listener) in listeners_for_closure.lock().iter() {
                listener();
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        for event_name in [POPSTATE_EVENT, PUSH_EVENT, REPLACE_EVENT] {
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
        }

        Some(Self {
            window,
            listeners,
            next_id: Cell::new(0),
            dispatch_closure: closure,
        })
    }

    fn dispatch_self_signal(&self, event_name: &str) {
        let init = CustomEventInit::new();
        if let Ok(event) = CustomEvent::new_with_event_init_dict(event_name, &init) {
            let _ = self.window.dispatch_event(&event);
        }
    }
}

impl Drop for BrowserAdapter {
    /// Mirror-image of [`BrowserAdapter::new`]'s three
    /// `add_event_listener_with_callback` calls, so every DOM-level
    /// listener this adapter installs has exactly one matching
    /// `remove_event_listener_with_callback`, the same idempotent-teardown
    /// guarantee `Subscription` gives the in-memory listener registry.
    fn drop(&mut self) {
        for event_name in [POPSTATE_EVENT, PUSH_EVENT, REPLACE_EVENT] {
            let _ = self.window.remove_event_listener_with_callback(
                event_name,
                self.dispatch_closure.as_ref().unchecked_ref(),
            );
        }
    }
}

impl Adapter for BrowserAdapter {
    fn pathname(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn search(&self) -> String {
        let raw = self.window.location().search().unwrap_or_default();
        raw.strip_prefix('?').unwrap_or(&raw).to_string()
    }

    fn navigate(&self, url: &str, mode: UpdateMode) -> Result<(), AdapterError> {
        let history = self
            .window
            .history()
            .map_err(|_| AdapterError::NavigationFailed("window.history unavailable".into()))?;

        let outcome = match mode {
            UpdateMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(url)),
            UpdateMode::Replace => history.replace_state_with_url(&JsValue::NULL, "", Some(url)),
        };
        outcome
            .map_err(|_| AdapterError::NavigationFailed(format!("failed to navigate to {url}")))?;

        self.dispatch_self_signal(match mode {
            UpdateMode::Push => PUSH_EVENT,
            UpdateMode::Replace => REPLACE_EVENT,
        });
        tracing::debug!(%url, ?mode, "navigated");
        Ok(())
    }
}

impl ChangeSource for BrowserAdapter {
    fn subscribe(&self, listener: ChangeListener) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.lock().push((id, listener));

        let listeners = Arc::clone(&self.listeners);
        Subscription::new(move || {
            listeners.lock().retain(|(lid, _)| *lid != id);
        })
    }
}
