//! The "no platform location available" adapter.
//!
//! Used whenever there's no `Window` to bind to: a non-`wasm32` target, or
//! a `wasm32` build running outside a browser document (a worker, a test
//! harness). Reads report an empty path and query; writes are silent
//! no-ops. Downstream code never needs a `#[cfg]` gate of its own to
//! accommodate the difference.

use std::sync::Arc;

use qstate_adapter::{Adapter, AdapterError, ChangeListener, ChangeSource, Subscription, UpdateMode};

#[derive(Debug, Default, Clone, Copy)]
pub struct NullAdapter;

impl Adapter for NullAdapter {
    fn pathname(&self) -> String {
        String::new()
    }

    fn search(&self) -> String {
        String::new()
    }

    fn navigate(&self, _url: &str, _mode: UpdateMode) -> Result<(), AdapterError> {
        Ok(())
    }
}

impl ChangeSource for NullAdapter {
    fn subscribe(&self, _listener: ChangeListener) -> Subscription {
        Subscription::new(|| {})
    }
}

pub fn adapter() -> Arc<dyn qstate_adapter::PlatformAdapter> {
    Arc::new(NullAdapter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_are_empty_and_writes_are_silent() {
        let adapter = NullAdapter;
        assert_eq!(adapter.pathname(), "");
        assert_eq!(adapter.search(), "");
        assert!(adapter.navigate("/anywhere?x=1", UpdateMode::Push).is_ok());
        assert_eq!(adapter.search(), "");
    }
}
