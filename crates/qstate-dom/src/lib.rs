//! Browser Platform Adapter
//!
//! Binds the Adapter Contract to a real browser's `window.location` and
//! `window.history` on `wasm32` targets. Every other target (and a
//! `wasm32` build running outside a document) gets [`NullAdapter`]
//! instead: reads report an empty path and query, writes are no-ops.
//! Nothing downstream needs a `#[cfg]` gate to accommodate the difference.

#[cfg(target_arch = "wasm32")]
mod browser;
mod null;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserAdapter;
pub use null::NullAdapter;

use std::sync::Arc;

use qstate_adapter::PlatformAdapter;

/// Construct the platform adapter for the current build target: a real
/// [`BrowserAdapter`] on `wasm32` when a `Window` is available, otherwise
/// [`NullAdapter`].
pub fn browser_adapter() -> Arc<dyn PlatformAdapter> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(adapter) = browser::BrowserAdapter::new() {
            tracing::debug!("bound to window.history/window.location");
            return Arc::new(adapter);
        }
    }
    tracing::debug!("no Window in this context, falling back to the null adapter");
    null::adapter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use qstate_adapter::Adapter;

    #[test]
    fn off_the_browser_falls_back_to_the_null_adapter() {
        let adapter = browser_adapter();
        assert_eq!(adapter.pathname(), "");
        assert_eq!(adapter.search(), "");
    }
}
