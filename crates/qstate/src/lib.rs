//! qstate
//!
//! Synchronizes a UI component's derived state with a URL's query string,
//! so that state is shareable, bookmarkable, and survives navigation.
//!
//! The crate is split leaf-first:
//! - [`qstate_codec`]: pure `decode`/`encode` between a query string and a
//!   flat key-value [`qstate_codec::QueryObject`].
//! - [`qstate_adapter`]: the `Adapter`/`ChangeSource` contract any
//!   platform binding implements, plus [`qstate_adapter::MemoryAdapter`] as
//!   a reference/test/server-rendering stand-in.
//! - [`qstate_reactive`]: [`qstate_reactive::QueryStateFactory`], the
//!   memoized read model and write model built on the two pieces above.
//! - [`qstate_dom`]: the one shipped platform binding, to a real
//!   browser's `window.history`/`window.location`.
//!
//! This crate re-exports all four, owns the top-level [`Error`]/[`Config`]
//! types, initializes logging, and exposes [`browser_query_state`] as the
//! default, ready-to-use entry point.

mod config;
mod error;

pub use config::Config;
pub use error::Error;

pub use qstate_adapter::{Adapter, AdapterError, ChangeListener, ChangeSource, MemoryAdapter, PlatformAdapter, Subscription, UpdateMode};
pub use qstate_codec::{decode, encode, patch, Patch, PatchValue, QueryObject, QueryValue};
pub use qstate_dom::{browser_adapter, NullAdapter};
pub use qstate_reactive::{QueryState, QueryStateFactory};

pub type Result<T> = std::result::Result<T, Error>;

/// A ready-made [`QueryStateFactory`] wired to [`qstate_dom::browser_adapter`].
/// The default usable surface for a `wasm32` application: every call to
/// `use_query_state` rebinds to whatever `browser_adapter()` currently
/// resolves to, so a build running outside a `Window` degrades to
/// [`NullAdapter`] rather than failing to construct.
pub fn browser_query_state() -> QueryStateFactory {
    tracing::debug!("binding query state to the browser adapter");
    QueryStateFactory::new(|| qstate_dom::browser_adapter())
}

/// Initialize `tracing` from `config.log_filter` (or `RUST_LOG` if set).
pub fn init_logging(config: &Config) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.clone()));

    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
