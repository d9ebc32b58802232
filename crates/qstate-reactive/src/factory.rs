//! A provider of adapter handles, turned into reusable [`QueryState`]
//! entry points.

use std::sync::Arc;

use qstate_adapter::{PlatformAdapter, UpdateMode};
use qstate_codec::QueryObject;

use crate::state::QueryState;

/// Built once per adapter source. `adapter_provider` is called fresh every
/// [`QueryStateFactory::use_query_state`], so it may itself be backed by a
/// reactive subscription in the embedding framework (a browser binding
/// just returns the same `Arc` every time; a test harness might swap
/// adapters between calls).
pub struct QueryStateFactory {
    adapter_provider: Arc<dyn Fn() -> Arc<dyn PlatformAdapter> + Send + Sync>,
}

impl QueryStateFactory {
    pub fn new(
        adapter_provider: impl Fn() -> Arc<dyn PlatformAdapter> + Send + Sync + 'static,
    ) -> Self {
        Self {
            adapter_provider: Arc::new(adapter_provider),
        }
    }

    /// Produce a [`QueryState`] bound to the adapter handle obtained from
    /// the provider right now, `initial_defaults`, and `mode`.
    pub fn use_query_state(
        &self,
        initial_defaults: Option<QueryObject>,
        mode: UpdateMode,
    ) -> QueryState {
        let adapter = (self.adapter_provider)();
        QueryState::new(adapter, initial_defaults.unwrap_or_default(), mode)
    }
}
