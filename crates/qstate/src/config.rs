//! Ambient configuration for the aggregator crate.
//!
//! No CLI, config file, or filesystem I/O is in scope for this crate, so
//! `Config` is a plain in-memory struct an embedding application builds
//! and passes in, rather than something this crate reads off disk or the
//! environment itself.

use serde::{Deserialize, Serialize};

/// Tuning knobs an embedding application can set before calling
/// [`crate::init_logging`] or building its own [`qstate_reactive::QueryStateFactory`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// The `UpdateMode` used when an application doesn't pick one
    /// explicitly for a given `use_query_state` call.
    pub default_mode: qstate_adapter::UpdateMode,
    /// The `tracing_subscriber::EnvFilter` directive `init_logging` falls
    /// back to when `RUST_LOG` isn't set.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_mode: qstate_adapter::UpdateMode::default(),
            log_filter: "info".to_string(),
        }
    }
}
