//! How a navigation write should land in the platform's history stack.

use serde::{Deserialize, Serialize};

/// Whether an adapter write creates a new history entry or overwrites the
/// current one. Serializes as `"push"`/`"replace"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateMode {
    /// Push a new entry (back button returns to the previous state).
    Push,
    /// Overwrite the current entry in place.
    Replace,
}

impl Default for UpdateMode {
    fn default() -> Self {
        UpdateMode::Push
    }
}
