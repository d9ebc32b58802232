//! Adapter error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("no platform adapter is available in this environment")]
    NoPlatformAdapter,

    #[error("navigation failed: {0}")]
    NavigationFailed(String),
}
