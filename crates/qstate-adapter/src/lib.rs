//! Adapter Contract
//!
//! Defines the trait boundary between the reactive query state layer and
//! whatever actually owns navigation: a browser `Window`, a router, or (in
//! tests) nothing at all. `Adapter`/`ChangeSource` are `Send + Sync` so a
//! `QueryStateFactory` (`qstate-reactive`) can hold an `Arc<dyn
//! PlatformAdapter>` regardless of which concrete binding sits behind it.

mod contract;
mod error;
mod memory;
mod mode;
mod subscription;
mod url;

pub use contract::{Adapter, ChangeSource, PlatformAdapter};
pub use error::AdapterError;
pub use memory::MemoryAdapter;
pub use mode::UpdateMode;
pub use subscription::{ChangeListener, Subscription};
pub use url::split_url;

pub type Result<T> = std::result::Result<T, AdapterError>;
