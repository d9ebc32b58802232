//! Reactive Query State
//!
//! Wraps the pure codec and the adapter contract into a memoized,
//! subscribable query object: `values()` is cheap to call repeatedly,
//! `set_values()` always writes on top of the adapter's live search
//! string, and `subscribe()` passes external changes straight through.

mod factory;
mod state;

pub use factory::QueryStateFactory;
pub use state::QueryState;
