//! Query Codec
//!
//! Pure functions mapping a URL query string to a flat key-value object and
//! back. Neither direction touches any navigation or platform primitive;
//! see `qstate-adapter` for the seam that does.

mod decode;
mod encode;
mod patch;
mod scalar;
mod value;

pub use decode::decode;
pub use encode::encode;
pub use patch::{Patch, PatchValue};
pub use value::{QueryObject, QueryValue};
