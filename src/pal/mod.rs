//! Platform abstraction layer entry points
//!
//! Normalizes native system call results into the fixed 32-bit contract the managed runtime
//! expects.  With the `ffi` feature the same operations are also exported under the C ABI.

#[cfg(feature = "ffi")]
mod ffi;
mod write;
#[cfg(feature = "ffi")]
pub use ffi::*;
pub use write::*;
