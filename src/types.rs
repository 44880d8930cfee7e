//! Types shared across the system call and platform layers.  Types strongly associated with a
//! single system call live next to that call.

#[allow(non_camel_case_types)]
pub type c_int = core::ffi::c_int;

#[allow(non_camel_case_types)]
pub type size_t = usize;

#[allow(non_camel_case_types)]
pub type c_void = core::ffi::c_void;

pub type CStr = core::ffi::CStr;

/// Byte count handed back across the runtime boundary.
///
/// Always within `0..=requested` where `requested` is the caller's `i32` length, so it never
/// needs the native `ssize_t` width.
pub type BytesWritten = i32;
