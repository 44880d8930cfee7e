#![cfg_attr(not(test), no_std)]

// Raw system calls, one per file, issued without libc
pub mod syscall;

// Safe wrappers: file descriptors, printing, process exit
pub mod os;

// Runtime-facing entry points with a fixed 32-bit result contract
pub mod pal;

pub mod err;
pub mod types;
