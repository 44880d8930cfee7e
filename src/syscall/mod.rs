//! Raw Linux system calls
//!
//! One file per system call.  These are thin `unsafe` shims over `syscalls::syscall!` which
//! report failure as `Err(Errno)` rather than through a thread-local errno.

mod close;
mod exit;
mod fcntl;
mod flags;
mod pipe;
mod read;
mod write;
pub use close::*;
pub use exit::*;
pub use fcntl::*;
pub use flags::*;
pub use pipe::*;
pub use read::*;
pub use write::*;
