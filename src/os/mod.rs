//! Safe wrappers over the raw system call layer

mod exit;
mod fd;
mod print;
pub use exit::*;
pub use fd::*;
pub use print::*;
