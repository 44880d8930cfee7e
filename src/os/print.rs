//! Print framework
//!
//! Allocation-free output to stderr.  Every write goes through `Fd::write_once`, and
//! failures are ignored: there is nowhere left to report them.

use crate::os::{Fd, STDERR};
use crate::types::CStr;

pub fn eprint<T: Print>(s: T) {
    s.print(STDERR);
}

pub fn eprintln<T: Print>(s: T) {
    s.print(STDERR);
    b"\n".print(STDERR);
}

pub trait Print {
    fn print(&self, fd: Fd);
}

impl Print for &[u8] {
    fn print(&self, fd: Fd) {
        let _ = fd.write_once(self);
    }
}

impl<const N: usize> Print for &[u8; N] {
    fn print(&self, fd: Fd) {
        let _ = fd.write_once(*self);
    }
}

impl Print for &str {
    fn print(&self, fd: Fd) {
        let _ = fd.write_once(self.as_bytes());
    }
}

impl Print for &CStr {
    fn print(&self, fd: Fd) {
        let _ = fd.write_once(self.to_bytes());
    }
}

impl Print for i32 {
    fn print(&self, fd: Fd) {
        let _ = fd.write_once(itoa::Buffer::new().format(*self).as_bytes());
    }
}

impl Print for u32 {
    fn print(&self, fd: Fd) {
        let _ = fd.write_once(itoa::Buffer::new().format(*self).as_bytes());
    }
}

impl Print for usize {
    fn print(&self, fd: Fd) {
        let _ = fd.write_once(itoa::Buffer::new().format(*self).as_bytes());
    }
}
