use crate::err::*;
use crate::types::{c_int, size_t};
use syscalls::{Sysno, syscall};

// `man 2 write`:
//
// SYNOPSIS
//        ssize_t write(int fd, const void buf[.count], size_t count);
//
// RETURN VALUE
//        On success, the number of bytes written is returned.  On error, -1 is returned, and errno
//        is set to indicate the error.
//
//        Note that a successful write() may transfer fewer than count bytes.
//
// Takes a raw pointer rather than a slice: a zero `count` may come with a null `buf`, which a
// slice cannot represent.
pub unsafe fn write(fd: c_int, buf: *const u8, count: size_t) -> Result<size_t, Errno> {
    syscall!(Sysno::write, fd, buf, count)
}
