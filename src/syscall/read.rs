use crate::err::*;
use crate::types::c_int;
use syscalls::{Sysno, syscall};

// `man 2 read`:
//
// SYNOPSIS
//        ssize_t read(int fd, void *buf, size_t count);
//
// RETURN VALUE
//        On success, the number of bytes read is returned (zero indicates end of file).  On
//        error, -1 is returned, and errno is set to indicate the error.
//
// ERRORS
//        EAGAIN The file descriptor fd refers to a file other than a socket and has been marked
//               nonblocking (O_NONBLOCK), and the read would block.
pub unsafe fn read(fd: c_int, buf: &mut [u8]) -> Result<usize, Errno> {
    syscall!(Sysno::read, fd, buf.as_mut_ptr(), buf.len())
}
