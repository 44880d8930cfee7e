use crate::err::*;
use crate::types::c_int;
use syscalls::{Sysno, syscall};

#[allow(non_camel_case_types)]
#[repr(C)]
pub enum FcntlCmd {
    F_GETFL = 3,
    F_SETFL = 4,
    F_SETPIPE_SZ = 1031,
    F_GETPIPE_SZ = 1032,
}

// `man 2 fcntl`:
//
// SYNOPSIS
//        int fcntl(int fd, int cmd, ... /* arg */ );
//
// RETURN VALUE
//        For a successful call, the return value depends on the operation:
//
//        F_GETFL
//               Value of file status flags.
//
//        F_GETPIPE_SZ, F_SETPIPE_SZ
//               The pipe capacity.
//
//        All other commands
//               Zero.
//
//        On error, -1 is returned, and errno is set to indicate the error.
pub unsafe fn fcntl_int(fd: c_int, cmd: FcntlCmd, arg: c_int) -> Result<c_int, Errno> {
    syscall!(Sysno::fcntl, fd, cmd, arg).map(|ret| ret as c_int)
}
