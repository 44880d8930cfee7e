use crate::err::*;
use crate::syscall;
use crate::types::{BytesWritten, c_int};

/// Performs a single `write(2)` of up to `len` bytes from `buf` to `fd`.
///
/// - `len < 0` is rejected with `ERANGE` before the kernel is consulted.
/// - A short write is a success; the count is returned as-is and nothing is retried.  The same
///   holds for `EINTR` and `EAGAIN`, which come back as ordinary errors.
/// - Any kernel error is returned unchanged.
///
/// On success the result is always within `0..=len`.
///
/// # Safety
///
/// - `buf` must point to at least `len` readable bytes whenever `len > 0`.  It may be null when
///   `len == 0`.
/// - `fd` is not checked for openness.  A closed descriptor is reported by the kernel as `EBADF`,
///   but a descriptor number which has since been reused will be written to.
pub unsafe fn write_once(fd: c_int, buf: *const u8, len: i32) -> Result<BytesWritten, Errno> {
    let count = usize::try_from(len).map_err(|_| Errno::ERANGE)?;

    let written = unsafe { syscall::write(fd, buf, count) }?;
    debug_assert!(written <= count);

    // The kernel never reports more than it was given.  If it does, the platform is broken and
    // there is no meaningful value to hand back.
    let written =
        narrow(written, len).or_abort("write(2) reported more bytes than were requested");
    Ok(written)
}

/// Narrows a native byte count to the 32-bit result, or `None` if it exceeds `len`
fn narrow(written: usize, len: i32) -> Option<BytesWritten> {
    BytesWritten::try_from(written).ok().filter(|&n| n <= len)
}
