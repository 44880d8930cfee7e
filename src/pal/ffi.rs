use crate::pal::write_once;
use crate::types::{c_int, c_void};

fn set_errno(e: c_int) {
    unsafe { *libc::__errno_location() = e };
}

/// C ABI form of [`write_once`].
///
/// Returns the number of bytes written, or `-1` with `errno` set.  `errno` is `ERANGE` when
/// `buffer_size` is negative, otherwise whatever the kernel reported.  It is not touched on
/// success.
///
/// # Safety
///
/// Same as [`write_once`]: `buffer` must cover `buffer_size` readable bytes when
/// `buffer_size > 0`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pal_write(fd: i32, buffer: *const c_void, buffer_size: i32) -> i32 {
    match unsafe { write_once(fd, buffer.cast::<u8>(), buffer_size) } {
        Ok(written) => written,
        Err(e) => {
            set_errno(e.into_raw());
            -1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::os::{Fd, OpenFlags};

    fn errno() -> c_int {
        unsafe { *libc::__errno_location() }
    }

    #[test]
    fn test_negative_size_sets_erange() {
        let (rd, wr) = Fd::new_pipe(OpenFlags::O_NONBLOCK).expect("pipe2");
        let data = b"abc";

        set_errno(0);
        let ret = unsafe { pal_write(wr.as_raw(), data.as_ptr().cast(), -3) };
        assert_eq!(ret, -1);
        assert_eq!(errno(), libc::ERANGE);

        let mut buf = [0u8; 8];
        assert_eq!(rd.read(&mut buf), Err(crate::err::Errno::EAGAIN));

        rd.close().expect("close");
        wr.close().expect("close");
    }

    #[test]
    fn test_success_leaves_errno_alone() {
        let (rd, wr) = Fd::new_pipe(OpenFlags::O_NONBLOCK).expect("pipe2");
        let data = b"hello";

        set_errno(libc::EINTR);
        let ret = unsafe { pal_write(wr.as_raw(), data.as_ptr().cast(), data.len() as i32) };
        assert_eq!(ret, 5);
        assert_eq!(errno(), libc::EINTR);

        let mut buf = [0u8; 8];
        assert_eq!(rd.read(&mut buf), Ok(5));
        assert_eq!(&buf[..5], data);

        rd.close().expect("close");
        wr.close().expect("close");
    }

    #[test]
    fn test_zero_size_null_buffer() {
        let (rd, wr) = Fd::new_pipe(OpenFlags::O_NONBLOCK).expect("pipe2");

        set_errno(0);
        let ret = unsafe { pal_write(wr.as_raw(), core::ptr::null(), 0) };
        assert_eq!(ret, 0);
        assert_eq!(errno(), 0);

        rd.close().expect("close");
        wr.close().expect("close");
    }

    #[test]
    fn test_bad_descriptor_sets_kernel_errno() {
        let data = b"abc";

        set_errno(0);
        let ret = unsafe { pal_write(-1, data.as_ptr().cast(), data.len() as i32) };
        assert_eq!(ret, -1);
        assert_eq!(errno(), libc::EBADF);
    }
}
