use crate::err::*;
use crate::pal::write_once;
use crate::syscall::*;
use crate::types::*;

pub const STDERR: Fd = Fd(2);

pub use crate::syscall::OpenFlags;

/// File descriptor
///
/// A plain handle.  Ownership and lifetime of the underlying descriptor belong to whoever created
/// it; nothing here tracks whether it is still open.
#[derive(Clone)]
pub struct Fd(c_int);

impl Fd {
    pub fn read(&self, buf: &mut [u8]) -> Result<usize, Errno> {
        unsafe { read(self.0, buf) }
    }

    /// One `write(2)` attempt of the whole slice.  May write less than `buf.len()`.
    ///
    /// A slice longer than `i32::MAX` bytes is rejected with `ERANGE`, the same as a negative
    /// length at the raw boundary.
    pub fn write_once(&self, buf: &[u8]) -> Result<BytesWritten, Errno> {
        let len = i32::try_from(buf.len()).map_err(|_| Errno::ERANGE)?;
        // Safety: the slice covers `len` readable bytes.
        unsafe { write_once(self.0, buf.as_ptr(), len) }
    }

    pub fn close(self) -> Result<(), Errno> {
        unsafe { close(self.0) }
    }

    pub fn set_nonblocking(&self, nonblocking: bool) -> Result<(), Errno> {
        let flags = unsafe { fcntl_int(self.0, FcntlCmd::F_GETFL, 0) }?;

        let new_flags = if nonblocking {
            flags | OpenFlags::O_NONBLOCK.bits()
        } else {
            flags & !OpenFlags::O_NONBLOCK.bits()
        };

        unsafe { fcntl_int(self.0, FcntlCmd::F_SETFL, new_flags) }?;

        Ok(())
    }

    pub fn is_nonblocking(&self) -> Result<bool, Errno> {
        let flags = unsafe { fcntl_int(self.0, FcntlCmd::F_GETFL, 0) }?;
        Ok(OpenFlags::from_bits(flags).contains(OpenFlags::O_NONBLOCK))
    }

    /// Bytes a pipe can hold before writers block (or get a short write / `EAGAIN`)
    pub fn pipe_capacity(&self) -> Result<usize, Errno> {
        let size = unsafe { fcntl_int(self.0, FcntlCmd::F_GETPIPE_SZ, 0) }?;
        usize::try_from(size).map_err(|_| Errno::EINVAL)
    }

    /// The kernel rounds `size` up to a power-of-two number of pages.  Returns the resulting
    /// capacity.
    pub fn set_pipe_capacity(&self, size: c_int) -> Result<usize, Errno> {
        let size = unsafe { fcntl_int(self.0, FcntlCmd::F_SETPIPE_SZ, size) }?;
        usize::try_from(size).map_err(|_| Errno::EINVAL)
    }

    pub fn from_raw(fd: c_int) -> Self {
        Self(fd)
    }

    pub fn as_raw(&self) -> c_int {
        self.0
    }

    /// Returns `(read_end, write_end)`
    pub fn new_pipe(flags: OpenFlags) -> Result<(Self, Self), Errno> {
        let mut fds: [c_int; 2] = [0, 0];
        unsafe { pipe2(&mut fds, flags)? };
        Ok((Self::from_raw(fds[0]), Self::from_raw(fds[1])))
    }
}

// No Drop impl.  Descriptors handed to us across the runtime boundary are owned by the caller,
// and closing them here would pull them out from under it.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipe_round_trip() {
        let (rd, wr) = Fd::new_pipe(OpenFlags::O_CLOEXEC).expect("pipe2");

        assert_eq!(wr.write_once(b"ping"), Ok(4));

        let mut buf = [0u8; 4];
        assert_eq!(rd.read(&mut buf), Ok(4));
        assert_eq!(&buf, b"ping");

        rd.close().expect("close");
        wr.close().expect("close");
    }

    #[test]
    fn test_empty_slice() {
        let (rd, wr) = Fd::new_pipe(OpenFlags::O_NONBLOCK).expect("pipe2");

        assert_eq!(wr.write_once(&[]), Ok(0));

        rd.close().expect("close");
        wr.close().expect("close");
    }

    #[test]
    fn test_toggle_nonblocking() {
        let (rd, wr) = Fd::new_pipe(OpenFlags::empty()).expect("pipe2");
        assert_eq!(rd.is_nonblocking(), Ok(false));

        rd.set_nonblocking(true).expect("set O_NONBLOCK");
        assert_eq!(rd.is_nonblocking(), Ok(true));

        let mut buf = [0u8; 1];
        assert_eq!(rd.read(&mut buf), Err(Errno::EAGAIN));

        rd.set_nonblocking(false).expect("clear O_NONBLOCK");
        assert_eq!(rd.is_nonblocking(), Ok(false));

        rd.close().expect("close");
        wr.close().expect("close");
    }

    #[test]
    fn test_shrink_pipe_capacity() {
        let (rd, wr) = Fd::new_pipe(OpenFlags::O_NONBLOCK).expect("pipe2");

        let requested = 1;
        let capacity = wr.set_pipe_capacity(requested).expect("F_SETPIPE_SZ");
        assert!(capacity >= requested as usize);
        assert_eq!(wr.pipe_capacity(), Ok(capacity));

        // Over PIPE_BUF, so the kernel takes what fits rather than failing with EAGAIN
        let data = vec![7u8; capacity * 2];
        let written = wr.write_once(&data).expect("write");
        assert_eq!(written as usize, capacity);

        rd.close().expect("close");
        wr.close().expect("close");
    }

    #[test]
    fn test_bad_descriptor() {
        let fd = Fd::from_raw(-1);
        assert_eq!(fd.write_once(b"x"), Err(Errno::EBADF));
        assert_eq!(fd.pipe_capacity(), Err(Errno::EBADF));
    }
}
