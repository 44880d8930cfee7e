//! # Error handling
//!
//! Every fallible operation reports through `Result<_, Errno>`.  Nothing here sets a thread-local
//! errno; callers get the error code directly.
//!
//! A small number of conditions are not errors at all but broken platform contracts, e.g. the
//! kernel claiming to have written more bytes than it was offered.  Those are unrecoverable: we
//! print what happened to stderr and exit.  Our print machinery does not support `{}`-formatting,
//! so the message is a single `Print`-able value.

use crate::os::*;

pub type Errno = syscalls::Errno;

fn abort() -> ! {
    exit(1)
}

pub fn abort_with_msg<M: Print>(msg: M) -> ! {
    eprint("ERROR: ");
    eprintln(msg);

    abort()
}

pub trait OrAbortOption<T> {
    fn or_abort<M: Print>(self, msg: M) -> T;
}

impl<T> OrAbortOption<T> for Option<T> {
    fn or_abort<M: Print>(self, msg: M) -> T {
        match self {
            Some(t) => t,
            None => abort_with_msg(msg),
        }
    }
}
