use crate::types::c_int;
use core::ops::BitOr;

/// File status flags accepted by `pipe2(2)` and reported by `fcntl(F_GETFL)`
#[derive(Clone, Copy)]
pub struct OpenFlags(c_int);

impl OpenFlags {
    pub const O_CLOEXEC: Self = Self(0o2000000);
    pub const O_NONBLOCK: Self = Self(0o0004000);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: c_int) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> c_int {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for OpenFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}
