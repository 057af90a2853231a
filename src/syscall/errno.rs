//! Kernel Error Codes
//!
//! Linux reports failure by returning `-errno` in the result register.
//! Any raw result in `-4095..=-1` is an error; everything else is a
//! successful return value.
//!
//! Decoding is opt-in. The trampoline and the operation wrappers hand back
//! the raw value and never call into this module themselves.

use core::fmt;

/// Largest errno value the kernel encodes in a syscall result
pub const MAX_ERRNO: i32 = 4095;

/// A positive Linux error number
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct Errno(i32);

impl Errno {
    /// Interrupted system call (sleep woken by a signal)
    pub const EINTR: Self = Self(4);
    /// Bad file descriptor
    pub const EBADF: Self = Self(9);
    /// Resource temporarily unavailable
    pub const EAGAIN: Self = Self(11);
    /// Bad address (invalid pointer)
    pub const EFAULT: Self = Self(14);
    /// Invalid argument
    pub const EINVAL: Self = Self(22);
    /// Broken pipe
    pub const EPIPE: Self = Self(32);
    /// Invalid system call number
    pub const ENOSYS: Self = Self(38);

    /// Wrap a raw positive error number.
    #[inline]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Get the raw positive error number.
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Decode a raw syscall result.
    ///
    /// # Returns
    /// * `Ok(value)` - the kernel reported success
    /// * `Err(errno)` - the result was in the error range
    #[inline]
    pub const fn from_ret(ret: isize) -> Result<usize, Errno> {
        if ret < 0 && ret >= -(MAX_ERRNO as isize) {
            Err(Self(-ret as i32))
        } else {
            Ok(ret as usize)
        }
    }

    /// Symbolic name for the error numbers this program can observe
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            4 => Some("EINTR"),
            9 => Some("EBADF"),
            11 => Some("EAGAIN"),
            14 => Some("EFAULT"),
            22 => Some("EINVAL"),
            32 => Some("EPIPE"),
            38 => Some("ENOSYS"),
            _ => None,
        }
    }
}

impl fmt::Debug for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Errno({})", self.0),
        }
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", name, self.0),
            None => write!(f, "errno {}", self.0),
        }
    }
}
