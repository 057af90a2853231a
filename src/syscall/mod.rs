//! System Call Interface
//!
//! The seam between program logic and the kernel trap.
//!
//! # Layers
//! - `arch::syscall3`: the raw trampoline, one trap per call
//! - [`Syscall`]: "issue one request with these register values"; the
//!   real [`Kernel`] forwards to the trampoline, tests substitute recorders
//! - [`write`] / [`nanosleep`]: typed arguments in, raw result out
//! - [`Errno`]: opt-in decoding of raw results
//!
//! # Current Syscalls
//! - write(fd, buf, len)
//! - nanosleep(req, rem)
//! - exit_group(status), on the panic path only

mod errno;
mod ops;

pub use crate::arch::numbers;
pub use errno::{Errno, MAX_ERRNO};
pub use ops::{exit_group, nanosleep, write};

/// A file descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct Fd(pub i32);

impl Fd {
    pub const STDIN: Self = Self(0);
    pub const STDOUT: Self = Self(1);
    pub const STDERR: Self = Self(2);

    /// Register value for this descriptor (sign-extended like a C `int`)
    #[inline]
    pub const fn as_arg(self) -> usize {
        self.0 as isize as usize
    }
}

/// Something that can carry a request into the kernel.
pub trait Syscall {
    /// Issue operation `num` with three word-sized arguments and return
    /// the raw result.
    ///
    /// # Safety
    /// Arguments must be valid for the requested operation. Pointers are
    /// passed through to the kernel unchecked.
    unsafe fn syscall3(&self, num: usize, a0: usize, a1: usize, a2: usize) -> isize;
}

/// The running kernel, reached through the architecture trap
#[derive(Debug, Clone, Copy, Default)]
pub struct Kernel;

impl Syscall for Kernel {
    #[inline(always)]
    unsafe fn syscall3(&self, num: usize, a0: usize, a1: usize, a2: usize) -> isize {
        // SAFETY: caller upholds the argument contract
        unsafe { crate::arch::syscall3(num, a0, a1, a2) }
    }
}

impl<S: Syscall + ?Sized> Syscall for &S {
    #[inline(always)]
    unsafe fn syscall3(&self, num: usize, a0: usize, a1: usize, a2: usize) -> isize {
        // SAFETY: forwarded unchanged
        unsafe { (**self).syscall3(num, a0, a1, a2) }
    }
}
