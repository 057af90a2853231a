//! Typed syscall operations
//!
//! Each function marshals its arguments into one request and returns the
//! kernel's raw result. No retries, no short-write loops, no checks.

use super::{numbers, Fd, Syscall};
use crate::time::Timespec;

/// Write `buf` to `fd`
///
/// # Returns
/// Bytes written, or `-errno`. A short count is returned as-is.
#[inline]
pub fn write<S: Syscall + ?Sized>(sys: &S, fd: Fd, buf: &[u8]) -> isize {
    // SAFETY: buf is a live slice, readable for buf.len() bytes
    unsafe {
        sys.syscall3(
            numbers::WRITE,
            fd.as_arg(),
            buf.as_ptr() as usize,
            buf.len(),
        )
    }
}

/// Suspend the calling thread for `req`
///
/// The kernel stores the unslept time in `rem` if the sleep is interrupted.
///
/// # Returns
/// `0` after a full sleep, or `-errno` (`EINTR` on early wake).
#[inline]
pub fn nanosleep<S: Syscall + ?Sized>(sys: &S, req: &Timespec, rem: &mut Timespec) -> isize {
    // SAFETY:
    // - req is readable and rem writable for size_of::<Timespec>() bytes
    // - Timespec is #[repr(C)] in the kernel's layout
    unsafe {
        sys.syscall3(
            numbers::NANOSLEEP,
            req as *const Timespec as usize,
            rem as *mut Timespec as usize,
            0,
        )
    }
}

/// Terminate the process with `status`
#[inline]
pub fn exit_group(status: i32) -> ! {
    crate::arch::exit_group(status)
}
