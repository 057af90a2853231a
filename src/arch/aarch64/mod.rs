//! AArch64 Linux syscall trampoline
//!
//! # Calling Convention
//! - `svc #0` traps into the kernel
//! - x8 holds the syscall number
//! - x0-x5 hold the arguments
//! - x0 holds the result on return
//!
//! The kernel restores every register except x0 before returning to EL0,
//! so x0 is the only register declared as written.

use core::arch::asm;

/// Linux AArch64 syscall numbers (asm-generic table)
pub mod numbers {
    pub const WRITE: usize = 64;
    pub const EXIT_GROUP: usize = 94;
    pub const NANOSLEEP: usize = 101;
    pub const GETPID: usize = 172;
}

/// Issue a three-argument system call
///
/// Executes exactly one `svc #0` with `num` in x8 and the arguments in
/// x0-x2, and returns x0 untouched.
///
/// # Safety
/// The caller must ensure the arguments are valid for the requested
/// operation (pointers readable/writable for the lengths the kernel will
/// use). The kernel may act on memory reachable through them.
#[inline(always)]
pub unsafe fn syscall3(num: usize, a0: usize, a1: usize, a2: usize) -> isize {
    let ret: isize;
    // SAFETY:
    // - Only x0, x1, x2, x8 are bound; x0 is the only register written
    // - No stack access, flags are not modified by the trap
    // - Memory effects are allowed (no `nomem`/`readonly`)
    unsafe {
        asm!(
            "svc #0",
            in("x8") num,
            inlateout("x0") a0 => ret,
            in("x1") a1,
            in("x2") a2,
            options(nostack, preserves_flags)
        );
    }
    ret
}

/// Terminate every thread in the process
pub fn exit_group(code: i32) -> ! {
    // SAFETY: exit_group takes no pointers and never returns
    unsafe {
        asm!(
            "svc #0",
            in("x8") numbers::EXIT_GROUP,
            in("x0") code as isize as usize,
            options(noreturn, nostack)
        );
    }
}
