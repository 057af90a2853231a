//! x86_64 Linux syscall trampoline
//!
//! Kept so the crate and its tests run on x86_64 development hosts.
//!
//! # Calling Convention
//! - `syscall` traps into the kernel
//! - rax holds the syscall number and the result
//! - rdi, rsi, rdx, r10, r8, r9 hold the arguments
//! - rcx and r11 are overwritten by the instruction itself

use core::arch::asm;

/// Linux x86_64 syscall numbers
pub mod numbers {
    pub const WRITE: usize = 1;
    pub const NANOSLEEP: usize = 35;
    pub const GETPID: usize = 39;
    pub const EXIT_GROUP: usize = 231;
}

/// Issue a three-argument system call
///
/// # Safety
/// Same contract as the AArch64 trampoline: arguments must be valid for
/// the requested operation.
#[inline(always)]
pub unsafe fn syscall3(num: usize, a0: usize, a1: usize, a2: usize) -> isize {
    let ret: isize;
    // SAFETY: rcx/r11 are declared clobbered; rflags is restored from r11
    // on return to user mode.
    unsafe {
        asm!(
            "syscall",
            inlateout("rax") num as isize => ret,
            in("rdi") a0,
            in("rsi") a1,
            in("rdx") a2,
            lateout("rcx") _,
            lateout("r11") _,
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
            "syscall",
            in("rax") numbers::EXIT_GROUP,
            in("rdi") code as isize as usize,
            options(noreturn, nostack)
        );
    }
}
