//! Architecture-specific trap instructions
//!
//! Each backend exposes the same surface: `syscall3`, `exit_group` and the
//! `numbers` table. The `entry.S` stubs next to them are assembled by the
//! binary only, so test harnesses keep their own `_start`.

#[cfg(all(target_os = "linux", target_arch = "aarch64"))]
mod aarch64;
#[cfg(all(target_os = "linux", target_arch = "aarch64"))]
pub use aarch64::*;

#[cfg(all(target_os = "linux", target_arch = "x86_64"))]
mod x86_64;
#[cfg(all(target_os = "linux", target_arch = "x86_64"))]
pub use x86_64::*;

#[cfg(not(all(
    target_os = "linux",
    any(target_arch = "aarch64", target_arch = "x86_64")
)))]
compile_error!("example-app supports Linux on aarch64 (and x86_64 for host testing) only");
