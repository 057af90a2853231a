//! example-app binary
//!
//! Prints `Example Application` once per second, forever.
//!
//! # Startup
//! - The kernel enters `_start` (see `arch/<arch>/entry.S`)
//! - `_start` aligns the stack and calls [`app_main`]
//! - `app_main` installs the stderr logger and enters the loop
//!
//! The process only ends when it is killed, or on panic.

#![no_std]
#![no_main]
#![deny(unsafe_op_in_unsafe_fn)]

use core::arch::global_asm;
use core::panic::PanicInfo;

use example_app::syscall::{self, Kernel};
use example_app::{app, config, cprintln, logger};

#[cfg(target_arch = "aarch64")]
global_asm!(include_str!("arch/aarch64/entry.S"));

#[cfg(target_arch = "x86_64")]
global_asm!(include_str!("arch/x86_64/entry.S"));

/// Exit status reported after a panic
const PANIC_EXIT_CODE: i32 = 101;

/// Program entry point called from `_start`
#[no_mangle]
pub extern "C" fn app_main() -> ! {
    // A second install is impossible here; logging just stays off if it fails
    let _ = logger::init(config::LOG_LEVEL);

    app::run(&Kernel)
}

/// Panic handler - report on stderr and exit
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    cprintln!();
    cprintln!("!!! PANIC !!!");

    if let Some(location) = info.location() {
        cprintln!(
            "Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        );
    }

    cprintln!("Message: {}", info.message());

    syscall::exit_group(PANIC_EXIT_CODE)
}
